use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор отрасли (sector), выбранной пользователем
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(pub String);

/// Идентификатор типа аккаунта
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountTypeId(pub String);

impl SectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AccountTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for AccountTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Onboarding milestones in the order a session reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Anonymous,
    SectorPending,
    AccountTypePending,
    Onboarded,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Anonymous => Some(Stage::SectorPending),
            Stage::SectorPending => Some(Stage::AccountTypePending),
            Stage::AccountTypePending => Some(Stage::Onboarded),
            Stage::Onboarded => None,
        }
    }
}

/// How far the session has advanced through onboarding.
///
/// Fields are nested: an account type implies a sector, a sector implies an
/// authenticated session. The only ways to obtain a value are the zero value,
/// [`OnboardingProgress::from_parts`] (which checks the nesting) and the
/// mutations below, which keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingProgress {
    is_authenticated: bool,
    selected_sector: Option<SectorId>,
    selected_account_type: Option<AccountTypeId>,
}

impl OnboardingProgress {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns `None` when the fields break the nesting.
    pub fn from_parts(
        is_authenticated: bool,
        selected_sector: Option<SectorId>,
        selected_account_type: Option<AccountTypeId>,
    ) -> Option<Self> {
        if selected_sector.is_some() && !is_authenticated {
            return None;
        }
        if selected_account_type.is_some() && selected_sector.is_none() {
            return None;
        }
        Some(Self {
            is_authenticated,
            selected_sector,
            selected_account_type,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn selected_sector(&self) -> Option<&SectorId> {
        self.selected_sector.as_ref()
    }

    pub fn selected_account_type(&self) -> Option<&AccountTypeId> {
        self.selected_account_type.as_ref()
    }

    pub fn stage(&self) -> Stage {
        match (
            self.is_authenticated,
            &self.selected_sector,
            &self.selected_account_type,
        ) {
            (false, _, _) => Stage::Anonymous,
            (true, None, _) => Stage::SectorPending,
            (true, Some(_), None) => Stage::AccountTypePending,
            (true, Some(_), Some(_)) => Stage::Onboarded,
        }
    }

    pub(crate) fn set_authenticated(&mut self) {
        self.is_authenticated = true;
    }

    /// Caller checks authentication. A different sector drops the account type.
    pub(crate) fn set_sector(&mut self, id: SectorId) {
        if self.selected_sector.as_ref() != Some(&id) {
            self.selected_account_type = None;
        }
        self.selected_sector = Some(id);
    }

    /// Caller checks that a sector is set.
    pub(crate) fn set_account_type(&mut self, id: AccountTypeId) {
        self.selected_account_type = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(Stage::Anonymous < Stage::SectorPending);
        assert!(Stage::SectorPending < Stage::AccountTypePending);
        assert!(Stage::AccountTypePending < Stage::Onboarded);
        assert_eq!(Stage::Onboarded.next(), None);
        assert_eq!(Stage::Anonymous.next(), Some(Stage::SectorPending));
    }

    #[test]
    fn test_stage_derivation() {
        assert_eq!(OnboardingProgress::anonymous().stage(), Stage::Anonymous);

        let p = OnboardingProgress::from_parts(true, None, None).unwrap();
        assert_eq!(p.stage(), Stage::SectorPending);

        let p = OnboardingProgress::from_parts(true, Some(SectorId::new("retail")), None).unwrap();
        assert_eq!(p.stage(), Stage::AccountTypePending);

        let p = OnboardingProgress::from_parts(
            true,
            Some(SectorId::new("retail")),
            Some(AccountTypeId::new("owner")),
        )
        .unwrap();
        assert_eq!(p.stage(), Stage::Onboarded);
    }

    #[test]
    fn test_from_parts_rejects_broken_nesting() {
        assert!(OnboardingProgress::from_parts(false, Some(SectorId::new("retail")), None).is_none());
        assert!(
            OnboardingProgress::from_parts(true, None, Some(AccountTypeId::new("owner"))).is_none()
        );
    }

    #[test]
    fn test_changing_sector_drops_account_type() {
        let mut p = OnboardingProgress::from_parts(
            true,
            Some(SectorId::new("retail")),
            Some(AccountTypeId::new("owner")),
        )
        .unwrap();

        p.set_sector(SectorId::new("retail"));
        assert_eq!(p.stage(), Stage::Onboarded);

        p.set_sector(SectorId::new("logistics"));
        assert_eq!(p.stage(), Stage::AccountTypePending);
        assert!(p.selected_account_type().is_none());
    }
}
