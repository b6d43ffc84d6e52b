//! Durable record of onboarding progress.
//!
//! ```json
//! { "version": 1, "isAuthenticated": true, "selectedSector": "retail", "selectedAccountType": null }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::OnboardingError;
use super::model::{AccountTypeId, OnboardingProgress, SectorId};

pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProgress {
    pub version: u32,
    pub is_authenticated: bool,
    pub selected_sector: Option<String>,
    pub selected_account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl From<&OnboardingProgress> for PersistedProgress {
    fn from(progress: &OnboardingProgress) -> Self {
        Self {
            version: RECORD_VERSION,
            is_authenticated: progress.is_authenticated(),
            selected_sector: progress.selected_sector().map(|s| s.0.clone()),
            selected_account_type: progress.selected_account_type().map(|a| a.0.clone()),
            saved_at: Some(Utc::now()),
        }
    }
}

impl TryFrom<PersistedProgress> for OnboardingProgress {
    type Error = OnboardingError;

    fn try_from(record: PersistedProgress) -> Result<Self, Self::Error> {
        if record.version != RECORD_VERSION {
            return Err(OnboardingError::CorruptPersistedState(format!(
                "unsupported version {}",
                record.version
            )));
        }
        OnboardingProgress::from_parts(
            record.is_authenticated,
            record.selected_sector.map(SectorId),
            record.selected_account_type.map(AccountTypeId),
        )
        .ok_or_else(|| {
            OnboardingError::CorruptPersistedState("fields violate onboarding order".to_string())
        })
    }
}

pub fn encode(progress: &OnboardingProgress) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedProgress::from(progress))
}

pub fn try_decode(raw: &str) -> Result<OnboardingProgress, OnboardingError> {
    let record: PersistedProgress = serde_json::from_str(raw)
        .map_err(|e| OnboardingError::CorruptPersistedState(e.to_string()))?;
    OnboardingProgress::try_from(record)
}

/// Missing or unreadable records load as the anonymous zero value.
pub fn decode(raw: Option<&str>) -> OnboardingProgress {
    let Some(raw) = raw else {
        return OnboardingProgress::anonymous();
    };
    match try_decode(raw) {
        Ok(progress) => progress,
        Err(e) => {
            log::warn!("Discarding persisted onboarding progress: {}", e);
            OnboardingProgress::anonymous()
        }
    }
}
