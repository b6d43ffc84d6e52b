use contracts::system::onboarding::{
    AccountTypeId, Guard, GuardOutcome, OnboardingError, OnboardingProgress, RouteKind,
    RouteTable, SectorId, SessionStore, Stage,
};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

/// Reactive handle over the session store.
///
/// The store pushes every mutation into `progress` synchronously, so any guard
/// reading it re-evaluates before the next render.
#[derive(Clone, Copy)]
pub struct OnboardingContext {
    pub progress: RwSignal<OnboardingProgress>,
    store: StoredValue<SessionStore, LocalStorage>,
    table: StoredValue<RouteTable>,
    return_path: RwSignal<Option<String>>,
    return_path_enabled: bool,
}

impl OnboardingContext {
    pub fn new(mut store: SessionStore, table: RouteTable, return_path_enabled: bool) -> Self {
        let progress = RwSignal::new(store.progress().clone());
        store.subscribe(move |p| progress.set(p.clone()));

        Self {
            progress,
            store: StoredValue::new_local(store),
            table: StoredValue::new(table),
            return_path: RwSignal::new(None),
            return_path_enabled,
        }
    }

    pub fn stage(&self) -> Stage {
        self.progress.with(|p| p.stage())
    }

    pub fn table(&self) -> RouteTable {
        self.table.get_value()
    }

    pub fn canonical_path(&self, stage: Stage) -> String {
        self.table
            .with_value(|t| t.canonical_path(stage).to_string())
    }

    /// Tracked: re-runs when progress changes.
    pub fn evaluate(&self, guard: &Guard) -> GuardOutcome {
        self.progress
            .with(|p| self.table.with_value(|t| guard.evaluate(p, t)))
    }

    /// Untracked check made once when a gate mounts, i.e. on navigation.
    ///
    /// Only here is the requested path remembered for resuming later; later
    /// progress changes (logout included) re-evaluate through [`Self::evaluate`]
    /// and never record one.
    pub fn enter(&self, guard: &Guard) -> GuardOutcome {
        let outcome = self
            .progress
            .with_untracked(|p| self.table.with_value(|t| guard.evaluate(p, t)));
        if let GuardOutcome::Redirect {
            return_to: Some(path),
            ..
        } = &outcome
        {
            self.remember_return_path(path.clone());
        }
        outcome
    }

    pub fn login(&self) {
        self.store.update_value(|s| s.login());
    }

    pub fn choose_sector(&self, id: SectorId) -> Result<(), OnboardingError> {
        let mut result = Ok(());
        self.store.update_value(|s| result = s.choose_sector(id));
        result
    }

    pub fn choose_account_type(&self, id: AccountTypeId) -> Result<(), OnboardingError> {
        let mut result = Ok(());
        self.store.update_value(|s| result = s.choose_account_type(id));
        result
    }

    pub fn logout(&self) {
        self.return_path.set(None);
        self.store.update_value(|s| s.logout());
    }

    pub fn remember_return_path(&self, path: String) {
        if self.return_path_enabled {
            self.return_path.set(Some(path));
        }
    }

    /// Where to go once onboarding completes. Only registered protected
    /// routes are resumed; anything else lands on the dashboard.
    pub fn take_return_path(&self) -> String {
        let remembered = self.return_path.try_update(|p| p.take()).flatten();
        self.table.with_value(|t| {
            remembered
                .filter(|path| t.contains(path) && t.lookup(path).kind == RouteKind::Protected)
                .unwrap_or_else(|| t.canonical_path(Stage::Onboarded).to_string())
        })
    }
}

pub fn provide_onboarding(ctx: OnboardingContext) {
    provide_context(ctx);
}

/// Hook to access onboarding state
pub fn use_onboarding() -> OnboardingContext {
    use_context::<OnboardingContext>().expect("OnboardingContext not found in component tree")
}
