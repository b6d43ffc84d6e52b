//! Property tests for the progressive access gate.

use contracts::system::onboarding::persisted;
use contracts::system::onboarding::{
    resolve, AccountTypeId, Decision, MemoryStorage, OnboardingProgress, RouteDescriptor,
    RouteKind, RouteTable, SectorId, SessionStore, Stage,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    Login,
    ChooseSector(&'static str),
    ChooseAccountType(&'static str),
    Logout,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Login),
        prop_oneof![Just("retail"), Just("logistics"), Just("healthcare")]
            .prop_map(Action::ChooseSector),
        prop_oneof![Just("owner"), Just("manager"), Just("staff")]
            .prop_map(Action::ChooseAccountType),
        Just(Action::Logout),
    ]
}

fn apply(store: &mut SessionStore, action: &Action) {
    // Out-of-order actions are rejected and leave progress untouched.
    let _ = match action {
        Action::Login => {
            store.login();
            Ok(())
        }
        Action::ChooseSector(id) => store.choose_sector(SectorId::new(*id)),
        Action::ChooseAccountType(id) => store.choose_account_type(AccountTypeId::new(*id)),
        Action::Logout => {
            store.logout();
            Ok(())
        }
    };
}

fn arb_progress() -> impl Strategy<Value = OnboardingProgress> {
    prop::collection::vec(arb_action(), 0..12).prop_map(|actions| {
        let mut store = SessionStore::open(MemoryStorage::new());
        for action in &actions {
            apply(&mut store, action);
        }
        store.progress().clone()
    })
}

fn table() -> RouteTable {
    let mut table = RouteTable::default();
    for path in ["/dashboard/employees", "/dashboard/invoices", "/dashboard/tasks"] {
        table
            .register(RouteDescriptor::protected(path))
            .expect("register content page");
    }
    table
}

/// Every registered route plus one the table does not know.
fn routes(table: &RouteTable) -> Vec<RouteDescriptor> {
    let mut routes: Vec<_> = table.iter().cloned().collect();
    routes.push(table.lookup("/unknown-page"));
    routes
}

fn nesting_holds(p: &OnboardingProgress) -> bool {
    (p.selected_account_type().is_none() || p.selected_sector().is_some())
        && (p.selected_sector().is_none() || p.is_authenticated())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn nesting_invariant_holds_after_every_action(
        actions in prop::collection::vec(arb_action(), 0..24)
    ) {
        let mut store = SessionStore::open(MemoryStorage::new());
        for action in &actions {
            apply(&mut store, action);
            prop_assert!(nesting_holds(store.progress()), "after {:?}: {:?}", action, store.progress());
        }
    }

    #[test]
    fn resolve_is_deterministic(progress in arb_progress()) {
        let table = table();
        for route in routes(&table) {
            let first = resolve(&progress, &route, table.anchors());
            let second = resolve(&progress, &route, table.anchors());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn redirects_never_skip_ahead(progress in arb_progress()) {
        let table = table();
        let user_stage = progress.stage();
        for route in routes(&table) {
            if let Decision::RedirectTo(target) = resolve(&progress, &route, table.anchors()) {
                prop_assert_eq!(target.as_str(), table.canonical_path(user_stage));
                match route.kind {
                    RouteKind::Public => {
                        prop_assert!(user_stage > route.required_stage);
                    }
                    RouteKind::Protected | RouteKind::OnboardingStep => {
                        prop_assert!(user_stage < route.required_stage);
                        // The target page completes exactly one stage, never past the requirement.
                        let reached = user_stage.next().expect("onboarded users are never redirected");
                        prop_assert!(reached <= route.required_stage);
                    }
                }
            }
        }
    }

    #[test]
    fn persisted_record_preserves_decisions(progress in arb_progress()) {
        let table = table();
        let raw = persisted::encode(&progress).expect("encode progress");
        let restored = persisted::try_decode(&raw).expect("decode progress");
        for route in routes(&table) {
            prop_assert_eq!(
                resolve(&progress, &route, table.anchors()),
                resolve(&restored, &route, table.anchors())
            );
        }
    }

    #[test]
    fn logout_is_idempotent(actions in prop::collection::vec(arb_action(), 0..12)) {
        let mut store = SessionStore::open(MemoryStorage::new());
        for action in &actions {
            apply(&mut store, action);
        }
        store.logout();
        let once = store.progress().clone();
        store.logout();
        prop_assert_eq!(&once, store.progress());
        prop_assert_eq!(once.stage(), Stage::Anonymous);
    }
}

#[test]
fn scenario_walkthrough() {
    let table = table();
    let decide = |p: &OnboardingProgress, path: &str| resolve(p, &table.lookup(path), table.anchors());
    let redirect = |path: &str| Decision::RedirectTo(path.to_string());

    let mut store = SessionStore::open(MemoryStorage::new());
    assert_eq!(decide(store.progress(), "/dashboard"), redirect("/login"));
    assert_eq!(decide(store.progress(), "/unknown-page"), redirect("/login"));

    store.login();
    assert_eq!(decide(store.progress(), "/dashboard"), redirect("/select-sector"));

    store.choose_sector(SectorId::new("retail")).unwrap();
    assert_eq!(decide(store.progress(), "/select-sector"), Decision::Allow);
    assert_eq!(decide(store.progress(), "/login"), redirect("/select-account"));

    store.choose_account_type(AccountTypeId::new("owner")).unwrap();
    assert_eq!(decide(store.progress(), "/login"), redirect("/dashboard"));
    assert_eq!(decide(store.progress(), "/dashboard/invoices"), Decision::Allow);
}
