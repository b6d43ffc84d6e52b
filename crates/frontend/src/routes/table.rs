use contracts::system::onboarding::routes::normalize_path;
use contracts::system::onboarding::{
    Guard, RouteDescriptor, RouteTable, RouteTableError, Stage, StageAnchors,
};

use crate::dashboards::OVERVIEW;
use crate::shared::page_loader::PageModule;

/// What a normalised path renders, and behind which guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// `/` forwards to the dashboard anchor.
    Root { redirect_to: String },
    Login(Guard),
    SelectSector(Guard),
    SelectAccount(Guard),
    /// Dashboard, content pages and unknown paths. `page_path` is the module to host.
    Dashboard { guard: Guard, page_path: String },
}

pub fn route_target(table: &RouteTable, path: &str) -> RouteTarget {
    let path = normalize_path(path);
    let anchors = table.anchors();

    if path == "/" {
        return RouteTarget::Root {
            redirect_to: table.canonical_path(Stage::Onboarded).to_string(),
        };
    }
    if path == anchors.login {
        return RouteTarget::Login(Guard::public_entry(table));
    }
    if path == anchors.select_sector {
        return RouteTarget::SelectSector(Guard::sector_step(table));
    }
    if path == anchors.select_account_type {
        return RouteTarget::SelectAccount(Guard::account_type_step(table));
    }

    let page_path = if path == anchors.dashboard {
        OVERVIEW.path.to_string()
    } else {
        path.to_string()
    };
    RouteTarget::Dashboard {
        guard: Guard::for_path(table, path),
        page_path,
    }
}

/// Anchor routes plus one protected route per dashboard page.
///
/// The overview module is served at the dashboard anchor, so its own path is
/// only registered when the anchor points elsewhere.
pub fn build_route_table(
    anchors: &StageAnchors,
    modules: &[PageModule],
) -> Result<RouteTable, RouteTableError> {
    let mut table = RouteTable::new(anchors.clone())?;
    for module in modules {
        if normalize_path(module.path) == normalize_path(&anchors.dashboard) {
            continue;
        }
        table.register(RouteDescriptor::protected(module.path))?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::PAGE_MODULES;
    use contracts::system::onboarding::{GuardOutcome, OnboardingProgress, RouteKind};

    fn table() -> RouteTable {
        build_route_table(&StageAnchors::default(), PAGE_MODULES).unwrap()
    }

    #[test]
    fn test_every_page_is_protected() {
        let table = build_route_table(&StageAnchors::default(), PAGE_MODULES).unwrap();
        for module in PAGE_MODULES {
            let route = table.lookup(module.path);
            assert_eq!(route.kind, RouteKind::Protected, "{}", module.path);
            assert_eq!(route.required_stage, Stage::Onboarded, "{}", module.path);
        }
    }

    #[test]
    fn test_onboarding_anchors_kept() {
        let table = build_route_table(&StageAnchors::default(), PAGE_MODULES).unwrap();
        assert_eq!(table.lookup("/login").kind, RouteKind::Public);
        assert_eq!(table.lookup("/select-sector").kind, RouteKind::OnboardingStep);
        assert_eq!(table.lookup("/select-account").kind, RouteKind::OnboardingStep);
    }

    #[test]
    fn test_page_colliding_with_onboarding_anchor_rejected() {
        let anchors = StageAnchors {
            select_sector: "/dashboard/tasks".into(),
            ..StageAnchors::default()
        };
        assert!(build_route_table(&anchors, PAGE_MODULES).is_err());
    }

    #[test]
    fn test_root_forwards_to_dashboard() {
        assert_eq!(
            route_target(&table(), "/"),
            RouteTarget::Root { redirect_to: "/dashboard".into() }
        );
    }

    #[test]
    fn test_onboarding_anchors_get_their_guards() {
        let table = table();
        assert_eq!(route_target(&table, "/login"), RouteTarget::Login(Guard::public_entry(&table)));
        assert_eq!(
            route_target(&table, "/select-sector/"),
            RouteTarget::SelectSector(Guard::sector_step(&table))
        );
        assert_eq!(
            route_target(&table, "/select-account"),
            RouteTarget::SelectAccount(Guard::account_type_step(&table))
        );
    }

    #[test]
    fn test_dashboard_anchor_hosts_overview() {
        let table = table();
        match route_target(&table, "/dashboard") {
            RouteTarget::Dashboard { guard, page_path } => {
                assert_eq!(page_path, OVERVIEW.path);
                assert_eq!(guard, Guard::for_path(&table, "/dashboard"));
            }
            other => panic!("unexpected target: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_path_is_protected() {
        let table = table();
        let RouteTarget::Dashboard { guard, page_path } = route_target(&table, "/nope") else {
            panic!("unknown path must render behind the dashboard guard");
        };
        assert_eq!(page_path, "/nope");
        assert_eq!(
            guard.evaluate(&OnboardingProgress::anonymous(), &table),
            GuardOutcome::Redirect {
                to: "/login".into(),
                return_to: Some("/nope".into()),
            }
        );
    }
}
