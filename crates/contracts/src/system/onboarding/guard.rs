//! One parameterised guard replaces per-page wrapper components.

use super::model::{OnboardingProgress, Stage};
use super::resolver::{resolve, Decision};
use super::routes::{RouteDescriptor, RouteKind, RouteTable};

/// Outcome of one guard evaluation. Exactly one of render or redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect {
        to: String,
        /// Requested path to resume after onboarding; set only for protected routes.
        return_to: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    route: RouteDescriptor,
}

impl Guard {
    pub fn new(route: RouteDescriptor) -> Self {
        Self { route }
    }

    /// Dashboard content pages: full onboarding required.
    pub fn protected(path: impl Into<String>) -> Self {
        Self::new(RouteDescriptor::protected(path))
    }

    /// Sector selection page: authentication required.
    pub fn sector_step(table: &RouteTable) -> Self {
        Self::new(RouteDescriptor::onboarding_step(
            table.canonical_path(Stage::SectorPending),
            Stage::SectorPending,
        ))
    }

    /// Account-type page: sector required.
    pub fn account_type_step(table: &RouteTable) -> Self {
        Self::new(RouteDescriptor::onboarding_step(
            table.canonical_path(Stage::AccountTypePending),
            Stage::AccountTypePending,
        ))
    }

    /// Login page: progressed sessions are sent forward.
    pub fn public_entry(table: &RouteTable) -> Self {
        Self::new(RouteDescriptor::public(
            table.canonical_path(Stage::Anonymous),
            Stage::Anonymous,
        ))
    }

    /// Whatever the table says about `path`, strict fallback included.
    pub fn for_path(table: &RouteTable, path: &str) -> Self {
        Self::new(table.lookup(path))
    }

    pub fn route(&self) -> &RouteDescriptor {
        &self.route
    }

    pub fn evaluate(&self, progress: &OnboardingProgress, table: &RouteTable) -> GuardOutcome {
        match resolve(progress, &self.route, table.anchors()) {
            Decision::Allow => GuardOutcome::Render,
            Decision::RedirectTo(to) => {
                let return_to = match self.route.kind {
                    RouteKind::Protected => Some(self.route.path.clone()),
                    RouteKind::Public | RouteKind::OnboardingStep => None,
                };
                log::debug!("guard: {} -> {}", self.route.path, to);
                GuardOutcome::Redirect { to, return_to }
            }
        }
    }
}
