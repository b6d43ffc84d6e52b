//! Stage resolver: (progress, route) → Allow | RedirectTo.

use super::model::OnboardingProgress;
use super::routes::{RouteDescriptor, RouteKind, StageAnchors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

/// Pure: identical inputs always give the identical decision.
///
/// The canonical path of the user's own stage is the page where that stage is
/// completed, i.e. the first unmet requirement. Redirects always go there and
/// never further ahead.
pub fn resolve(
    progress: &OnboardingProgress,
    route: &RouteDescriptor,
    anchors: &StageAnchors,
) -> Decision {
    let user_stage = progress.stage();

    match route.kind {
        RouteKind::Public => {
            if user_stage > route.required_stage {
                Decision::RedirectTo(anchors.canonical_path(user_stage).to_string())
            } else {
                Decision::Allow
            }
        }
        RouteKind::Protected | RouteKind::OnboardingStep => {
            if user_stage >= route.required_stage {
                Decision::Allow
            } else {
                Decision::RedirectTo(anchors.canonical_path(user_stage).to_string())
            }
        }
    }
}
