use contracts::system::onboarding::routes::normalize_path;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::layout::page_host::PageHost;
use crate::layout::Shell;
use crate::routes::table::{route_target, RouteTarget};
use crate::system::onboarding::context::{use_onboarding, OnboardingContext};
use crate::system::onboarding::guard::Gate;
use crate::system::pages::login::LoginPage;
use crate::system::pages::select_account::SelectAccountPage;
use crate::system::pages::select_sector::SelectSectorPage;

/// Every path goes through a gate; the route table decides which.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RouteOutlet />
        </Router>
    }
}

#[component]
fn RouteOutlet() -> impl IntoView {
    let ctx = use_onboarding();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        log::debug!("navigate: {}", path);
        render_path(ctx, normalize_path(&path))
    }
}

fn render_path(ctx: OnboardingContext, path: &str) -> AnyView {
    match route_target(&ctx.table(), path) {
        RouteTarget::Root { redirect_to } => view! { <Redirect path=redirect_to /> }.into_any(),
        RouteTarget::Login(guard) => view! {
            <Gate guard=guard>
                <LoginPage />
            </Gate>
        }
        .into_any(),
        RouteTarget::SelectSector(guard) => view! {
            <Gate guard=guard>
                <SelectSectorPage />
            </Gate>
        }
        .into_any(),
        RouteTarget::SelectAccount(guard) => view! {
            <Gate guard=guard>
                <SelectAccountPage />
            </Gate>
        }
        .into_any(),
        RouteTarget::Dashboard { guard, page_path } => view! {
            <Gate guard=guard>
                <DashboardPage path=page_path.clone() />
            </Gate>
        }
        .into_any(),
    }
}

#[component]
fn DashboardPage(path: String) -> impl IntoView {
    view! {
        <Shell>
            <PageHost path=path />
        </Shell>
    }
}
