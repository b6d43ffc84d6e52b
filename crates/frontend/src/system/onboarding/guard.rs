use contracts::system::onboarding::{Guard, GuardOutcome};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use super::context::use_onboarding;

/// Renders `children` or redirects, never both.
///
/// The decision is memoised on the onboarding progress, so a store mutation
/// switches the branch before the next frame. The return path is taken only
/// on mount.
#[component]
pub fn Gate(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let ctx = use_onboarding();
    ctx.enter(&guard);
    let outcome = Memo::new(move |_| ctx.evaluate(&guard));

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect { to, .. } => view! {
            <Redirect
                path=to
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
            />
        }
        .into_any(),
    }
}
