use contracts::system::onboarding::catalog;
use leptos::prelude::*;
use leptos_router::components::A;

use super::registry::PAGE_MODULES;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::onboarding::context::use_onboarding;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_onboarding();

    let profile = move || {
        ctx.progress.with(|p| {
            let sector = p.selected_sector().map(catalog::sector_label).unwrap_or_default();
            let account = p
                .selected_account_type()
                .map(catalog::account_type_label)
                .unwrap_or_default();
            format!("{} · {}", sector, account)
        })
    };

    view! {
        <PageFrame page_id="overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1>"Overview"</h1>
                <p class="page__hint">{profile}</p>
            </div>
            <div class="page__content dashboard-grid">
                {PAGE_MODULES
                    .iter()
                    .filter(|m| m.path != super::OVERVIEW.path)
                    .map(|m| {
                        view! {
                            <A href=m.path>
                                <div class="dashboard-card">
                                    <h3 class="dashboard-card-title">{m.title}</h3>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
