use contracts::system::onboarding::catalog::{self, SECTORS};
use contracts::system::onboarding::{SectorId, Stage};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ONBOARDING;
use crate::system::onboarding::context::use_onboarding;

#[component]
pub fn SelectSectorPage() -> impl IntoView {
    let ctx = use_onboarding();
    let navigate = use_navigate();
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let current = move || {
        ctx.progress
            .with(|p| p.selected_sector().map(catalog::sector_label))
    };

    let choose = move |id: &'static str| {
        match ctx.choose_sector(SectorId::new(id)) {
            Ok(()) => navigate(
                &ctx.canonical_path(Stage::AccountTypePending),
                Default::default(),
            ),
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <PageFrame page_id="onboarding--sector" category=PAGE_CAT_ONBOARDING>
            <div class="page__header">
                <h1>"Choose your sector"</h1>
                {move || current().map(|label| view! {
                    <p class="page__hint">"Current: " <strong>{label}</strong></p>
                })}
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="page__content onboarding-grid">
                {SECTORS
                    .iter()
                    .map(|entry| {
                        let choose = choose.clone();
                        view! {
                            <div class="onboarding-card">
                                <h3>{entry.label}</h3>
                                <p>{entry.description}</p>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| choose(entry.id)
                                >
                                    "Select"
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
