use contracts::system::onboarding::catalog::{self, ACCOUNT_TYPES};
use contracts::system::onboarding::AccountTypeId;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ONBOARDING;
use crate::system::onboarding::context::use_onboarding;

#[component]
pub fn SelectAccountPage() -> impl IntoView {
    let ctx = use_onboarding();
    let navigate = use_navigate();
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let sector = move || {
        ctx.progress
            .with(|p| p.selected_sector().map(catalog::sector_label))
            .unwrap_or_default()
    };

    let choose = move |id: &'static str| {
        match ctx.choose_account_type(AccountTypeId::new(id)) {
            Ok(()) => navigate(&ctx.take_return_path(), Default::default()),
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <PageFrame page_id="onboarding--account-type" category=PAGE_CAT_ONBOARDING>
            <div class="page__header">
                <h1>"Choose your account type"</h1>
                <p class="page__hint">"Sector: " <strong>{sector}</strong></p>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="page__content onboarding-grid">
                {ACCOUNT_TYPES
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
