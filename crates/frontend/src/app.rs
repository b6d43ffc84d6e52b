use contracts::system::onboarding::{SessionStore, StageAnchors};
use leptos::prelude::*;

use crate::dashboards::PAGE_MODULES;
use crate::layout::global_context::LayoutContext;
use crate::routes::routes::AppRoutes;
use crate::routes::table::build_route_table;
use crate::shared::config::AppConfig;
use crate::shared::page_loader::{provide_page_loader, StaticPageLoader};
use crate::system::onboarding::context::{provide_onboarding, OnboardingContext};
use crate::system::onboarding::storage::LocalStorageBackend;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let table = build_route_table(&config.anchors, PAGE_MODULES).unwrap_or_else(|e| {
        log::error!("Invalid route anchors in config, using defaults: {}", e);
        build_route_table(&StageAnchors::default(), PAGE_MODULES).unwrap_or_default()
    });

    let store = SessionStore::open(LocalStorageBackend::new(config.storage.key.clone()));
    provide_onboarding(OnboardingContext::new(
        store,
        table,
        config.return_path.enabled,
    ));

    provide_page_loader(StaticPageLoader::new(PAGE_MODULES));

    provide_context(LayoutContext::new());

    view! {
        <AppRoutes />
    }
}
