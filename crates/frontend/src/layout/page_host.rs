use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_loader::{use_page_loader, LoadError, LoadHandle};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Loads and mounts the page module for `path`.
///
/// Only mounted after the gate has allowed the route. Unmounting (navigation
/// away) cancels a load that is still pending.
#[component]
pub fn PageHost(path: String) -> impl IntoView {
    let loader = use_page_loader();
    let current = StoredValue::new(None::<LoadHandle>);

    let page = LocalResource::new(move || {
        let pending = loader.load(&path);
        current.set_value(Some(pending.handle));
        pending.future
    });

    on_cleanup(move || {
        if let Some(handle) = current.try_get_value().flatten() {
            handle.cancel();
        }
    });

    view! {
        <Suspense fallback=|| view! { <PageLoading /> }>
            {move || page.get().map(|result| match result {
                Ok(module) => (module.render)(),
                Err(LoadError::UnknownPage(path)) => view! { <NotFound path=path /> }.into_any(),
                Err(LoadError::Cancelled(_)) => ().into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn PageLoading() -> impl IntoView {
    view! {
        <PageFrame page_id="loading--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content page__loading">"Loading…"</div>
        </PageFrame>
    }
}

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <PageFrame page_id="not-found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1>"Page not found"</h1>
            </div>
            <div class="page__content">
                <p>"Nothing is registered at " <code>{path}</code></p>
            </div>
        </PageFrame>
    }
}
