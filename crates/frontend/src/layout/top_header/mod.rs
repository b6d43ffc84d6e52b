//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the onboarding
//! profile (sector and account type) and logout.

use contracts::system::onboarding::catalog;
use leptos::prelude::*;

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::onboarding::context::use_onboarding;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let ctx = use_onboarding();

    let is_sidebar_visible = move || layout.left_open.get();

    let profile = move || {
        ctx.progress.with(|p| {
            let sector = p.selected_sector().map(catalog::sector_label);
            let account = p.selected_account_type().map(catalog::account_type_label);
            match (sector, account) {
                (Some(s), Some(a)) => format!("{} · {}", s, a),
                (Some(s), None) => s,
                _ => String::new(),
            }
        })
    };

    // The dashboard gate reacts to the cleared progress and sends the user to login.
    let logout = move |_| ctx.logout();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{profile}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
