use crate::dashboards::PAGE_MODULES;
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {PAGE_MODULES.iter().map(|module| {
                    view! {
                        <li>
                            <A href=module.path exact=true>
                                {icons::icon(module.icon)}
                                <span>{module.title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
