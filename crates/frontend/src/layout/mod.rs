pub mod global_context;
pub mod left;
pub mod page_host;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Navbar />
                </left::Left>

                <div class="app-main" data-zone="center">
                    {children()}
                </div>
            </div>
        </div>
    }
}
