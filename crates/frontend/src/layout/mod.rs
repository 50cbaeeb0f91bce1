pub mod sidebar;

use leptos::prelude::*;

use sidebar::Sidebar;

/// Application frame: fixed sidebar navigation plus the routed page area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
        </div>
    }
}
