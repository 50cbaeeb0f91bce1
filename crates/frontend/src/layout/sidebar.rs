use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

fn nav_link(href: &'static str, icon_name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="sidebar__link">
            {icon(icon_name)}
            <span class="sidebar__label">{label}</span>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Lankify"</div>
            <nav class="sidebar__nav">
                {nav_link("/", "dashboard", "Dashboard")}
                {nav_link("/contacts/travel-agents", "contacts", "Travel Agents")}
                {nav_link("/inventory/items", "inventory", "Inventory Items")}
                {nav_link("/inventory/item-categories", "category", "Item Categories")}
                {nav_link("/staff", "staff", "Staff")}
                {nav_link("/users", "users", "Users")}
            </nav>
        </aside>
    }
}
