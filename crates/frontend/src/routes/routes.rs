//! Route table of the admin application.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::inventory_items::ui::InventoryItemsPage;
use crate::domain::item_categories::ui::ItemCategoriesPage;
use crate::domain::staff::ui::StaffPage;
use crate::domain::travel_agents::ui::TravelAgentsPage;
use crate::domain::users::ui::UsersPage;
use crate::layout::Shell;
use crate::shared::icons::icon;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/contacts/travel-agents") view=TravelAgentsPage />
                    <Route path=path!("/inventory/items") view=InventoryItemsPage />
                    <Route path=path!("/inventory/item-categories") view=ItemCategoriesPage />
                    <Route path=path!("/staff") view=StaffPage />
                    <Route path=path!("/users") view=UsersPage />
                </Routes>
            </Shell>
        </Router>
    }
}

fn dashboard_card(
    href: &'static str,
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="dashboard__card">
            {icon(icon_name)}
            <h2 class="dashboard__card-title">{title}</h2>
            <p class="dashboard__card-text">{description}</p>
        </A>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </header>
            <div class="dashboard">
                {dashboard_card(
                    "/contacts/travel-agents",
                    "contacts",
                    "Travel Agents",
                    "Partner agencies and their contact details",
                )}
                {dashboard_card(
                    "/inventory/items",
                    "inventory",
                    "Inventory Items",
                    "Equipment, assignments and warranty tracking",
                )}
                {dashboard_card(
                    "/inventory/item-categories",
                    "category",
                    "Item Categories",
                    "Grouping for the inventory catalogue",
                )}
                {dashboard_card(
                    "/staff",
                    "staff",
                    "Staff",
                    "Employee records and departments",
                )}
                {dashboard_card(
                    "/users",
                    "users",
                    "Users",
                    "Sign-in accounts and role assignments",
                )}
            </div>
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </header>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" attr:class="table__link">"Back to the dashboard"</A>
        </section>
    }
}
