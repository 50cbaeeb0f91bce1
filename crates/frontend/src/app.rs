use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // One toast queue for the whole app.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
