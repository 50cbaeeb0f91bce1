use leptos::prelude::*;

use crate::shared::icons::icon;

/// Button with variants (primary, secondary, danger, ghost) and an optional
/// leading icon.
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "danger" or "ghost".
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)] leading_icon: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {move || leading_icon.get().map(|name| icon(&name))}
            {children()}
        </button>
    }
}
