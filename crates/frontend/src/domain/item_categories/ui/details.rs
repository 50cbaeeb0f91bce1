use contracts::domain::inventory::ItemCategory;
use leptos::prelude::*;

use crate::shared::dates::format_date;

fn detail(label: &'static str, value: String) -> impl IntoView {
    let display = if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value
    };
    view! {
        <div class="details__row">
            <span class="details__label">{label}</span>
            <span class="details__value">{display}</span>
        </div>
    }
}

#[component]
pub fn ItemCategoryDetails(#[prop(into)] category: Signal<Option<ItemCategory>>) -> impl IntoView {
    view! {
        {move || category.get().map(|category| view! {
            <div class="details">
                {(!category.image_url.is_empty()).then(|| view! {
                    <img
                        class="details__image"
                        src=category.image_url.clone()
                        alt=category.category.clone()
                    />
                })}
                {detail("Category ID", category.category_id.clone())}
                {detail("Category", category.category.clone())}
                {detail("Note", category.note.clone())}
                {detail(
                    "Created",
                    category
                        .created_at
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "N/A".to_string()),
                )}
                {detail(
                    "Updated",
                    category
                        .updated_at
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "N/A".to_string()),
                )}
            </div>
        })}
    }
}
