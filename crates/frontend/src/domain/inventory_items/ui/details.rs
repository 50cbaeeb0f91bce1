//! Read-only inventory item detail sheet.

use contracts::domain::inventory::InventoryItem;
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
pub fn InventoryItemDetails(#[prop(into)] item: Signal<Option<InventoryItem>>) -> impl IntoView {
    view! {
        {move || item.get().map(|item| view! {
            <div class="details">
                {(!item.image_url.is_empty()).then(|| view! {
                    <img class="details__image" src=item.image_url.clone() alt=item.name.clone()/>
                })}
                {detail("Name", item.name.clone())}
                {detail("Category", item.category.clone())}
                {detail("Brand", item.brand.clone())}
                {detail("Model", item.model.clone())}
                {detail("Serial Number", item.serial_number.clone())}
                {detail("Purchase Date", format_date(&item.purchase_date))}
                {detail("Warranty Expiry", format_date(&item.warranty_expiry_date))}
                {detail(
                    "Assigned To",
                    if item.assigned_to.trim().is_empty() {
                        "Not Assigned".to_string()
                    } else {
                        item.assigned_to.clone()
                    },
                )}
                {detail("Assigned Date", format_date(&item.assigned_date))}
                {detail("Status", item.status.clone())}
                {detail("Note", item.note.clone())}
                {detail(
                    "Created",
                    item.created_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
                {detail(
                    "Updated",
                    item.updated_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
            </div>
        })}
    }
}
