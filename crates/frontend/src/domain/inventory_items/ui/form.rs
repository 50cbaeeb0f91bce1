//! Controlled inventory item form.

use contracts::domain::inventory::{InventoryItemDraft, STATUS_IN_USE};
use leptos::prelude::*;

use crate::domain::inventory_items::ui::list::STATUSES;
use crate::shared::components::ui::{DateInput, ImagePicker, Input, Select, Textarea};

#[component]
pub fn InventoryItemForm(
    #[prop(into)] draft: Signal<InventoryItemDraft>,
    on_change: Callback<InventoryItemDraft>,
    #[prop(into)] categories: Signal<Vec<(String, String)>>,
    #[prop(into)] preview: Signal<Option<String>>,
    on_file: Callback<Option<web_sys::File>>,
) -> impl IntoView {
    macro_rules! field {
        ($name:ident) => {
            Signal::derive(move || draft.with(|d| d.$name.clone()))
        };
    }
    macro_rules! bind {
        ($name:ident) => {
            Callback::new(move |value: String| {
                let mut fields = draft.get_untracked();
                fields.$name = value;
                on_change.run(fields);
            })
        };
    }

    let status_options = Signal::derive(|| {
        STATUSES
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    });
    let in_use = Signal::derive(move || draft.with(|d| d.status == STATUS_IN_USE));

    view! {
        <div class="form__grid">
            <Input label="Name" required=true value=field!(name) on_input=bind!(name) />
            <Select
                label="Category"
                required=true
                value=field!(category)
                on_change=bind!(category)
                options=categories
                placeholder="Select a category"
            />
            <Input label="Brand" required=true value=field!(brand) on_input=bind!(brand) />
            <Input label="Model" value=field!(model) on_input=bind!(model) />
            <Input
                label="Serial Number"
                required=true
                value=field!(serial_number)
                on_input=bind!(serial_number)
            />
            <DateInput
                label="Purchase Date"
                value=field!(purchase_date)
                on_change=bind!(purchase_date)
            />
            <DateInput
                label="Warranty Expiry Date"
                value=field!(warranty_expiry_date)
                on_change=bind!(warranty_expiry_date)
            />
            <Select
                label="Status"
                required=true
                value=field!(status)
                on_change=bind!(status)
                options=status_options
            />
            // Required marker follows the status field.
            {move || {
                let required = in_use.get();
                view! {
                    <Input
                        label="Assigned To"
                        required=required
                        value=field!(assigned_to)
                        on_input=bind!(assigned_to)
                    />
                }
            }}
            <DateInput
                label="Assigned Date"
                value=field!(assigned_date)
                on_change=bind!(assigned_date)
            />
            <Textarea label="Note" value=field!(note) on_input=bind!(note) />
            <ImagePicker
                label="Image"
                preview=preview
                current_url=field!(image_url)
                on_file=on_file
            />
        </div>
    }
}
