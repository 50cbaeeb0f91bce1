//! Inventory items page. Category filter options come from the category
//! collection, so freshly added categories are filterable even before any
//! item uses them.

use contracts::domain::inventory::{InventoryItem, InventoryItemDraft, STATUS_IN_USE};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::inventory_items::api;
use crate::domain::inventory_items::ui::details::InventoryItemDetails;
use crate::domain::inventory_items::ui::form::InventoryItemForm;
use crate::domain::item_categories;
use crate::shared::collection;
use crate::shared::components::action_buttons::{selection_mode, ActionButtons, SelectionMode};
use crate::shared::components::dialog::{ActionColor, ConfirmDialog, DialogAction};
use crate::shared::components::table::{BadgeTone, CellValue, Column, DataTable, TableRow};
use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input, MultiSelect};
use crate::shared::dates;
use crate::shared::draft::{DraftState, RecordDraft};
use crate::shared::upload;
use crate::shared::validation;

const UPLOAD_FOLDER: &str = "inventory/items";

pub const STATUSES: [&str; 4] = ["Available", STATUS_IN_USE, "Under Maintenance", "Retired"];

fn status_tone(status: &str) -> BadgeTone {
    match status {
        "Available" => BadgeTone::Success,
        "Under Maintenance" => BadgeTone::Warning,
        "Retired" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("image", "Image"),
        Column::new("name", "Name").min_width(160),
        Column::new("category", "Category").min_width(120),
        Column::new("brand", "Brand"),
        Column::new("serial", "Serial Number").min_width(140),
        Column::new("assigned", "Assigned To").min_width(130),
        Column::new("status", "Status"),
    ]
}

fn to_row(item: &InventoryItem) -> TableRow {
    let image = if item.image_url.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Image {
            url: item.image_url.clone(),
            alt: item.name.clone(),
        }
    };
    let assigned = if item.assigned_to.trim().is_empty() {
        CellValue::Text("Not Assigned".to_string())
    } else {
        CellValue::Text(item.assigned_to.clone())
    };
    TableRow::new(item.id.clone())
        .cell("image", image)
        .text("name", item.name.clone())
        .text("category", item.category.clone())
        .text("brand", item.brand.clone())
        .text("serial", item.serial_number.clone())
        .cell("assigned", assigned)
        .cell(
            "status",
            CellValue::Badge {
                text: item.status.clone(),
                tone: status_tone(&item.status),
            },
        )
}

/// Required fields of the draft; "Assigned To" joins the list only while the
/// item is in use.
fn required_fields(fields: &InventoryItemDraft) -> Vec<(&'static str, &str)> {
    let mut required = vec![
        ("Name", fields.name.as_str()),
        ("Category", fields.category.as_str()),
        ("Brand", fields.brand.as_str()),
        ("Serial Number", fields.serial_number.as_str()),
        ("Status", fields.status.as_str()),
    ];
    if fields.status == STATUS_IN_USE {
        required.push(("Assigned To", fields.assigned_to.as_str()));
    }
    required
}

#[component]
pub fn InventoryItemsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (category_names, set_category_names) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal(Vec::<String>::new());
    let (status_filter, set_status_filter) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (table_epoch, set_table_epoch) = signal(0u32);

    let draft_state = RwSignal::new(DraftState::<RecordDraft<InventoryItemDraft>>::Idle);
    let pending_file = StoredValue::new_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (viewing, set_viewing) = signal(None::<InventoryItem>);
    let (pending_delete, set_pending_delete) = signal(Vec::<String>::new());
    let (deleting, set_deleting) = signal(false);

    spawn_local(async move {
        match api::fetch_inventory_items().await {
            Ok(list) => set_items.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load inventory items")),
        }
        set_loading.set(false);
    });
    spawn_local(async move {
        match item_categories::api::fetch_item_categories().await {
            Ok(list) => {
                set_category_names.set(list.into_iter().map(|c| c.category).collect());
            }
            Err(err) => toasts.error(err.user_message("Failed to load item categories")),
        }
    });

    let category_options = Memo::new(move |_| {
        let mut names = category_names.get();
        items.with(|list| {
            for item in list {
                let category = item.category.trim().to_string();
                if !category.is_empty() && !names.contains(&category) {
                    names.push(category);
                }
            }
        });
        names.sort();
        names
    });
    let status_options =
        Signal::derive(|| STATUSES.iter().map(|s| s.to_string()).collect::<Vec<_>>());

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let categories = category_filter.get();
        let statuses = status_filter.get();
        items.with(|list| {
            list.iter()
                .filter(|i| {
                    collection::matches_search(
                        &query,
                        &[&i.name, &i.serial_number, &i.brand, &i.model, &i.assigned_to],
                    )
                })
                .filter(|i| collection::matches_filter(&i.category, &categories))
                .filter(|i| collection::matches_filter(&i.status, &statuses))
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let rows = Memo::new(move |_| filtered.with(|list| list.iter().map(to_row).collect::<Vec<_>>()));

    let clear_image = move || {
        if let Some(old) = preview_url.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old);
        }
        set_preview_url.set(None);
        pending_file.set_value(None);
    };

    let open_create = move || {
        clear_image();
        draft_state.set(DraftState::open(RecordDraft::create()));
    };
    let open_edit = move |id: String| {
        let found = items.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(item) = found {
            clear_image();
            draft_state.set(DraftState::open(RecordDraft::edit(
                item.id.clone(),
                item.to_draft(),
            )));
        }
    };
    let open_view = move |id: String| {
        set_viewing.set(items.with_untracked(|list| collection::find_by_id(list, &id).cloned()));
    };

    let submit = move || {
        let Some(current) = draft_state.with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        if !validation::all_present(&required_fields(&current.fields)) {
            toasts.warning("Please fill all required fields");
            return;
        }
        let mut payload = None;
        draft_state.update(|s| payload = s.begin_submit());
        let Some(payload) = payload else { return };
        let file = pending_file.get_value();
        spawn_local(async move {
            let mut fields = payload.fields;
            if let Some(file) = file {
                match upload::upload_image(&file, UPLOAD_FOLDER).await {
                    Ok(url) => fields.image_url = url,
                    Err(err) => {
                        draft_state.update(|s| s.fail(err.to_string()));
                        toasts.warning("Image upload failed. Please try again.");
                        return;
                    }
                }
            }
            match payload.target {
                None => match api::create_inventory_item(&fields).await {
                    Ok(created) => {
                        set_items.update(|list| list.push(created));
                        draft_state.update(|s| s.commit());
                        clear_image();
                        toasts.success("Inventory item created successfully");
                    }
                    Err(err) => {
                        toasts.error(err.user_message("Failed to create inventory item"));
                        draft_state.update(|s| s.fail(err.to_string()));
                    }
                },
                Some(id) => {
                    let existing =
                        items.with_untracked(|list| collection::find_by_id(list, &id).cloned());
                    let Some(existing) = existing else {
                        draft_state.update(|s| s.cancel());
                        return;
                    };
                    let updated = existing.apply_draft(fields, dates::now_iso());
                    match api::update_inventory_item(&updated).await {
                        Ok(()) => {
                            set_items.update(|list| collection::apply_update(list, updated));
                            draft_state.update(|s| s.commit());
                            clear_image();
                            toasts.success("Inventory item updated successfully");
                        }
                        Err(err) => {
                            toasts.error(err.user_message("Failed to update inventory item"));
                            draft_state.update(|s| s.fail(err.to_string()));
                        }
                    }
                }
            }
        });
    };

    let confirm_delete = move || {
        let ids = pending_delete.get_untracked();
        if ids.is_empty() || deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let outcome = api::delete_inventory_items(&ids).await;
            let mut removed = false;
            set_items.update(|list| removed = collection::reconcile_delete(list, &ids, &outcome));
            set_deleting.set(false);
            if removed {
                set_pending_delete.set(Vec::new());
                set_selected.set(Vec::new());
                set_table_epoch.update(|epoch| *epoch += 1);
                if ids.len() == 1 {
                    toasts.success("Inventory item deleted successfully");
                } else {
                    toasts.success(format!("{} inventory items deleted successfully", ids.len()));
                }
            } else if let Err(err) = outcome {
                toasts.error(err.user_message("Failed to delete inventory items"));
            }
        });
    };

    let render_toolbar = Callback::new(move |_ids: Vec<String>| {
        view! {
            <div class="table__browse">
                <Input
                    value=search
                    placeholder="Search items..."
                    on_input=Callback::new(move |value| set_search.set(value))
                />
                <MultiSelect
                    label="Filter by Category"
                    value=category_filter
                    options=category_options
                    on_change=Callback::new(move |values| set_category_filter.set(values))
                />
                <MultiSelect
                    label="Filter by Status"
                    value=status_filter
                    options=status_options
                    on_change=Callback::new(move |values| set_status_filter.set(values))
                />
                <Button leading_icon="plus" on_click=Callback::new(move |_| open_create())>
                    "New Item"
                </Button>
            </div>
        }
        .into_any()
    });

    let render_actions = Callback::new(move |ids: Vec<String>| {
        let count = ids.len();
        let single = ids.first().cloned();
        let delete_ids = ids.clone();
        let actions = match selection_mode(count) {
            SelectionMode::Single => {
                let view_id = single.clone().unwrap_or_default();
                let edit_id = single.unwrap_or_default();
                view! {
                    <ActionButtons
                        on_view=Callback::new(move |_| open_view(view_id.clone()))
                        on_edit=Callback::new(move |_| open_edit(edit_id.clone()))
                        on_delete=Callback::new(move |_| set_pending_delete.set(delete_ids.clone()))
                    />
                }
                .into_any()
            }
            SelectionMode::Bulk => view! {
                <ActionButtons
                    on_delete=Callback::new(move |_| set_pending_delete.set(delete_ids.clone()))
                />
            }
            .into_any(),
            SelectionMode::Browse => ().into_any(),
        };
        view! {
            <div class="table__selection">
                <span class="table__selection-count">{format!("{} selected", count)}</span>
                {actions}
            </div>
        }
        .into_any()
    });

    let draft_open = Signal::derive(move || draft_state.with(|s| s.is_open()));
    let submitting = Signal::derive(move || draft_state.with(|s| s.is_submitting()));
    let draft_title = Signal::derive(move || {
        let editing = draft_state.with(|s| s.draft().map(|d| d.is_edit()).unwrap_or(false));
        if editing {
            "Edit Inventory Item".to_string()
        } else {
            "New Inventory Item".to_string()
        }
    });
    let close_draft = Callback::new(move |_| {
        draft_state.update(|s| s.cancel());
        clear_image();
    });
    let draft_fields = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.fields.clone()).unwrap_or_default())
    });
    let on_fields_change = Callback::new(move |fields: InventoryItemDraft| {
        draft_state.update(|s| {
            if let Some(current) = s.draft().cloned() {
                s.update(RecordDraft {
                    target: current.target,
                    fields,
                });
            }
        });
    });
    let on_file = Callback::new(move |file: Option<web_sys::File>| {
        if let Some(old) = preview_url.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old);
        }
        let preview = file
            .as_ref()
            .and_then(|f| web_sys::Url::create_object_url_with_blob(f).ok());
        set_preview_url.set(preview);
        pending_file.set_value(file);
    });
    let form_categories = Signal::derive(move || {
        category_options
            .get()
            .into_iter()
            .map(|name| (name.clone(), name))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Inventory Items"</h1>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading..."</div> }
            >
                {move || {
                    table_epoch.get();
                    view! {
                        <DataTable
                            columns=columns()
                            rows=rows
                            rows_per_page_options=vec![5, 10, 25]
                            enable_checkbox=true
                            on_select_row=Callback::new(move |ids| set_selected.set(ids))
                            render_toolbar=render_toolbar
                            render_actions=render_actions
                            selected_row_ids=Signal::from(selected)
                        />
                    }
                }}
            </Show>

            <ConfirmDialog
                open=draft_open
                title=draft_title
                on_close=close_draft
                actions=vec![
                    DialogAction::new("Save", Callback::new(move |_| submit()))
                        .color(ActionColor::Success)
                        .disabled(submitting),
                ]
            >
                <InventoryItemForm
                    draft=draft_fields
                    on_change=on_fields_change
                    categories=form_categories
                    preview=preview_url
                    on_file=on_file
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || viewing.with(|v| v.is_some()))
                title="Inventory Item Details"
                on_close=Callback::new(move |_| set_viewing.set(None))
                cancel_label="Close"
            >
                <InventoryItemDetails item=viewing />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(|ids| !ids.is_empty()))
                title="Confirm Delete"
                on_close=Callback::new(move |_| set_pending_delete.set(Vec::new()))
                actions=vec![
                    DialogAction::new("Delete", Callback::new(move |_| confirm_delete()))
                        .color(ActionColor::Danger)
                        .disabled(Signal::from(deleting)),
                ]
            >
                <p class="modal__text">
                    {move || {
                        let count = pending_delete.with(|ids| ids.len());
                        if count == 1 {
                            "Are you sure you want to delete this inventory item?".to_string()
                        } else {
                            format!("Are you sure you want to delete these {} inventory items?", count)
                        }
                    }}
                </p>
            </ConfirmDialog>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(status: &str, assigned_to: &str) -> InventoryItemDraft {
        InventoryItemDraft {
            name: "Projector".to_string(),
            category: "AV".to_string(),
            brand: "Epson".to_string(),
            serial_number: "SN-1".to_string(),
            status: status.to_string(),
            assigned_to: assigned_to.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assigned_to_required_only_while_in_use() {
        assert!(validation::all_present(&required_fields(&draft(
            "Available", ""
        ))));
        assert!(!validation::all_present(&required_fields(&draft(
            STATUS_IN_USE,
            ""
        ))));
        assert!(validation::all_present(&required_fields(&draft(
            STATUS_IN_USE,
            "Nimal",
        ))));
    }

    #[test]
    fn test_unassigned_items_show_placeholder_text() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"_id":"i1","name":"Projector","category":"AV","brand":"Epson",
                "serialNumber":"SN-1","status":"Available"}"#,
        )
        .unwrap();
        let row = to_row(&item);
        assert_eq!(
            row.get("assigned"),
            Some(&CellValue::Text("Not Assigned".to_string()))
        );
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("Available"), BadgeTone::Success);
        assert_eq!(status_tone(STATUS_IN_USE), BadgeTone::Neutral);
        assert_eq!(status_tone("Under Maintenance"), BadgeTone::Warning);
        assert_eq!(status_tone("Retired"), BadgeTone::Danger);
    }
}
