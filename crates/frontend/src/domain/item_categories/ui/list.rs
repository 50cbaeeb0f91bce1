//! Inventory category page.

use contracts::domain::inventory::{ItemCategory, ItemCategoryDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::item_categories::api;
use crate::domain::item_categories::ui::details::ItemCategoryDetails;
use crate::domain::item_categories::ui::form::ItemCategoryForm;
use crate::shared::collection;
use crate::shared::components::action_buttons::{selection_mode, ActionButtons, SelectionMode};
use crate::shared::components::dialog::{ActionColor, ConfirmDialog, DialogAction};
use crate::shared::components::table::{CellValue, Column, DataTable, TableRow};
use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input};
use crate::shared::dates;
use crate::shared::dates::format_date;
use crate::shared::draft::{DraftState, RecordDraft};
use crate::shared::upload;
use crate::shared::validation;

const UPLOAD_FOLDER: &str = "inventory/item-categories";

fn columns() -> Vec<Column> {
    vec![
        Column::new("image", "Image"),
        Column::new("category_id", "Category ID").min_width(120),
        Column::new("category", "Category").min_width(160),
        Column::new("note", "Note").min_width(200),
        Column::new("created", "Created"),
    ]
}

fn to_row(category: &ItemCategory) -> TableRow {
    let image = if category.image_url.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Image {
            url: category.image_url.clone(),
            alt: category.category.clone(),
        }
    };
    TableRow::new(category.id.clone())
        .cell("image", image)
        .text("category_id", category.category_id.clone())
        .text("category", category.category.clone())
        .text("note", category.note.clone())
        .text(
            "created",
            category
                .created_at
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        )
}

#[component]
pub fn ItemCategoriesPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (categories, set_categories) = signal(Vec::<ItemCategory>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (table_epoch, set_table_epoch) = signal(0u32);

    let draft_state = RwSignal::new(DraftState::<RecordDraft<ItemCategoryDraft>>::Idle);
    let pending_file = StoredValue::new_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (viewing, set_viewing) = signal(None::<ItemCategory>);
    let (pending_delete, set_pending_delete) = signal(Vec::<String>::new());
    let (deleting, set_deleting) = signal(false);

    spawn_local(async move {
        match api::fetch_item_categories().await {
            Ok(list) => set_categories.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load item categories")),
        }
        set_loading.set(false);
    });

    let filtered = Memo::new(move |_| {
        let query = search.get();
        categories.with(|list| {
            list.iter()
                .filter(|c| {
                    collection::matches_search(&query, &[&c.category_id, &c.category, &c.note])
                })
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
        let found = categories.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(category) = found {
            clear_image();
            draft_state.set(DraftState::open(RecordDraft::edit(
                category.id.clone(),
                category.to_draft(),
            )));
        }
    };
    let open_view = move |id: String| {
        set_viewing
            .set(categories.with_untracked(|list| collection::find_by_id(list, &id).cloned()));
    };

    let submit = move || {
        let Some(current) = draft_state.with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        let f = &current.fields;
        if !validation::all_present(&[("Category ID", &f.category_id), ("Category", &f.category)]) {
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
                None => match api::create_item_category(&fields).await {
                    Ok(created) => {
                        set_categories.update(|list| list.push(created));
                        draft_state.update(|s| s.commit());
                        clear_image();
                        toasts.success("Item category created successfully");
                    }
                    Err(err) => {
                        toasts.error(err.user_message("Failed to create item category"));
                        draft_state.update(|s| s.fail(err.to_string()));
                    }
                },
                Some(id) => {
                    let existing = categories
                        .with_untracked(|list| collection::find_by_id(list, &id).cloned());
                    let Some(existing) = existing else {
                        draft_state.update(|s| s.cancel());
                        return;
                    };
                    let updated = existing.apply_draft(fields, dates::now_iso());
                    match api::update_item_category(&updated).await {
                        Ok(()) => {
                            set_categories.update(|list| collection::apply_update(list, updated));
                            draft_state.update(|s| s.commit());
                            clear_image();
                            toasts.success("Item category updated successfully");
                        }
                        Err(err) => {
                            toasts.error(err.user_message("Failed to update item category"));
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
            let outcome = api::delete_item_categories(&ids).await;
            let mut removed = false;
            set_categories
                .update(|list| removed = collection::reconcile_delete(list, &ids, &outcome));
            set_deleting.set(false);
            if removed {
                set_pending_delete.set(Vec::new());
                set_selected.set(Vec::new());
                set_table_epoch.update(|epoch| *epoch += 1);
                if ids.len() == 1 {
                    toasts.success("Item category deleted successfully");
                } else {
                    toasts.success(format!("{} item categories deleted successfully", ids.len()));
                }
            } else if let Err(err) = outcome {
                toasts.error(err.user_message("Failed to delete item categories"));
            }
        });
    };

    let render_toolbar = Callback::new(move |_ids: Vec<String>| {
        view! {
            <div class="table__browse">
                <Input
                    value=search
                    placeholder="Search categories..."
                    on_input=Callback::new(move |value| set_search.set(value))
                />
                <Button leading_icon="plus" on_click=Callback::new(move |_| open_create())>
                    "New Category"
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
            "Edit Item Category".to_string()
        } else {
            "New Item Category".to_string()
        }
    });
    let close_draft = Callback::new(move |_| {
        draft_state.update(|s| s.cancel());
        clear_image();
    });
    let draft_fields = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.fields.clone()).unwrap_or_default())
    });
    let on_fields_change = Callback::new(move |fields: ItemCategoryDraft| {
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

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Item Categories"</h1>
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
                <ItemCategoryForm
                    draft=draft_fields
                    on_change=on_fields_change
                    preview=preview_url
                    on_file=on_file
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || viewing.with(|v| v.is_some()))
                title="Item Category Details"
                on_close=Callback::new(move |_| set_viewing.set(None))
                cancel_label="Close"
            >
                <ItemCategoryDetails category=viewing />
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
                            "Are you sure you want to delete this item category?".to_string()
                        } else {
                            format!("Are you sure you want to delete these {} item categories?", count)
                        }
                    }}
                </p>
            </ConfirmDialog>
        </section>
    }
}
