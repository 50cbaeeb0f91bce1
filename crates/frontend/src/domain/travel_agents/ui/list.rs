//! Travel agents page: table, filters and the full record workflow.

use contracts::domain::contacts::{TravelAgent, TravelAgentDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::travel_agents::api;
use crate::domain::travel_agents::ui::details::TravelAgentDetails;
use crate::domain::travel_agents::ui::form::TravelAgentForm;
use crate::shared::collection;
use crate::shared::components::action_buttons::{selection_mode, ActionButtons, SelectionMode};
use crate::shared::components::dialog::{ActionColor, ConfirmDialog, DialogAction};
use crate::shared::components::table::{CellValue, Column, DataTable, TableRow};
use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input, MultiSelect};
use crate::shared::dates;
use crate::shared::draft::{DraftState, RecordDraft};
use crate::shared::upload;
use crate::shared::validation;

const UPLOAD_FOLDER: &str = "contacts/travel-agents";

fn columns() -> Vec<Column> {
    vec![
        Column::new("logo", "Logo"),
        Column::new("name", "Name").min_width(180),
        Column::new("owner", "Owner").min_width(140),
        Column::new("email", "Email").min_width(180),
        Column::new("phone", "Phone").min_width(130),
        Column::new("country", "Country"),
        Column::new("city", "City"),
        Column::new("website", "Website").min_width(140),
    ]
}

fn contact_link(prefix: &str, value: &str) -> CellValue {
    if value.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Link {
            href: format!("{}{}", prefix, value),
            text: value.to_string(),
            external: false,
        }
    }
}

fn to_row(agent: &TravelAgent) -> TableRow {
    let logo = if agent.logo_url.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Image {
            url: agent.logo_url.clone(),
            alt: agent.name.clone(),
        }
    };
    let website = if agent.website.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Link {
            href: agent.website.clone(),
            text: agent.website.clone(),
            external: true,
        }
    };
    TableRow::new(agent.id.clone())
        .cell("logo", logo)
        .text("name", agent.name.clone())
        .text("owner", agent.owner_name.clone())
        .cell("email", contact_link("mailto:", &agent.email))
        .cell("phone", contact_link("tel:", &agent.phone))
        .text("country", agent.country.clone())
        .text("city", agent.city.clone())
        .cell("website", website)
}

#[component]
pub fn TravelAgentsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (agents, set_agents) = signal(Vec::<TravelAgent>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (country_filter, set_country_filter) = signal(Vec::<String>::new());
    let (city_filter, set_city_filter) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    // Bumped after a delete to remount the table with a clean page state.
    let (table_epoch, set_table_epoch) = signal(0u32);

    let draft_state = RwSignal::new(DraftState::<RecordDraft<TravelAgentDraft>>::Idle);
    let pending_file = StoredValue::new_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (viewing, set_viewing) = signal(None::<TravelAgent>);
    let (pending_delete, set_pending_delete) = signal(Vec::<String>::new());
    let (deleting, set_deleting) = signal(false);

    spawn_local(async move {
        match api::fetch_travel_agents().await {
            Ok(list) => set_agents.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load travel agents")),
        }
        set_loading.set(false);
    });

    let country_options =
        Memo::new(move |_| agents.with(|list| collection::distinct_options(list, |a| &a.country)));
    let city_options =
        Memo::new(move |_| agents.with(|list| collection::distinct_options(list, |a| &a.city)));

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let countries = country_filter.get();
        let cities = city_filter.get();
        agents.with(|list| {
            list.iter()
                .filter(|a| {
                    collection::matches_search(
                        &query,
                        &[&a.name, &a.owner_name, &a.email, &a.phone, &a.website],
                    )
                })
                .filter(|a| collection::matches_filter(&a.country, &countries))
                .filter(|a| collection::matches_filter(&a.city, &cities))
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
        let found = agents.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(agent) = found {
            clear_image();
            draft_state.set(DraftState::open(RecordDraft::edit(
                agent.id.clone(),
                agent.to_draft(),
            )));
        }
    };
    let open_view = move |id: String| {
        set_viewing.set(agents.with_untracked(|list| collection::find_by_id(list, &id).cloned()));
    };

    let submit = move || {
        let Some(current) = draft_state.with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        let f = &current.fields;
        if !validation::all_present(&[("Name", &f.name), ("Email", &f.email), ("Phone", &f.phone)])
        {
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
                    Ok(url) => fields.logo_url = url,
                    Err(err) => {
                        draft_state.update(|s| s.fail(err.to_string()));
                        toasts.warning("Image upload failed. Please try again.");
                        return;
                    }
                }
            }
            match payload.target {
                None => match api::create_travel_agent(&fields).await {
                    Ok(created) => {
                        set_agents.update(|list| list.push(created));
                        draft_state.update(|s| s.commit());
                        clear_image();
                        toasts.success("Travel agent created successfully");
                    }
                    Err(err) => {
                        toasts.error(err.user_message("Failed to create travel agent"));
                        draft_state.update(|s| s.fail(err.to_string()));
                    }
                },
                Some(id) => {
                    let existing =
                        agents.with_untracked(|list| collection::find_by_id(list, &id).cloned());
                    let Some(existing) = existing else {
                        draft_state.update(|s| s.cancel());
                        return;
                    };
                    let updated = existing.apply_draft(fields, dates::now_iso());
                    match api::update_travel_agent(&updated).await {
                        Ok(()) => {
                            set_agents.update(|list| collection::apply_update(list, updated));
                            draft_state.update(|s| s.commit());
                            clear_image();
                            toasts.success("Travel agent updated successfully");
                        }
                        Err(err) => {
                            toasts.error(err.user_message("Failed to update travel agent"));
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
            let outcome = api::delete_travel_agents(&ids).await;
            let mut removed = false;
            set_agents.update(|list| removed = collection::reconcile_delete(list, &ids, &outcome));
            set_deleting.set(false);
            if removed {
                set_pending_delete.set(Vec::new());
                set_selected.set(Vec::new());
                set_table_epoch.update(|epoch| *epoch += 1);
                if ids.len() == 1 {
                    toasts.success("Travel agent deleted successfully");
                } else {
                    toasts.success(format!("{} travel agents deleted successfully", ids.len()));
                }
            } else if let Err(err) = outcome {
                toasts.error(err.user_message("Failed to delete travel agents"));
            }
        });
    };

    let render_toolbar = Callback::new(move |_ids: Vec<String>| {
        view! {
            <div class="table__browse">
                <Input
                    value=search
                    placeholder="Search agents..."
                    on_input=Callback::new(move |value| set_search.set(value))
                />
                <MultiSelect
                    label="Filter by Country"
                    value=country_filter
                    options=country_options
                    on_change=Callback::new(move |values| set_country_filter.set(values))
                />
                <MultiSelect
                    label="Filter by City"
                    value=city_filter
                    options=city_options
                    on_change=Callback::new(move |values| set_city_filter.set(values))
                />
                <Button leading_icon="plus" on_click=Callback::new(move |_| open_create())>
                    "New Agent"
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
            "Edit Travel Agent".to_string()
        } else {
            "New Travel Agent".to_string()
        }
    });
    let close_draft = Callback::new(move |_| {
        draft_state.update(|s| s.cancel());
        clear_image();
    });
    let draft_fields = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.fields.clone()).unwrap_or_default())
    });
    let on_fields_change = Callback::new(move |fields: TravelAgentDraft| {
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
                <h1 class="page__title">"Travel Agents"</h1>
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
                <TravelAgentForm
                    draft=draft_fields
                    on_change=on_fields_change
                    preview=preview_url
                    on_file=on_file
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || viewing.with(|v| v.is_some()))
                title="Travel Agent Details"
                on_close=Callback::new(move |_| set_viewing.set(None))
                cancel_label="Close"
            >
                <TravelAgentDetails agent=viewing />
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
                            "Are you sure you want to delete this travel agent?".to_string()
                        } else {
                            format!("Are you sure you want to delete these {} travel agents?", count)
                        }
                    }}
                </p>
            </ConfirmDialog>
        </section>
    }
}
