//! Staff page.

use contracts::domain::staff::{Staff, StaffDraft};
use contracts::domain::users::{UserDraft, UserRole};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::staff::api;
use crate::domain::staff::ui::assign_role::{account_draft, AssignRoleForm};
use crate::domain::staff::ui::details::StaffDetails;
use crate::domain::staff::ui::form::StaffForm;
use crate::domain::users as users_domain;
use crate::shared::collection;
use crate::shared::components::action_buttons::{selection_mode, ActionButtons, SelectionMode};
use crate::shared::components::dialog::{ActionColor, ConfirmDialog, DialogAction};
use crate::shared::components::table::{BadgeTone, CellValue, Column, DataTable, TableRow};
use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input, MultiSelect};
use crate::shared::dates;
use crate::shared::dates::format_date;
use crate::shared::draft::{DraftState, RecordDraft};
use crate::shared::upload;
use crate::shared::validation;

const UPLOAD_FOLDER: &str = "staff/profiles";

pub const STATUSES: [&str; 3] = ["Active", "On Leave", "Resigned"];

fn status_tone(status: &str) -> BadgeTone {
    match status {
        "Active" => BadgeTone::Success,
        "On Leave" => BadgeTone::Warning,
        "Resigned" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("profile", "Profile"),
        Column::new("staff_id", "Staff ID").min_width(100),
        Column::new("name", "Name").min_width(160),
        Column::new("email", "Email").min_width(180),
        Column::new("phone", "Phone").min_width(130),
        Column::new("designation", "Designation").min_width(130),
        Column::new("department", "Department"),
        Column::new("joined", "Joined"),
        Column::new("status", "Status"),
    ]
}

fn to_row(staff: &Staff) -> TableRow {
    let profile = if staff.profile_image_url.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Image {
            url: staff.profile_image_url.clone(),
            alt: staff.full_name(),
        }
    };
    TableRow::new(staff.id.clone())
        .cell("profile", profile)
        .text("staff_id", staff.staff_id.clone())
        .text("name", staff.full_name())
        .cell(
            "email",
            CellValue::Link {
                href: format!("mailto:{}", staff.email),
                text: staff.email.clone(),
                external: false,
            },
        )
        .text("phone", staff.phone.clone())
        .text("designation", staff.designation.clone())
        .text("department", staff.department.clone())
        .text("joined", format_date(&staff.joined_date))
        .cell(
            "status",
            CellValue::Badge {
                text: staff.status.clone(),
                tone: status_tone(&staff.status),
            },
        )
}

fn required_fields(fields: &StaffDraft) -> Vec<(&'static str, &str)> {
    vec![
        ("Staff ID", fields.staff_id.as_str()),
        ("First Name", fields.first_name.as_str()),
        ("Last Name", fields.last_name.as_str()),
        ("Email", fields.email.as_str()),
        ("Phone", fields.phone.as_str()),
        ("Designation", fields.designation.as_str()),
        ("Joined Date", fields.joined_date.as_str()),
        ("Status", fields.status.as_str()),
    ]
}

#[component]
pub fn StaffPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (members, set_members) = signal(Vec::<Staff>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (department_filter, set_department_filter) = signal(Vec::<String>::new());
    let (status_filter, set_status_filter) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (table_epoch, set_table_epoch) = signal(0u32);

    let draft_state = RwSignal::new(DraftState::<RecordDraft<StaffDraft>>::Idle);
    let pending_file = StoredValue::new_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (viewing, set_viewing) = signal(None::<Staff>);
    let (pending_delete, set_pending_delete) = signal(Vec::<String>::new());
    let (deleting, set_deleting) = signal(false);

    // Account provisioning for the selected member.
    let assign_state = RwSignal::new(DraftState::<UserDraft>::Idle);
    let (assign_staff, set_assign_staff) = signal(None::<Staff>);
    let (roles, set_roles) = signal(Vec::<UserRole>::new());

    spawn_local(async move {
        match api::fetch_staff().await {
            Ok(list) => set_members.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load staff")),
        }
        set_loading.set(false);
    });
    spawn_local(async move {
        match users_domain::api::fetch_user_roles().await {
            Ok(list) => set_roles.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load user roles")),
        }
    });

    let department_options = Memo::new(move |_| {
        members.with(|list| collection::distinct_options(list, |s| &s.department))
    });
    let status_options =
        Signal::derive(|| STATUSES.iter().map(|s| s.to_string()).collect::<Vec<_>>());

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let departments = department_filter.get();
        let statuses = status_filter.get();
        members.with(|list| {
            list.iter()
                .filter(|s| {
                    collection::matches_search(
                        &query,
                        &[
                            &s.staff_id,
                            &s.first_name,
                            &s.last_name,
                            &s.email,
                            &s.phone,
                            &s.designation,
                        ],
                    )
                })
                .filter(|s| collection::matches_filter(&s.department, &departments))
                .filter(|s| collection::matches_filter(&s.status, &statuses))
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
        let found = members.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(staff) = found {
            clear_image();
            draft_state.set(DraftState::open(RecordDraft::edit(
                staff.id.clone(),
                staff.to_draft(),
            )));
        }
    };
    let open_view = move |id: String| {
        set_viewing.set(members.with_untracked(|list| collection::find_by_id(list, &id).cloned()));
    };
    let open_assign = move |id: String| {
        let found = members.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(staff) = found {
            assign_state.set(DraftState::open(account_draft(&staff)));
            set_assign_staff.set(Some(staff));
        }
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
                    Ok(url) => fields.profile_image_url = url,
                    Err(err) => {
                        draft_state.update(|s| s.fail(err.to_string()));
                        toasts.warning("Image upload failed. Please try again.");
                        return;
                    }
                }
            }
            match payload.target {
                None => match api::create_staff(&fields).await {
                    Ok(created) => {
                        set_members.update(|list| list.push(created));
                        draft_state.update(|s| s.commit());
                        clear_image();
                        toasts.success("Staff member created successfully");
                    }
                    Err(err) => {
                        toasts.error(err.user_message("Failed to create staff member"));
                        draft_state.update(|s| s.fail(err.to_string()));
                    }
                },
                Some(id) => {
                    let existing =
                        members.with_untracked(|list| collection::find_by_id(list, &id).cloned());
                    let Some(existing) = existing else {
                        draft_state.update(|s| s.cancel());
                        return;
                    };
                    let updated = existing.apply_draft(fields, dates::now_iso());
                    match api::update_staff(&updated).await {
                        Ok(()) => {
                            set_members.update(|list| collection::apply_update(list, updated));
                            draft_state.update(|s| s.commit());
                            clear_image();
                            toasts.success("Staff member updated successfully");
                        }
                        Err(err) => {
                            toasts.error(err.user_message("Failed to update staff member"));
                            draft_state.update(|s| s.fail(err.to_string()));
                        }
                    }
                }
            }
        });
    };

    let submit_assign = move || {
        let Some(current) = assign_state.with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        let required = [
            ("Role", current.role.as_str()),
            ("Username", current.username.as_str()),
            ("Password", current.password.as_str()),
        ];
        if !validation::all_present(&required) {
            toasts.warning("Please fill all required fields");
            return;
        }
        let mut payload = None;
        assign_state.update(|s| payload = s.begin_submit());
        let Some(payload) = payload else { return };
        spawn_local(async move {
            match users_domain::api::create_user(&payload).await {
                Ok(_) => {
                    assign_state.update(|s| s.commit());
                    set_assign_staff.set(None);
                    toasts.success("New user created successfully");
                }
                Err(err) => {
                    toasts.error(err.user_message("Failed to create user"));
                    assign_state.update(|s| s.fail(err.to_string()));
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
            let outcome = api::delete_staff(&ids).await;
            let mut removed = false;
            set_members.update(|list| removed = collection::reconcile_delete(list, &ids, &outcome));
            set_deleting.set(false);
            if removed {
                set_pending_delete.set(Vec::new());
                set_selected.set(Vec::new());
                set_table_epoch.update(|epoch| *epoch += 1);
                if ids.len() == 1 {
                    toasts.success("Staff member deleted successfully");
                } else {
                    toasts.success(format!("{} staff members deleted successfully", ids.len()));
                }
            } else if let Err(err) = outcome {
                toasts.error(err.user_message("Failed to delete staff members"));
            }
        });
    };

    let render_toolbar = Callback::new(move |_ids: Vec<String>| {
        view! {
            <div class="table__browse">
                <Input
                    value=search
                    placeholder="Search staff..."
                    on_input=Callback::new(move |value| set_search.set(value))
                />
                <MultiSelect
                    label="Filter by Department"
                    value=department_filter
                    options=department_options
                    on_change=Callback::new(move |values| set_department_filter.set(values))
                />
                <MultiSelect
                    label="Filter by Status"
                    value=status_filter
                    options=status_options
                    on_change=Callback::new(move |values| set_status_filter.set(values))
                />
                <Button leading_icon="plus" on_click=Callback::new(move |_| open_create())>
                    "New Staff Member"
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
                let assign_id = single.clone().unwrap_or_default();
                let view_id = single.clone().unwrap_or_default();
                let edit_id = single.unwrap_or_default();
                view! {
                    <Button
                        variant="secondary"
                        leading_icon="users"
                        on_click=Callback::new(move |_| open_assign(assign_id.clone()))
                    >
                        "Assign Role"
                    </Button>
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
            "Edit Staff Member".to_string()
        } else {
            "New Staff Member".to_string()
        }
    });
    let close_draft = Callback::new(move |_| {
        draft_state.update(|s| s.cancel());
        clear_image();
    });
    let draft_fields = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.fields.clone()).unwrap_or_default())
    });
    let on_fields_change = Callback::new(move |fields: StaffDraft| {
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
                <h1 class="page__title">"Staff"</h1>
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
                <StaffForm
                    draft=draft_fields
                    on_change=on_fields_change
                    preview=preview_url
                    on_file=on_file
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || assign_state.with(|s| s.is_open()))
                title="Assign User Role"
                on_close=Callback::new(move |_| {
                    assign_state.update(|s| s.cancel());
                    set_assign_staff.set(None);
                })
                actions=vec![
                    DialogAction::new("Save", Callback::new(move |_| submit_assign()))
                        .color(ActionColor::Success)
                        .disabled(Signal::derive(move || {
                            assign_state.with(|s| s.is_submitting())
                        })),
                ]
            >
                <AssignRoleForm
                    staff=assign_staff
                    draft=Signal::derive(move || {
                        assign_state.with(|s| s.draft().cloned().unwrap_or_default())
                    })
                    on_change=Callback::new(move |fields: UserDraft| {
                        assign_state.update(|s| s.update(fields));
                    })
                    role_options=Signal::derive(move || {
                        roles.with(|list| {
                            list.iter()
                                .map(|r| (r.id.clone(), r.name.clone()))
                                .collect::<Vec<_>>()
                        })
                    })
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || viewing.with(|v| v.is_some()))
                title="Staff Details"
                on_close=Callback::new(move |_| set_viewing.set(None))
                cancel_label="Close"
            >
                <StaffDetails staff=viewing />
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
                            "Are you sure you want to delete this staff member?".to_string()
                        } else {
                            format!("Are you sure you want to delete these {} staff members?", count)
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

    #[test]
    fn test_required_fields_cover_the_mandatory_set() {
        let draft = StaffDraft {
            staff_id: "ST-001".to_string(),
            first_name: "Nimal".to_string(),
            last_name: "Perera".to_string(),
            email: "n@x.lk".to_string(),
            phone: "071".to_string(),
            designation: "Chef".to_string(),
            joined_date: "2024-01-15".to_string(),
            ..Default::default()
        };
        assert!(validation::all_present(&required_fields(&draft)));

        let incomplete = StaffDraft {
            joined_date: String::new(),
            ..draft
        };
        assert_eq!(
            validation::missing_required(&required_fields(&incomplete)),
            vec!["Joined Date"]
        );
    }
}
