//! User accounts page. Staff and role references are stored as ids and
//! resolved against their lookup collections for display.

use std::collections::HashMap;

use contracts::domain::staff::Staff;
use contracts::domain::users::{User, UserDraft, UserRole};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::staff as staff_domain;
use crate::domain::users::api;
use crate::domain::users::ui::details::UserDetails;
use crate::domain::users::ui::form::UserForm;
use crate::shared::collection;
use crate::shared::components::action_buttons::{selection_mode, ActionButtons, SelectionMode};
use crate::shared::components::dialog::{ActionColor, ConfirmDialog, DialogAction};
use crate::shared::components::table::{BadgeTone, CellValue, Column, DataTable, TableRow};
use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input, MultiSelect};
use crate::shared::dates;
use crate::shared::dates::format_date;
use crate::shared::draft::{DraftState, RecordDraft};
use crate::shared::validation;

fn columns() -> Vec<Column> {
    vec![
        Column::new("username", "Username").min_width(140),
        Column::new("staff", "Staff").min_width(160),
        Column::new("role", "Role").min_width(120),
        Column::new("active", "Status"),
        Column::new("created", "Created"),
    ]
}

fn to_row(
    user: &User,
    staff_names: &HashMap<String, String>,
    role_names: &HashMap<String, String>,
) -> TableRow {
    let staff_name = staff_names.get(&user.staff).cloned().unwrap_or_default();
    let role_name = role_names
        .get(&user.role)
        .cloned()
        .unwrap_or_else(|| user.role.clone());
    let (text, tone) = if user.is_active {
        ("Active", BadgeTone::Success)
    } else {
        ("Inactive", BadgeTone::Danger)
    };
    TableRow::new(user.id.clone())
        .text("username", user.username.clone())
        .text("staff", staff_name)
        .text("role", role_name)
        .cell(
            "active",
            CellValue::Badge {
                text: text.to_string(),
                tone,
            },
        )
        .text(
            "created",
            user.created_at
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        )
}

/// Password is only mandatory while creating; an edit with a blank password
/// keeps the stored one.
fn required_fields(fields: &UserDraft, creating: bool) -> Vec<(&'static str, &str)> {
    let mut required = vec![
        ("Username", fields.username.as_str()),
        ("Role", fields.role.as_str()),
    ];
    if creating {
        required.push(("Password", fields.password.as_str()));
    }
    required
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (users, set_users) = signal(Vec::<User>::new());
    let (staff_members, set_staff_members) = signal(Vec::<Staff>::new());
    let (roles, set_roles) = signal(Vec::<UserRole>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (role_filter, set_role_filter) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (table_epoch, set_table_epoch) = signal(0u32);

    let draft_state = RwSignal::new(DraftState::<RecordDraft<UserDraft>>::Idle);
    let (viewing, set_viewing) = signal(None::<User>);
    let (pending_delete, set_pending_delete) = signal(Vec::<String>::new());
    let (deleting, set_deleting) = signal(false);

    spawn_local(async move {
        match api::fetch_users().await {
            Ok(list) => set_users.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load users")),
        }
        set_loading.set(false);
    });
    spawn_local(async move {
        match staff_domain::api::fetch_staff().await {
            Ok(list) => set_staff_members.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load staff")),
        }
    });
    spawn_local(async move {
        match api::fetch_user_roles().await {
            Ok(list) => set_roles.set(list),
            Err(err) => toasts.error(err.user_message("Failed to load user roles")),
        }
    });

    let staff_names = Memo::new(move |_| {
        staff_members.with(|list| {
            list.iter()
                .map(|s| (s.id.clone(), s.full_name()))
                .collect::<HashMap<_, _>>()
        })
    });
    let role_names = Memo::new(move |_| {
        roles.with(|list| {
            list.iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect::<HashMap<_, _>>()
        })
    });
    let role_filter_options = Memo::new(move |_| {
        let mut names = roles.with(|list| list.iter().map(|r| r.name.clone()).collect::<Vec<_>>());
        names.sort();
        names.dedup();
        names
    });

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let role_selection = role_filter.get();
        let staff_lookup = staff_names.get();
        let role_lookup = role_names.get();
        users.with(|list| {
            list.iter()
                .filter(|u| {
                    let staff_name = staff_lookup.get(&u.staff).cloned().unwrap_or_default();
                    collection::matches_search(&query, &[&u.username, &staff_name])
                })
                .filter(|u| {
                    let role_name = role_lookup
                        .get(&u.role)
                        .cloned()
                        .unwrap_or_else(|| u.role.clone());
                    collection::matches_filter(&role_name, &role_selection)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let rows = Memo::new(move |_| {
        let staff_lookup = staff_names.get();
        let role_lookup = role_names.get();
        filtered.with(|list| {
            list.iter()
                .map(|user| to_row(user, &staff_lookup, &role_lookup))
                .collect::<Vec<_>>()
        })
    });

    let open_create = move || {
        draft_state.set(DraftState::open(RecordDraft::create()));
    };
    let open_edit = move |id: String| {
        let found = users.with_untracked(|list| collection::find_by_id(list, &id).cloned());
        if let Some(user) = found {
            let mut draft = user.to_draft();
            // The stored hash never round-trips through the form.
            draft.password = String::new();
            draft_state.set(DraftState::open(RecordDraft::edit(user.id.clone(), draft)));
        }
    };
    let open_view = move |id: String| {
        set_viewing.set(users.with_untracked(|list| collection::find_by_id(list, &id).cloned()));
    };

    let submit = move || {
        let Some(current) = draft_state.with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        if !validation::all_present(&required_fields(&current.fields, !current.is_edit())) {
            toasts.warning("Please fill all required fields");
            return;
        }
        let mut payload = None;
        draft_state.update(|s| payload = s.begin_submit());
        let Some(payload) = payload else { return };
        spawn_local(async move {
            let fields = payload.fields;
            match payload.target {
                None => match api::create_user(&fields).await {
                    Ok(created) => {
                        set_users.update(|list| list.push(created));
                        draft_state.update(|s| s.commit());
                        toasts.success("User created successfully");
                    }
                    Err(err) => {
                        toasts.error(err.user_message("Failed to create user"));
                        draft_state.update(|s| s.fail(err.to_string()));
                    }
                },
                Some(id) => {
                    let existing =
                        users.with_untracked(|list| collection::find_by_id(list, &id).cloned());
                    let Some(existing) = existing else {
                        draft_state.update(|s| s.cancel());
                        return;
                    };
                    let updated = existing.apply_draft(fields, dates::now_iso());
                    match api::update_user(&updated).await {
                        Ok(()) => {
                            set_users.update(|list| collection::apply_update(list, updated));
                            draft_state.update(|s| s.commit());
                            toasts.success("User updated successfully");
                        }
                        Err(err) => {
                            toasts.error(err.user_message("Failed to update user"));
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
            let outcome = api::delete_users(&ids).await;
            let mut removed = false;
            set_users.update(|list| removed = collection::reconcile_delete(list, &ids, &outcome));
            set_deleting.set(false);
            if removed {
                set_pending_delete.set(Vec::new());
                set_selected.set(Vec::new());
                set_table_epoch.update(|epoch| *epoch += 1);
                if ids.len() == 1 {
                    toasts.success("User deleted successfully");
                } else {
                    toasts.success(format!("{} users deleted successfully", ids.len()));
                }
            } else if let Err(err) = outcome {
                toasts.error(err.user_message("Failed to delete users"));
            }
        });
    };

    let render_toolbar = Callback::new(move |_ids: Vec<String>| {
        view! {
            <div class="table__browse">
                <Input
                    value=search
                    placeholder="Search users..."
                    on_input=Callback::new(move |value| set_search.set(value))
                />
                <MultiSelect
                    label="Filter by Role"
                    value=role_filter
                    options=role_filter_options
                    on_change=Callback::new(move |values| set_role_filter.set(values))
                />
                <Button leading_icon="plus" on_click=Callback::new(move |_| open_create())>
                    "New User"
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
    let editing = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.is_edit()).unwrap_or(false))
    });
    let draft_title = Signal::derive(move || {
        if editing.get() {
            "Edit User".to_string()
        } else {
            "New User".to_string()
        }
    });
    let close_draft = Callback::new(move |_| draft_state.update(|s| s.cancel()));
    let draft_fields = Signal::derive(move || {
        draft_state.with(|s| s.draft().map(|d| d.fields.clone()).unwrap_or_default())
    });
    let on_fields_change = Callback::new(move |fields: UserDraft| {
        draft_state.update(|s| {
            if let Some(current) = s.draft().cloned() {
                s.update(RecordDraft {
                    target: current.target,
                    fields,
                });
            }
        });
    });
    let staff_options = Signal::derive(move || {
        staff_members.with(|list| {
            list.iter()
                .map(|s| (s.id.clone(), s.full_name()))
                .collect::<Vec<_>>()
        })
    });
    let role_options = Signal::derive(move || {
        roles.with(|list| {
            list.iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Users"</h1>
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
                <UserForm
                    draft=draft_fields
                    on_change=on_fields_change
                    staff_options=staff_options
                    role_options=role_options
                    editing=editing
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=Signal::derive(move || viewing.with(|v| v.is_some()))
                title="User Details"
                on_close=Callback::new(move |_| set_viewing.set(None))
                cancel_label="Close"
            >
                <UserDetails user=viewing staff_members=staff_members roles=roles />
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
                            "Are you sure you want to delete this user?".to_string()
                        } else {
                            format!("Are you sure you want to delete these {} users?", count)
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
    fn test_password_required_only_on_create() {
        let draft = UserDraft {
            username: "nimal".to_string(),
            role: "r1".to_string(),
            ..Default::default()
        };
        assert!(!validation::all_present(&required_fields(&draft, true)));
        assert!(validation::all_present(&required_fields(&draft, false)));
    }

    #[test]
    fn test_row_resolves_staff_and_role_names() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","staff":"s1","username":"nimal","role":"r1","isActive":false}"#,
        )
        .unwrap();
        let staff_names = HashMap::from([("s1".to_string(), "Nimal Perera".to_string())]);
        let role_names = HashMap::from([("r1".to_string(), "Admin".to_string())]);
        let row = to_row(&user, &staff_names, &role_names);
        assert_eq!(
            row.get("staff"),
            Some(&CellValue::Text("Nimal Perera".to_string()))
        );
        assert_eq!(row.get("role"), Some(&CellValue::Text("Admin".to_string())));
        assert_eq!(
            row.get("active"),
            Some(&CellValue::Badge {
                text: "Inactive".to_string(),
                tone: BadgeTone::Danger,
            })
        );
    }
}
