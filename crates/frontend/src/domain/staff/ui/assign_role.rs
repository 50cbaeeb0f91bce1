//! Account provisioning for an existing staff member: picks a role and
//! credentials, then creates the user record.

use contracts::domain::staff::Staff;
use contracts::domain::users::UserDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};

/// Account draft pre-seeded from the staff record; the email doubles as the
/// initial username.
pub fn account_draft(staff: &Staff) -> UserDraft {
    UserDraft {
        staff: staff.id.clone(),
        username: staff.email.clone(),
        ..Default::default()
    }
}

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
pub fn AssignRoleForm(
    #[prop(into)] staff: Signal<Option<Staff>>,
    #[prop(into)] draft: Signal<UserDraft>,
    on_change: Callback<UserDraft>,
    #[prop(into)] role_options: Signal<Vec<(String, String)>>,
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

    view! {
        {move || staff.get().map(|staff| view! {
            <div class="details">
                {(!staff.profile_image_url.is_empty()).then(|| view! {
                    <img
                        class="details__image"
                        src=staff.profile_image_url.clone()
                        alt=staff.full_name()
                    />
                })}
                {detail("Staff ID", staff.staff_id.clone())}
                {detail("Name", staff.full_name())}
            </div>
        })}
        <div class="form__grid">
            <Select
                label="Role"
                required=true
                value=field!(role)
                on_change=bind!(role)
                options=role_options
                placeholder="Select a role"
            />
            <Input
                label="Username"
                required=true
                value=field!(username)
                on_input=bind!(username)
            />
            <Input
                label="Password"
                required=true
                input_type="password"
                value=field!(password)
                on_input=bind!(password)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_draft_is_seeded_from_the_staff_record() {
        let staff: Staff = serde_json::from_str(
            r#"{"_id":"s1","staffId":"ST-001","firstName":"Nimal","lastName":"Perera",
                "email":"nimal@lankify.lk","phone":"0711234567","designation":"Chef",
                "status":"Active"}"#,
        )
        .unwrap();
        let draft = account_draft(&staff);
        assert_eq!(draft.staff, "s1");
        assert_eq!(draft.username, "nimal@lankify.lk");
        assert!(draft.is_active);
        assert!(draft.role.is_empty());
        assert!(draft.password.is_empty());
    }
}
