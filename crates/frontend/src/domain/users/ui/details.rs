use contracts::domain::staff::Staff;
use contracts::domain::users::{User, UserRole};
use leptos::prelude::*;

use crate::shared::collection;
use crate::shared::dates::format_date;

/// The stored credential is a hash and never reaches the client; the sheet
/// shows a fixed mask instead.
const PASSWORD_MASK: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

fn role_name(roles: &[UserRole], id: &str) -> String {
    roles
        .iter()
        .find(|role| role.id == id)
        .map(|role| role.name.clone())
        .unwrap_or_else(|| id.to_string())
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
pub fn UserDetails(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] staff_members: Signal<Vec<Staff>>,
    #[prop(into)] roles: Signal<Vec<UserRole>>,
) -> impl IntoView {
    view! {
        {move || user.get().map(|user| {
            let staff = staff_members
                .with(|list| collection::find_by_id(list, &user.staff).cloned());
            let role = roles.with(|list| role_name(list, &user.role));
            view! {
                <div class="details">
                    {staff
                        .as_ref()
                        .filter(|s| !s.profile_image_url.is_empty())
                        .map(|s| view! {
                            <img
                                class="details__image"
                                src=s.profile_image_url.clone()
                                alt=s.full_name()
                            />
                        })}
                    {detail(
                        "Staff ID",
                        staff.as_ref().map(|s| s.staff_id.clone()).unwrap_or_default(),
                    )}
                    {detail(
                        "Name",
                        staff.as_ref().map(|s| s.full_name()).unwrap_or_default(),
                    )}
                    {detail("Username", user.username.clone())}
                    {detail("Password", PASSWORD_MASK.to_string())}
                    {detail("Role", role)}
                    {detail(
                        "Status",
                        if user.is_active { "Active" } else { "Inactive" }.to_string(),
                    )}
                    {detail(
                        "Created",
                        user.created_at
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_else(|| "N/A".to_string()),
                    )}
                    {detail(
                        "Updated",
                        user.updated_at
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_else(|| "N/A".to_string()),
                    )}
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_resolves_against_the_lookup() {
        let roles = vec![
            UserRole {
                id: "r1".to_string(),
                name: "Admin".to_string(),
            },
            UserRole {
                id: "r2".to_string(),
                name: "Manager".to_string(),
            },
        ];
        assert_eq!(role_name(&roles, "r2"), "Manager");
    }

    #[test]
    fn test_unknown_role_falls_back_to_the_raw_id() {
        assert_eq!(role_name(&[], "r9"), "r9");
    }
}
