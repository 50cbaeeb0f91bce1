use contracts::domain::staff::Staff;
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
pub fn StaffDetails(#[prop(into)] staff: Signal<Option<Staff>>) -> impl IntoView {
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
                {detail("Email", staff.email.clone())}
                {detail("Phone", staff.phone.clone())}
                {detail("Designation", staff.designation.clone())}
                {detail("Department", staff.department.clone())}
                {detail("Joined Date", format_date(&staff.joined_date))}
                {detail("Resigned Date", format_date(&staff.resigned_date))}
                {detail("Status", staff.status.clone())}
                {detail("Note", staff.note.clone())}
                {detail(
                    "Created",
                    staff.created_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
                {detail(
                    "Updated",
                    staff.updated_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
            </div>
        })}
    }
}
