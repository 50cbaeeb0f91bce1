//! Read-only travel agent detail sheet shown in the view dialog.

use contracts::domain::contacts::TravelAgent;
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
pub fn TravelAgentDetails(#[prop(into)] agent: Signal<Option<TravelAgent>>) -> impl IntoView {
    view! {
        {move || agent.get().map(|agent| view! {
            <div class="details">
                {(!agent.logo_url.is_empty()).then(|| view! {
                    <img class="details__image" src=agent.logo_url.clone() alt=agent.name.clone()/>
                })}
                {detail("Name", agent.name.clone())}
                {detail("Registration Number", agent.registration_number.clone())}
                {detail("Owner", agent.owner_name.clone())}
                {detail("Designation", agent.designation.clone())}
                {detail("Email", agent.email.clone())}
                {detail("Phone", agent.phone.clone())}
                {detail("Alternate Phone", agent.alternate_phone.clone())}
                {detail("Address", agent.address.clone())}
                {detail("City", agent.city.clone())}
                {detail("Province", agent.province.clone())}
                {detail("Country", agent.country.clone())}
                {detail("Postal Code", agent.postal_code.clone())}
                {detail("Website", agent.website.clone())}
                {detail("Facebook", agent.facebook.clone())}
                {detail("Instagram", agent.instagram.clone())}
                {detail("Status", agent.status.clone())}
                {detail("Description", agent.description.clone())}
                {detail(
                    "Created",
                    agent.created_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
                {detail(
                    "Updated",
                    agent.updated_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string()),
                )}
            </div>
        })}
    }
}
