//! Controlled travel agent form. All state lives in the hosting page's
//! draft; every keystroke reports the whole field set back up.

use contracts::domain::contacts::TravelAgentDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{ImagePicker, Input, Select, Textarea};

#[component]
pub fn TravelAgentForm(
    #[prop(into)] draft: Signal<TravelAgentDraft>,
    on_change: Callback<TravelAgentDraft>,
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
        vec![
            ("Active".to_string(), "Active".to_string()),
            ("Inactive".to_string(), "Inactive".to_string()),
        ]
    });

    view! {
        <div class="form__grid">
            <Input label="Name" required=true value=field!(name) on_input=bind!(name) />
            <Input
                label="Registration Number"
                value=field!(registration_number)
                on_input=bind!(registration_number)
            />
            <Input label="Owner Name" value=field!(owner_name) on_input=bind!(owner_name) />
            <Input label="Designation" value=field!(designation) on_input=bind!(designation) />
            <Input
                label="Email"
                required=true
                input_type="email"
                value=field!(email)
                on_input=bind!(email)
            />
            <Input
                label="Phone"
                required=true
                input_type="tel"
                value=field!(phone)
                on_input=bind!(phone)
            />
            <Input
                label="Alternate Phone"
                input_type="tel"
                value=field!(alternate_phone)
                on_input=bind!(alternate_phone)
            />
            <Input label="Address" value=field!(address) on_input=bind!(address) />
            <Input label="City" value=field!(city) on_input=bind!(city) />
            <Input label="Province" value=field!(province) on_input=bind!(province) />
            <Input label="Country" value=field!(country) on_input=bind!(country) />
            <Input label="Postal Code" value=field!(postal_code) on_input=bind!(postal_code) />
            <Input label="Website" value=field!(website) on_input=bind!(website) />
            <Input label="Facebook" value=field!(facebook) on_input=bind!(facebook) />
            <Input label="Instagram" value=field!(instagram) on_input=bind!(instagram) />
            <Select
                label="Status"
                value=field!(status)
                on_change=bind!(status)
                options=status_options
            />
            <Textarea
                label="Description"
                value=field!(description)
                on_input=bind!(description)
            />
            <ImagePicker
                label="Logo"
                preview=preview
                current_url=field!(logo_url)
                on_file=on_file
            />
        </div>
    }
}
