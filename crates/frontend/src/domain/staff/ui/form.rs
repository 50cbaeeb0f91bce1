use contracts::domain::staff::StaffDraft;
use leptos::prelude::*;

use crate::domain::staff::ui::list::STATUSES;
use crate::shared::components::ui::{DateInput, ImagePicker, Input, Select, Textarea};

#[component]
pub fn StaffForm(
    #[prop(into)] draft: Signal<StaffDraft>,
    on_change: Callback<StaffDraft>,
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
        STATUSES
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="form__grid">
            <Input label="Staff ID" required=true value=field!(staff_id) on_input=bind!(staff_id) />
            <Input
                label="First Name"
                required=true
                value=field!(first_name)
                on_input=bind!(first_name)
            />
            <Input
                label="Last Name"
                required=true
                value=field!(last_name)
                on_input=bind!(last_name)
            />
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
                label="Designation"
                required=true
                value=field!(designation)
                on_input=bind!(designation)
            />
            <Input label="Department" value=field!(department) on_input=bind!(department) />
            <DateInput
                label="Joined Date"
                required=true
                value=field!(joined_date)
                on_change=bind!(joined_date)
            />
            <DateInput
                label="Resigned Date"
                value=field!(resigned_date)
                on_change=bind!(resigned_date)
            />
            <Select
                label="Status"
                required=true
                value=field!(status)
                on_change=bind!(status)
                options=status_options
            />
            <Textarea label="Note" value=field!(note) on_input=bind!(note) />
            <ImagePicker
                label="Profile Image"
                preview=preview
                current_url=field!(profile_image_url)
                on_file=on_file
            />
        </div>
    }
}
