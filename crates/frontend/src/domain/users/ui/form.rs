use contracts::domain::users::UserDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};

#[component]
pub fn UserForm(
    #[prop(into)] draft: Signal<UserDraft>,
    on_change: Callback<UserDraft>,
    #[prop(into)] staff_options: Signal<Vec<(String, String)>>,
    #[prop(into)] role_options: Signal<Vec<(String, String)>>,
    /// Editing an existing account: a blank password keeps the stored one.
    #[prop(into)]
    editing: Signal<bool>,
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

    let is_active = Signal::derive(move || draft.with(|d| d.is_active));

    view! {
        <div class="form__grid">
            <Select
                label="Staff Member"
                value=field!(staff)
                on_change=bind!(staff)
                options=staff_options
                placeholder="Select a staff member"
            />
            <Input
                label="Username"
                required=true
                value=field!(username)
                on_input=bind!(username)
            />
            {move || {
                let (required, placeholder) = if editing.get() {
                    (false, "Leave blank to keep current password")
                } else {
                    (true, "")
                };
                view! {
                    <Input
                        label="Password"
                        required=required
                        input_type="password"
                        placeholder=placeholder.to_string()
                        value=field!(password)
                        on_input=bind!(password)
                    />
                }
            }}
            <Select
                label="Role"
                required=true
                value=field!(role)
                on_change=bind!(role)
                options=role_options
                placeholder="Select a role"
            />
            <div class="form__group">
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| {
                            let mut fields = draft.get_untracked();
                            fields.is_active = event_target_checked(&ev);
                            on_change.run(fields);
                        }
                    />
                    <span>"Active"</span>
                </label>
            </div>
        </div>
    }
}
