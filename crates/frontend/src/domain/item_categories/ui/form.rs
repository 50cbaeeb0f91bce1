use contracts::domain::inventory::ItemCategoryDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{ImagePicker, Input, Textarea};

#[component]
pub fn ItemCategoryForm(
    #[prop(into)] draft: Signal<ItemCategoryDraft>,
    on_change: Callback<ItemCategoryDraft>,
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

    view! {
        <div class="form__grid">
            <Input
                label="Category ID"
                required=true
                value=field!(category_id)
                on_input=bind!(category_id)
            />
            <Input
                label="Category"
                required=true
                value=field!(category)
                on_input=bind!(category)
            />
            <Textarea label="Note" value=field!(note) on_input=bind!(note) />
            <ImagePicker
                label="Image"
                preview=preview
                current_url=field!(image_url)
                on_file=on_file
            />
        </div>
    }
}
