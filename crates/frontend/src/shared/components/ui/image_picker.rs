use leptos::prelude::*;

use crate::shared::icons::icon;

/// Image field: preview plus a file chooser. The hosting page owns the
/// chosen file and uploads it on save; this component only reports the
/// selection and shows either the fresh object-URL preview or the URL
/// already stored on the record.
#[component]
pub fn ImagePicker(
    #[prop(into)] label: String,
    /// Object URL of a freshly chosen file, if any.
    #[prop(into)]
    preview: Signal<Option<String>>,
    /// URL already stored on the record being edited.
    #[prop(into)]
    current_url: Signal<String>,
    on_file: Callback<Option<web_sys::File>>,
) -> impl IntoView {
    let shown = Memo::new(move |_| {
        preview.get().or_else(|| {
            let url = current_url.get();
            (!url.is_empty()).then_some(url)
        })
    });

    view! {
        <div class="form__group form__group--full">
            <label class="form__label">{label}</label>
            <div class="image-picker">
                {move || match shown.get() {
                    Some(url) => view! {
                        <img class="image-picker__preview" src=url alt="Preview"/>
                    }
                        .into_any(),
                    None => view! {
                        <div class="image-picker__placeholder">{icon("image")}</div>
                    }
                        .into_any(),
                }}
                <label class="image-picker__control">
                    {icon("upload")}
                    <span>"Choose image"</span>
                    <input
                        type="file"
                        accept="image/*"
                        class="image-picker__input"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            on_file.run(input.files().and_then(|files| files.get(0)));
                        }
                    />
                </label>
            </div>
        </div>
    }
}
