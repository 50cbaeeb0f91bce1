use leptos::prelude::*;

/// Native date picker; values travel as `yyyy-mm-dd` strings and the
/// browser renders them in locale format.
#[component]
pub fn DateInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
