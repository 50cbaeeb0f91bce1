use leptos::prelude::*;

/// Multi-choice filter dropdown with checkbox entries, used by list
/// toolbars ("Filter by Country", "Filter by Category", ...). The button
/// label carries the selection count; clearing happens entry by entry or
/// through the clear control.
#[component]
pub fn MultiSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(into)] options: Signal<Vec<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let button_label = {
        let label = label.clone();
        move || {
            let count = value.with(|v| v.len());
            if count == 0 {
                label.clone()
            } else {
                format!("{} ({})", label, count)
            }
        }
    };

    let toggle_option = move |option: String| {
        let mut selected = value.get_untracked();
        if let Some(pos) = selected.iter().position(|s| *s == option) {
            selected.remove(pos);
        } else {
            selected.push(option);
        }
        on_change.run(selected);
    };

    view! {
        <div class="multi-select">
            <button
                class="multi-select__trigger"
                class=("multi-select__trigger--active", move || !value.with(|v| v.is_empty()))
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {button_label}
            </button>
            <Show when=move || open.get()>
                <div class="multi-select__menu">
                    <For
                        each=move || options.get()
                        key=|option| option.clone()
                        children=move |option| {
                            let option_for_check = option.clone();
                            let option_for_toggle = option.clone();
                            let checked = Signal::derive(move || {
                                value.with(|v| v.contains(&option_for_check))
                            });
                            view! {
                                <label class="multi-select__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| toggle_option(option_for_toggle.clone())
                                    />
                                    <span>{option}</span>
                                </label>
                            }
                        }
                    />
                    <div class="multi-select__footer">
                        <button
                            class="button button--text button--small"
                            on:click=move |_| on_change.run(Vec::new())
                        >
                            "Clear"
                        </button>
                        <button
                            class="button button--text button--small"
                            on:click=move |_| set_open.set(false)
                        >
                            "Done"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
