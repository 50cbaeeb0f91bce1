use leptos::prelude::*;

/// Checkbox cell for selectable table rows.
///
/// Renders the `<td>` wrapper itself and stops click propagation so toggling
/// a checkbox never triggers the row's own click handling.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|ev| ev.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </td>
    }
}
