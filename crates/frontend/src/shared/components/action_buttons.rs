//! Contextual row actions shown while a selection is active.
//!
//! The gating rule is uniform across every entity page: view and edit are
//! offered iff exactly one row is selected; delete is offered for one or
//! more. With nothing selected the page shows its browse toolbar instead.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Which contextual mode a selection of the given size unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Nothing selected: browse toolbar (search, filters, new record).
    Browse,
    /// Exactly one row: view, edit and delete.
    Single,
    /// Several rows: bulk delete only.
    Bulk,
}

pub fn selection_mode(selected: usize) -> SelectionMode {
    match selected {
        0 => SelectionMode::Browse,
        1 => SelectionMode::Single,
        _ => SelectionMode::Bulk,
    }
}

#[component]
pub fn ActionButtons(
    #[prop(optional)] on_view: Option<Callback<()>>,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="action-buttons">
            {on_view.map(|callback| view! {
                <button
                    class="button button--icon action-buttons__view"
                    title="View"
                    on:click=move |_| callback.run(())
                >
                    {icon("eye")}
                </button>
            })}
            {on_edit.map(|callback| view! {
                <button
                    class="button button--icon action-buttons__edit"
                    title="Edit"
                    on:click=move |_| callback.run(())
                >
                    {icon("edit")}
                </button>
            })}
            {on_delete.map(|callback| view! {
                <button
                    class="button button--icon action-buttons__delete"
                    title="Delete"
                    on:click=move |_| callback.run(())
                >
                    {icon("trash")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gating_by_selection_size() {
        assert_eq!(selection_mode(0), SelectionMode::Browse);
        assert_eq!(selection_mode(1), SelectionMode::Single);
        assert_eq!(selection_mode(2), SelectionMode::Bulk);
        assert_eq!(selection_mode(50), SelectionMode::Bulk);
    }
}
