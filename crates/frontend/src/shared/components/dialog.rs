//! Confirmation/content dialog layered over a page.
//!
//! The dialog holds no entity knowledge: content is injected and the footer
//! actions come from the hosting page, which is also responsible for closing
//! the dialog after handling an action. Delete confirmation is this same
//! primitive with static content and one destructive action.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionColor {
    Primary,
    Success,
    Danger,
}

impl ActionColor {
    fn css(self) -> &'static str {
        match self {
            ActionColor::Primary => "primary",
            ActionColor::Success => "success",
            ActionColor::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Contained,
    Outlined,
}

impl ActionVariant {
    fn css(self) -> &'static str {
        match self {
            ActionVariant::Contained => "contained",
            ActionVariant::Outlined => "outlined",
        }
    }
}

/// One footer button of the dialog.
#[derive(Clone)]
pub struct DialogAction {
    pub label: String,
    pub color: ActionColor,
    pub variant: ActionVariant,
    pub disabled: Signal<bool>,
    pub on_click: Callback<()>,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            color: ActionColor::Primary,
            variant: ActionVariant::Contained,
            disabled: Signal::derive(|| false),
            on_click,
        }
    }

    pub fn color(mut self, color: ActionColor) -> Self {
        self.color = color;
        self
    }

    pub fn variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: Signal<bool>) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Modal dialog with a title, injected body and footer actions.
///
/// Escape and backdrop clicks route through `on_close`; clicks inside the
/// surface do not propagate to the backdrop.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] actions: Vec<DialogAction>,
    /// Auto-shown cancel button before the supplied actions.
    #[prop(optional)]
    show_cancel_button: Option<bool>,
    #[prop(optional, into)] cancel_label: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let show_cancel = show_cancel_button.unwrap_or(true);

    // Escape closes the dialog while it is open. The dialog stays mounted
    // while closed, so the window listener lives for the component's lifetime
    // and is removed when the owner is disposed.
    let listener = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::Event)>>);
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" && open.get_untracked() {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    listener.set_value(Some(closure));
    on_cleanup(move || {
        listener.update_value(|slot| {
            if let (Some(window), Some(closure)) = (web_sys::window(), slot.take()) {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
        });
    });

    let actions = StoredValue::new(actions);
    let cancel_text = move || cancel_label.get().unwrap_or_else(|| "Cancel".to_string());

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    {move || title.get().map(|t| view! {
                        <div class="modal__header">
                            <h2 class="modal__title">{t}</h2>
                            <button
                                class="button button--icon modal__close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                    })}
                    <div class="modal__body">
                        {children()}
                    </div>
                    <div class="modal__actions">
                        {show_cancel.then(|| view! {
                            <button
                                class="button button--text"
                                on:click=move |_| on_close.run(())
                            >
                                {cancel_text()}
                            </button>
                        })}
                        {actions.with_value(|list| list.iter().map(|action| {
                            let DialogAction { label, color, variant, disabled, on_click } =
                                action.clone();
                            view! {
                                <button
                                    class=format!(
                                        "button button--{} button--{}",
                                        variant.css(),
                                        color.css(),
                                    )
                                    disabled=move || disabled.get()
                                    on:click=move |_| on_click.run(())
                                >
                                    {label.clone()}
                                </button>
                            }
                        }).collect_view())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
