//! Process-wide notification channel.
//!
//! One toast is visible at a time; later toasts queue FIFO behind it instead
//! of overwriting it, so error context from overlapping async failures is
//! not lost. Each visible toast auto-dismisses after a fixed duration.

use std::collections::VecDeque;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn css(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// FIFO queue: one visible slot plus pending toasts in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    visible: Option<Toast>,
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    /// Enqueue a toast. Returns its id if it became visible immediately
    /// (the caller arms the dismiss timer for visible toasts only).
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> Option<u64> {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        };
        if self.visible.is_none() {
            let id = toast.id;
            self.visible = Some(toast);
            Some(id)
        } else {
            self.pending.push_back(toast);
            None
        }
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible.as_ref()
    }

    /// Dismiss the visible toast if it still carries `id` (a stale timer for
    /// an already-dismissed toast is a no-op). Returns the id of the toast
    /// promoted into the visible slot, if any.
    pub fn dismiss(&mut self, id: u64) -> Option<u64> {
        if self.visible.as_ref().map(|t| t.id) != Some(id) {
            return None;
        }
        self.visible = self.pending.pop_front();
        self.visible.as_ref().map(|t| t.id)
    }
}

/// Shared handle to the toast queue; provided once at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let mut became_visible = None;
        self.queue.update(|q| became_visible = q.push(message, kind));
        if let Some(id) = became_visible {
            self.arm_timer(id);
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Warning);
    }

    /// Manual dismissal from the close button.
    pub fn dismiss_visible(&self) {
        let current = self.queue.with_untracked(|q| q.visible().map(|t| t.id));
        if let Some(id) = current {
            self.advance(id);
        }
    }

    fn advance(&self, id: u64) {
        let mut promoted = None;
        self.queue.update(|q| promoted = q.dismiss(id));
        if let Some(next) = promoted {
            self.arm_timer(next);
        }
    }

    fn arm_timer(&self, id: u64) {
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.advance(id);
        });
    }

    fn visible_signal(&self) -> Signal<Option<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.visible().cloned()))
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the visible toast; mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");
    let visible = service.visible_signal();

    view! {
        {move || visible.get().map(|toast| view! {
            <div class=format!("toast toast--{}", toast.kind.css())>
                <span class="toast__message">{toast.message.clone()}</span>
                <button
                    class="button button--icon toast__close"
                    on:click=move |_| service.dismiss_visible()
                >
                    {icon("x")}
                </button>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_toast_is_visible_immediately() {
        let mut queue = ToastQueue::default();
        let id = queue.push("saved", ToastKind::Success);
        assert!(id.is_some());
        assert_eq!(queue.visible().unwrap().message, "saved");
    }

    #[test]
    fn test_later_toasts_queue_instead_of_overwriting() {
        let mut queue = ToastQueue::default();
        let first = queue.push("first failed", ToastKind::Error).unwrap();
        assert_eq!(queue.push("second failed", ToastKind::Error), None);
        assert_eq!(queue.visible().unwrap().message, "first failed");

        let promoted = queue.dismiss(first).unwrap();
        assert_eq!(queue.visible().unwrap().message, "second failed");
        assert_eq!(queue.visible().unwrap().id, promoted);
        assert_eq!(queue.dismiss(promoted), None);
        assert!(queue.visible().is_none());
    }

    #[test]
    fn test_stale_dismiss_is_a_noop() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one", ToastKind::Info).unwrap();
        queue.dismiss(first);
        let second = queue.push("two", ToastKind::Info).unwrap();
        // The timer of the already-dismissed toast must not kill its successor.
        assert_eq!(queue.dismiss(first), None);
        assert_eq!(queue.visible().unwrap().id, second);
    }
}
