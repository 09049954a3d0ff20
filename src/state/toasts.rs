//! Fire-and-forget notification sink.
//!
//! Controllers push a message with a success/error kind and move on; the
//! `ToastHost` component renders whatever is queued. Auto-dismissal runs in
//! the browser only.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// Visual kind of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast queue.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast, returning its id.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast by id. Removing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Dismissal delay for auto-expiring toasts.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4_000;

/// Cheap, copyable handle over the shared toast queue.
#[derive(Clone, Copy, Debug)]
pub struct Toaster(RwSignal<ToastState>);

impl Toaster {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    /// The underlying signal, for the `ToastHost` component.
    pub const fn signal(&self) -> RwSignal<ToastState> {
        self.0
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Remove a toast immediately (close button).
    pub fn dismiss(&self, id: u64) {
        self.0.update(|s| s.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.0.update(|s| id = s.push(kind, message));

        // Auto-dismiss after a fixed delay, browser only.
        #[cfg(feature = "hydrate")]
        {
            let queue = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                queue.update(|s| s.dismiss(id));
            });
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
