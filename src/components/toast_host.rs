//! Renders the shared toast queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, Toaster};

/// Fixed overlay listing queued toasts; each can be dismissed early with
/// its close button, and expires on its own otherwise.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toaster>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .signal()
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class role="status">
                                <span>{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "x"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
