//! Shared delete-confirmation dialog.

use leptos::prelude::*;

/// Modal confirmation before a destructive delete. Clicking the backdrop
/// or "Cancel" dismisses; "Delete" fires `on_confirm`.
#[component]
pub fn DeleteConfirmDialog(
    title: &'static str,
    description: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__description">{description}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
