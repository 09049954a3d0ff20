//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`resource`, `session`, `toasts`) so pages and
//! components can depend on small focused models. Each module keeps its
//! transition logic on plain structs so it can be unit tested without a
//! browser; the Leptos layer holds them in `RwSignal`s provided via context.

pub mod resource;
pub mod session;
pub mod toasts;
