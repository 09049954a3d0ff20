//! Shared UI components.

pub mod data_table;
pub mod delete_confirm;
pub mod nav;
pub mod protected_route;
pub mod toast_host;
