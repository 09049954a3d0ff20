//! REST wire types and HTTP plumbing for the campus backend.

pub mod academics;
pub mod auth;
pub mod error;
pub mod http;
pub mod types;
