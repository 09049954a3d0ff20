//! Browser utilities.

pub mod credentials;
pub mod task;
