//! Application pages.

pub mod classes;
pub mod dashboard;
pub mod faculties;
pub mod login;
pub mod majors;
