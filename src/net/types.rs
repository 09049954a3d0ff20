//! Wire types shared with the campus REST backend.
//!
//! Shapes mirror the backend serializers: list endpoints return a
//! `Page<T>` envelope, records carry numeric ids, and nested relations
//! are reduced to [`EntityRef`] summaries.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User role, closed set.
///
/// The wire format uses the upper-case strings the backend emits;
/// everything else is a deserialization error rather than a silently
/// unknown role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Human-readable label for nav and table cells.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

/// Every role; used by routes open to any signed-in user.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

/// Administrator only.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Teaching staff: administrators and teachers.
pub const STAFF_ROLES: &[Role] = &[Role::Admin, Role::Teacher];

/// The authenticated account as returned by `/api/v1/auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
}

impl User {
    /// Display name, falling back to the username when name parts are empty.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

/// Login form payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: token pair plus the signed-in user.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

/// Paginated list envelope: `{count, next, previous, results}`.
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Minimal embedded relation: enough to label a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u64,
    pub code: String,
    pub name: String,
}

/// A faculty record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub majors_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update payload for a faculty.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FacultyInput {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

/// A major record, embedding its owning faculty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub faculty: EntityRef,
    pub is_active: bool,
    #[serde(default)]
    pub classes_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update payload for a major.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MajorInput {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub faculty_id: u64,
    pub is_active: bool,
}

/// A class record, embedding its major and faculty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub major: EntityRef,
    pub faculty: EntityRef,
    pub academic_year: i32,
    pub max_students: u32,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update payload for a class.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClassInput {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub major_id: u64,
    pub academic_year: i32,
    pub max_students: u32,
    pub is_active: bool,
}
