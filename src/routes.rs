//! Route tables and the pure route-guard decision.
//!
//! The tables are fixed at compile time. Role requirements are looked up by
//! longest-prefix match so `/faculties/12/edit` inherits the `/faculties`
//! entry. The decision function is pure; the `ProtectedRoute` component
//! only executes what it returns.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::{ADMIN_ONLY, ALL_ROLES, Role, STAFF_ROLES};
use crate::state::session::{SessionPhase, SessionState};

pub const LOGIN_ROUTE: &str = "/login";

/// Default post-login landing page.
pub const LANDING_ROUTE: &str = "/dashboard";

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &["/", "/login"];

/// Role requirements per route prefix.
pub const ROLE_ROUTES: &[(&str, &[Role])] = &[
    ("/faculties", ADMIN_ONLY),
    ("/majors", ADMIN_ONLY),
    ("/classes", STAFF_ROLES),
    ("/dashboard", ALL_ROLES),
];

/// True for exact matches against the public allow-list.
pub fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Does `prefix` cover `path` at a `/` boundary?
fn prefix_matches(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Roles required for `path`, by longest matching prefix. `None` means the
/// route carries no role requirement.
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    ROLE_ROUTES
        .iter()
        .filter(|(prefix, _)| prefix_matches(prefix, path))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, roles)| *roles)
}

/// What the route guard should do for `path` in the given session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; render a placeholder.
    Loading,
    Allow,
    /// Send to the login page, carrying the original path back.
    RedirectToLogin { redirect: String },
    /// Authenticated but role-excluded; send to the landing page with the
    /// unauthorized marker.
    RedirectUnauthorized,
}

/// Guard decision for `path`. An explicit `override_roles` (from a
/// `ProtectedRoute` prop) takes precedence over the route table.
pub fn decide(
    path: &str,
    session: &SessionState,
    override_roles: Option<&[Role]>,
) -> RouteDecision {
    match session.phase {
        SessionPhase::Loading => RouteDecision::Loading,
        SessionPhase::Anonymous => {
            if is_public(path) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToLogin {
                    redirect: path.to_owned(),
                }
            }
        }
        SessionPhase::Authenticated => {
            let required = match override_roles {
                Some(roles) => Some(roles),
                None => required_roles(path),
            };
            if session.can_access(required) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectUnauthorized
            }
        }
    }
}

/// Login URL carrying the original path as a `redirect` parameter.
pub fn login_redirect_url(path: &str) -> String {
    format!("{LOGIN_ROUTE}?redirect={}", encode_component(path))
}

/// Landing URL with the unauthorized marker.
pub fn unauthorized_url() -> String {
    format!("{LANDING_ROUTE}?error=unauthorized")
}

/// Minimal percent-encoding for a query-parameter value. Unreserved ASCII
/// and `/` pass through; everything else is `%XX`-encoded.
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
