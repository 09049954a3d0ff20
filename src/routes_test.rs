use super::*;

use crate::net::types::User;

fn authenticated(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.resolve_authenticated(User {
        id: 9,
        username: "t".to_owned(),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        role,
    });
    state
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.resolve_anonymous();
    state
}

// =============================================================
// Route tables
// =============================================================

#[test]
fn public_routes_are_exact_matches() {
    assert!(is_public("/"));
    assert!(is_public("/login"));
    assert!(!is_public("/loginx"));
    assert!(!is_public("/dashboard"));
}

#[test]
fn required_roles_match_on_path_boundaries() {
    assert_eq!(required_roles("/faculties"), Some(&[Role::Admin][..]));
    assert_eq!(required_roles("/faculties/12/edit"), Some(&[Role::Admin][..]));
    assert_eq!(required_roles("/facultiesx"), None);
    assert_eq!(required_roles("/profile"), None);
}

#[test]
fn required_roles_prefer_the_longest_prefix() {
    // "/classes" would also match "/" if the table ever grew a root entry;
    // the longest prefix must win regardless of table order.
    assert_eq!(
        required_roles("/classes/3"),
        Some(&[Role::Admin, Role::Teacher][..])
    );
}

// =============================================================
// Guard decision
// =============================================================

#[test]
fn loading_session_renders_placeholder() {
    let state = SessionState::default();
    assert_eq!(decide("/faculties", &state, None), RouteDecision::Loading);
}

#[test]
fn anonymous_on_public_route_is_allowed() {
    assert_eq!(decide("/login", &anonymous(), None), RouteDecision::Allow);
}

#[test]
fn anonymous_on_protected_route_redirects_with_original_path() {
    assert_eq!(
        decide("/majors", &anonymous(), None),
        RouteDecision::RedirectToLogin {
            redirect: "/majors".to_owned()
        }
    );
}

#[test]
fn wrong_role_redirects_unauthorized() {
    let state = authenticated(Role::Student);
    assert_eq!(
        decide("/faculties", &state, None),
        RouteDecision::RedirectUnauthorized
    );
}

#[test]
fn matching_role_is_allowed() {
    let state = authenticated(Role::Teacher);
    assert_eq!(decide("/classes", &state, None), RouteDecision::Allow);
}

#[test]
fn untabled_route_is_open_to_any_authenticated_user() {
    let state = authenticated(Role::Student);
    assert_eq!(decide("/profile", &state, None), RouteDecision::Allow);
}

#[test]
fn override_roles_take_precedence_over_the_table() {
    // /dashboard is open to all roles, but an explicit admin-only
    // requirement still locks a student out.
    let state = authenticated(Role::Student);
    assert_eq!(
        decide("/dashboard", &state, Some(&[Role::Admin])),
        RouteDecision::RedirectUnauthorized
    );
}

// =============================================================
// URLs
// =============================================================

#[test]
fn login_redirect_url_encodes_query_characters() {
    assert_eq!(
        login_redirect_url("/classes?page=2"),
        "/login?redirect=/classes%3Fpage%3D2"
    );
}

#[test]
fn unauthorized_url_carries_the_marker() {
    assert_eq!(unauthorized_url(), "/dashboard?error=unauthorized");
}
