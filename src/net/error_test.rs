use super::*;
use serde_json::json;

// =============================================================
// response_message precedence
// =============================================================

#[test]
fn response_message_prefers_detail() {
    let body = json!({"detail": "Invalid credentials", "error": {"message": "nested"}});
    assert_eq!(response_message(401, &body), "Invalid credentials");
}

#[test]
fn response_message_falls_back_to_nested_error_message() {
    let body = json!({"error": {"code": "conflict", "message": "Code already exists"}});
    assert_eq!(response_message(400, &body), "Code already exists");
}

#[test]
fn response_message_generic_fallback_names_status() {
    assert_eq!(
        response_message(502, &json!({})),
        "request failed with status 502"
    );
    assert_eq!(
        response_message(500, &serde_json::Value::Null),
        "request failed with status 500"
    );
}

#[test]
fn response_message_ignores_non_string_detail() {
    let body = json!({"detail": {"field": ["bad"]}});
    assert_eq!(response_message(400, &body), "request failed with status 400");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_display_uses_message() {
    let err = ApiError::Status {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
}

#[test]
fn network_error_has_no_status() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "network error: timeout");
}
