use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_uses_upper_case_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"TEACHER\"").unwrap(),
        Role::Teacher
    );
}

#[test]
fn unknown_role_is_a_deserialization_error() {
    assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn display_name_joins_name_parts() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": "hvu",
        "first_name": "Ha",
        "last_name": "Vu",
        "role": "STUDENT"
    }))
    .unwrap();
    assert_eq!(user.display_name(), "Ha Vu");
}

#[test]
fn display_name_falls_back_to_username() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": "hvu",
        "role": "STUDENT"
    }))
    .unwrap();
    assert_eq!(user.display_name(), "hvu");
}

// =============================================================
// Envelopes and records
// =============================================================

#[test]
fn page_envelope_deserializes() {
    let page: Page<Faculty> = serde_json::from_value(serde_json::json!({
        "count": 45,
        "next": "http://api/v1/faculties/?page=2",
        "previous": null,
        "results": [{
            "id": 1,
            "code": "IT",
            "name": "Information Technology",
            "is_active": true,
            "majors_count": 4,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z"
        }]
    }))
    .unwrap();
    assert_eq!(page.count, 45);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].code, "IT");
}

#[test]
fn extra_record_fields_are_ignored() {
    // Option endpoints deserialize full records into EntityRef summaries.
    let entity: EntityRef = serde_json::from_value(serde_json::json!({
        "id": 2,
        "code": "SE",
        "name": "Software Engineering",
        "is_active": true,
        "majors_count": 7
    }))
    .unwrap();
    assert_eq!(entity.id, 2);
}

#[test]
fn login_response_carries_tokens_and_user() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access": "a.b.c",
        "refresh": "d.e.f",
        "user": {"id": 1, "username": "admin", "role": "ADMIN"}
    }))
    .unwrap();
    assert_eq!(resp.access, "a.b.c");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn faculty_input_omits_absent_description() {
    let input = FacultyInput {
        code: "IT".to_owned(),
        name: "Information Technology".to_owned(),
        description: None,
        is_active: true,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("description").is_none());
}
