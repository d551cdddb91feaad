use super::*;

fn user(user_type: Option<UserType>) -> User {
    User {
        id: "u-1".to_owned(),
        user_type,
        email: None,
        first_name: None,
        last_name: None,
        profile_image_url: None,
    }
}

// =============================================================
// UserType
// =============================================================

#[test]
fn user_type_parse_accepts_exact_names_only() {
    assert_eq!(UserType::parse("personal"), Some(UserType::Personal));
    assert_eq!(UserType::parse("enterprise"), Some(UserType::Enterprise));
    assert_eq!(UserType::parse("admin"), None);
    assert_eq!(UserType::parse("Personal"), None);
    assert_eq!(UserType::parse(""), None);
}

#[test]
fn user_type_serializes_lowercase() {
    let json = serde_json::to_string(&UserType::Enterprise).unwrap();
    assert_eq!(json, "\"enterprise\"");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_camel_case_with_missing_profile_fields() {
    let raw = r#"{"id":"abc","userType":"personal","firstName":"Ada"}"#;
    let decoded: User = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded.id, "abc");
    assert_eq!(decoded.user_type, Some(UserType::Personal));
    assert_eq!(decoded.first_name.as_deref(), Some("Ada"));
    assert!(decoded.email.is_none());
}

#[test]
fn user_decodes_null_user_type() {
    let decoded: User = serde_json::from_str(r#"{"id":"abc","userType":null}"#).unwrap();
    assert_eq!(decoded.user_type, None);
}

#[test]
fn display_name_prefers_full_name_then_email_then_id() {
    let mut u = user(None);
    assert_eq!(u.display_name(), "u-1");

    u.email = Some("ada@example.com".to_owned());
    assert_eq!(u.display_name(), "ada@example.com");

    u.first_name = Some("Ada".to_owned());
    u.last_name = Some(" Lovelace ".to_owned());
    assert_eq!(u.display_name(), "Ada Lovelace");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn update_user_type_request_uses_camel_case_key() {
    let body = UpdateUserTypeRequest { user_type: UserType::Enterprise };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "userType": "enterprise" })
    );
}

#[test]
fn admin_session_email_is_optional() {
    let session: AdminSession = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
    assert_eq!(session, AdminSession::default());
}

#[test]
fn admin_credentials_debug_redacts_password() {
    let creds = AdminCredentials {
        email: "a@b.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}
