use super::*;

#[test]
fn join_url_with_empty_base_is_origin_relative() {
    assert_eq!(join_url("", "/api/auth/user"), "/api/auth/user");
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(
        join_url("https://api.example.com/", "/api/admin/session"),
        "https://api.example.com/api/admin/session"
    );
    assert_eq!(
        join_url("https://api.example.com", "api/admin/login"),
        "https://api.example.com/api/admin/login"
    );
}

#[test]
fn parse_toast_ms_defaults_when_missing_or_invalid() {
    assert_eq!(parse_toast_ms(None), DEFAULT_TOAST_MS);
    assert_eq!(parse_toast_ms(Some("soon")), DEFAULT_TOAST_MS);
    assert_eq!(parse_toast_ms(Some("0")), DEFAULT_TOAST_MS);
}

#[test]
fn parse_toast_ms_accepts_positive_values() {
    assert_eq!(parse_toast_ms(Some(" 2500 ")), 2500);
}

#[test]
fn api_url_starts_with_configured_base() {
    let url = api_url("/api/auth/user");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/api/auth/user"));
}
