use super::*;

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(400).is_unauthorized());
    assert!(!ApiError::Network("down".to_owned()).is_unauthorized());
}

#[test]
fn login_message_hides_status_for_bad_credentials() {
    assert_eq!(ApiError::Status(401).login_message(), "Invalid email or password.");
}

#[test]
fn login_message_reports_server_errors() {
    assert_eq!(
        ApiError::Status(503).login_message(),
        "The server had a problem. Try again shortly."
    );
}

#[test]
fn login_message_passes_validation_text_through() {
    assert_eq!(
        ApiError::InvalidInput("Enter your password.").login_message(),
        "Enter your password."
    );
}

#[test]
fn user_message_formats_status() {
    assert_eq!(
        ApiError::Status(422).user_message(),
        "The server responded with status 422."
    );
}

#[test]
fn display_formats_variants() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn check_status_maps_non_ok_to_error() {
    assert_eq!(check_status(true, 200), Ok(()));
    assert_eq!(check_status(false, 500), Err(ApiError::Status(500)));
}
