use super::*;

fn probed(result: Result<AdminSession, ApiError>) -> QueryState<AdminSession> {
    let mut q = QueryState::default();
    let ticket = q.begin_fetch();
    q.resolve(ticket, result);
    q
}

// =============================================================
// AdminView
// =============================================================

#[test]
fn view_is_loading_before_first_probe() {
    let view = AdminView::from_query(&QueryState::default());
    assert!(view.loading);
    assert!(!view.authenticated);
    assert!(!view.should_redirect_to_login());
}

#[test]
fn view_reports_authenticated_email() {
    let view = AdminView::from_query(&probed(Ok(AdminSession {
        authenticated: true,
        email: Some("a@b.com".to_owned()),
    })));
    assert!(view.authenticated);
    assert_eq!(view.email.as_deref(), Some("a@b.com"));
    assert!(view.should_leave_login_page());
    assert!(!view.should_redirect_to_login());
}

#[test]
fn view_hides_email_when_not_authenticated() {
    let view = AdminView::from_query(&probed(Ok(AdminSession {
        authenticated: false,
        email: Some("stale@b.com".to_owned()),
    })));
    assert!(!view.authenticated);
    assert_eq!(view.email, None);
    assert!(view.should_redirect_to_login());
}

#[test]
fn failed_probe_reads_as_signed_out() {
    let view = AdminView::from_query(&probed(Err(ApiError::Status(401))));
    assert!(!view.loading);
    assert!(!view.authenticated);
    assert!(view.should_redirect_to_login());
}

// =============================================================
// Login / logout scenario
// =============================================================

#[test]
fn login_then_logout_flips_probe_result() {
    let mut mutations = AdminMutationState::default();
    let mut session = probed(Ok(AdminSession::default()));

    mutations.begin_login().unwrap();
    assert!(mutations.logging_in);
    assert!(mutations.finish_login(&Ok(())));
    let ticket = session.begin_fetch();
    session.resolve(
        ticket,
        Ok(AdminSession {
            authenticated: true,
            email: Some("a@b.com".to_owned()),
        }),
    );
    let view = AdminView::from_query(&session);
    assert!(view.authenticated);
    assert_eq!(view.email.as_deref(), Some("a@b.com"));

    assert!(mutations.begin_logout());
    assert!(mutations.finish_logout(&Ok(())));
    let ticket = session.begin_fetch();
    session.resolve(ticket, Ok(AdminSession::default()));
    assert!(!AdminView::from_query(&session).authenticated);
}

#[test]
fn failed_login_records_error_and_skips_invalidation() {
    let mut mutations = AdminMutationState::default();
    mutations.begin_login().unwrap();
    assert!(!mutations.finish_login(&Err(ApiError::Status(401))));
    assert!(!mutations.logging_in);
    assert_eq!(mutations.login_error.as_deref(), Some("Invalid email or password."));
}

#[test]
fn second_login_while_in_flight_is_busy() {
    let mut mutations = AdminMutationState::default();
    mutations.begin_login().unwrap();
    assert_eq!(mutations.begin_login(), Err(ApiError::Busy));
}

#[test]
fn new_login_attempt_clears_previous_error() {
    let mut mutations = AdminMutationState::default();
    mutations.reject_login(&ApiError::InvalidInput("Enter your email."));
    mutations.begin_login().unwrap();
    assert_eq!(mutations.login_error, None);
}

#[test]
fn logout_is_idempotent_and_tolerates_errors() {
    let mut mutations = AdminMutationState::default();
    assert!(mutations.begin_logout());
    assert!(!mutations.begin_logout());
    assert!(!mutations.finish_logout(&Err(ApiError::Status(401))));
    assert!(!mutations.logging_out);
    assert!(mutations.begin_logout());
}

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_credentials_trims_email() {
    let creds = validate_credentials("  a@b.com ", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
}

#[test]
fn validate_credentials_rejects_missing_fields() {
    assert_eq!(
        validate_credentials("   ", "pw"),
        Err(ApiError::InvalidInput("Enter your email."))
    );
    assert_eq!(
        validate_credentials("not-an-email", "pw"),
        Err(ApiError::InvalidInput("Enter a valid email address."))
    );
    assert_eq!(
        validate_credentials("a@b.com", ""),
        Err(ApiError::InvalidInput("Enter your password."))
    );
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("a@b.com", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}
