use super::*;

#[test]
fn unauthenticated_message_is_stable() {
    assert_eq!(Error::Unauthenticated.message(), "User not authenticated");
}

#[test]
fn remote_message_passes_through_verbatim() {
    let err = Error::Remote("duplicate key value violates unique constraint".to_owned());
    assert_eq!(err.message(), "duplicate key value violates unique constraint");
}

#[test]
fn validation_message_passes_through_verbatim() {
    let err = Error::Validation("Passwords do not match.".to_owned());
    assert_eq!(err.message(), "Passwords do not match.");
}

// =============================================================
// is_access_denied
// =============================================================

#[test]
fn access_denied_matches_forbidden_any_case() {
    assert!(is_access_denied("Forbidden"));
    assert!(is_access_denied("row access FORBIDDEN by policy"));
}

#[test]
fn access_denied_matches_unauthorized_any_case() {
    assert!(is_access_denied("Unauthorized"));
    assert!(is_access_denied("401 unauthorized"));
}

#[test]
fn access_denied_ignores_other_messages() {
    assert!(!is_access_denied("network error"));
    assert!(!is_access_denied("JSON object requested, multiple (or no) rows returned"));
    assert!(!is_access_denied(""));
}
