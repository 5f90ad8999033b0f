use super::*;

#[test]
fn absent_expiry_is_treated_as_live() {
    assert!(!session_is_expired(None, 1_900_000_000));
}

#[test]
fn future_expiry_is_live() {
    assert!(!session_is_expired(Some(1_900_000_001), 1_900_000_000));
}

#[test]
fn past_expiry_is_expired() {
    assert!(session_is_expired(Some(1_899_999_999), 1_900_000_000));
}

#[test]
fn expiry_at_now_is_expired() {
    assert!(session_is_expired(Some(1_900_000_000), 1_900_000_000));
}
