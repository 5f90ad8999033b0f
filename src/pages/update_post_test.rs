use super::*;

#[test]
fn numeric_route_params_parse() {
    assert_eq!(parse_post_id(Some("42")), Some(42));
    assert_eq!(parse_post_id(Some(" 7 ")), Some(7));
}

#[test]
fn missing_or_malformed_params_do_not_parse() {
    assert_eq!(parse_post_id(None), None);
    assert_eq!(parse_post_id(Some("")), None);
    assert_eq!(parse_post_id(Some("abc")), None);
    assert_eq!(parse_post_id(Some("4.2")), None);
}

#[test]
fn redirect_delay_matches_the_notice_copy() {
    assert_eq!(ACCESS_DENIED_REDIRECT_MS, 3000);
}
