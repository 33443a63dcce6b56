use super::*;

// =============================================================
// looks_like_email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(looks_like_email("ada@example.com"));
    assert!(looks_like_email("first.last+jobs@mail.example.co"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!looks_like_email("ada"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("ada@example"));
    assert!(!looks_like_email("ada@.com"));
    assert!(!looks_like_email("ada@example."));
    assert!(!looks_like_email("a da@example.com"));
    assert!(!looks_like_email("ada@@example.com"));
}

// =============================================================
// looks_like_http_url
// =============================================================

#[test]
fn url_accepts_http_and_https() {
    assert!(looks_like_http_url("https://acme.test"));
    assert!(looks_like_http_url("http://acme.test/careers?x=1"));
}

#[test]
fn url_rejects_missing_scheme_or_host() {
    assert!(!looks_like_http_url("acme.test"));
    assert!(!looks_like_http_url("ftp://acme.test"));
    assert!(!looks_like_http_url("https://"));
    assert!(!looks_like_http_url("https:///path"));
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn first_error_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.add("email", "first");
    errors.add("email", "second");
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn required_trims_whitespace() {
    let mut errors = FieldErrors::new();
    errors.required("name", "   ", "Name is required.");
    assert_eq!(errors.get("name"), Some("Name is required."));
}

#[test]
fn email_rule_distinguishes_missing_from_invalid() {
    let mut errors = FieldErrors::new();
    errors.email("a", "");
    errors.email("b", "nope");
    assert_eq!(errors.get("a"), Some("Email is required."));
    assert_eq!(errors.get("b"), Some("Enter a valid email address."));
}

#[test]
fn min_len_counts_chars() {
    let mut errors = FieldErrors::new();
    errors.min_len("password", "ééééééé", MIN_PASSWORD_LEN, "too short");
    assert_eq!(errors.get("password"), Some("too short"));

    let mut ok = FieldErrors::new();
    ok.min_len("password", "éééééééé", MIN_PASSWORD_LEN, "too short");
    assert!(ok.is_empty());
}

#[test]
fn finish_returns_value_only_when_clean() {
    assert_eq!(FieldErrors::new().finish(|| 7), Ok(7));

    let mut errors = FieldErrors::new();
    errors.add("x", "bad");
    let err = errors.finish(|| 7).unwrap_err();
    assert_eq!(err.fields().collect::<Vec<_>>(), vec!["x"]);
}
