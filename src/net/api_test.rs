use super::*;

// =============================================================
// Error message shaping
// =============================================================

#[test]
fn error_message_uses_server_detail() {
    assert_eq!(
        error_message(r#"{"detail": "Incorrect username or password"}"#),
        "Incorrect username or password"
    );
}

#[test]
fn error_message_generic_for_non_json_bodies() {
    assert_eq!(error_message("<html>502 Bad Gateway</html>"), "API request failed");
    assert_eq!(error_message(""), "API request failed");
}

#[test]
fn error_message_generic_when_detail_is_missing() {
    assert_eq!(error_message(r#"{"error": "nope"}"#), "API request failed");
}

#[test]
fn error_message_generic_when_detail_is_not_a_string() {
    assert_eq!(
        error_message(r#"{"detail": [{"loc": ["body", "email"], "msg": "invalid"}]}"#),
        "API request failed"
    );
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_displays_its_message() {
    let err = ApiError("Incorrect username or password".to_owned());
    assert_eq!(err.to_string(), "Incorrect username or password");
}
