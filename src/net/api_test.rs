use super::*;

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    assert_eq!(
        error_message(400, r#"{"message":"m1","error":"m2"}"#),
        "m1"
    );
    assert_eq!(error_message(400, r#"{"error":"m2"}"#), "m2");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, "not json"), "request failed with status 500");
    assert_eq!(error_message(502, ""), "request failed with status 502");
    assert_eq!(
        error_message(400, r#"{"detail":"ignored"}"#),
        "request failed with status 400"
    );
}

// =============================================================
// url
// =============================================================

#[test]
fn url_joins_under_api_base() {
    assert_eq!(url("/auth/login"), "/api/auth/login");
    assert_eq!(url("/documents/7/download"), "/api/documents/7/download");
}

// =============================================================
// bearer: token freshness
// =============================================================

#[test]
fn bearer_absent_without_token() {
    token_store::clear();
    assert_eq!(bearer(), None);
}

#[test]
fn bearer_reflects_latest_stored_token() {
    token_store::write("first", "refresh");
    assert_eq!(bearer().as_deref(), Some("Bearer first"));

    // A later login swaps the token; the next request must use the new one.
    token_store::write("second", "refresh");
    assert_eq!(bearer().as_deref(), Some("Bearer second"));

    token_store::clear();
    assert_eq!(bearer(), None);
}
