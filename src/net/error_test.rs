use super::*;

#[test]
fn from_status_reads_message_field_from_error_body() {
    let err = ApiError::from_status(500, r#"{"message":"model overloaded","code":"LLM_BUSY"}"#);
    assert_eq!(err.to_string(), "server returned 500: model overloaded");
}

#[test]
fn from_status_falls_back_when_body_is_not_json() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "server returned 502: HTTP 502");
}

#[test]
fn from_status_falls_back_when_message_is_missing_or_not_a_string() {
    let err = ApiError::from_status(403, r#"{"error":"forbidden"}"#);
    assert_eq!(err.to_string(), "server returned 403: HTTP 403");

    let err = ApiError::from_status(403, r#"{"message":17}"#);
    assert_eq!(err.to_string(), "server returned 403: HTTP 403");
}

#[test]
fn transport_display_carries_the_cause() {
    let err = ApiError::Transport("timed out after 120s".to_owned());
    assert_eq!(err.to_string(), "request failed: timed out after 120s");
}
