//! Tests for the error payload formatting and trace propagation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn new_substitutes_placeholder_for_blank_messages(#[case] message: &str) {
    let error = Error::new(ErrorCode::InternalError, message);
    assert_eq!(error.message(), FALLBACK_MESSAGE);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[tokio::test]
async fn serialises_message_under_error_key() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
    let value = serde_json::to_value(error).expect("serialise");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "error": "bad",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn omits_trace_id_when_absent(base_error: Error) {
    let value = serde_json::to_value(base_error).expect("serialise");
    assert!(value.get("traceId").is_none());
    assert_eq!(value.get("error").and_then(Value::as_str), Some("bad"));
}

#[rstest]
fn deserialises_payload() {
    let error: Error = serde_json::from_value(json!({
        "code": "service_unavailable",
        "error": "store offline",
    }))
    .expect("deserialise");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(error.message(), "store offline");
}
