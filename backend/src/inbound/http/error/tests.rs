//! Tests for HTTP error mapping.

use super::*;
use crate::middleware::trace::TraceId;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn body_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON")
}

#[actix_web::test]
async fn error_response_carries_envelope_and_trace_header() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async {
        Error::service_unavailable("user repository unavailable: refused")
    })
    .await;
    let response = ResponseError::error_response(&error);

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert_eq!(header, TRACE_ID);
    assert_eq!(
        body_of(response).await,
        json!({
            "code": "service_unavailable",
            "error": "user repository unavailable: refused",
            "traceId": TRACE_ID,
        })
    );
}

#[actix_web::test]
async fn error_response_without_trace_id_omits_header() {
    let response = ResponseError::error_response(&Error::invalid_request("description is required"));

    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let body = body_of(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("description is required")
    );
    assert!(body.get("traceId").is_none());
}
