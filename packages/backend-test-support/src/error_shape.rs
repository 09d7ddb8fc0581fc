//! Error body test helpers for backend testing
//!
//! Asserts the backend's error contract without depending on backend types:
//! `{"error" | "message": detail, "code": CODE, "trace_id": id}` plus an
//! `x-trace-id` header equal to the body's trace_id.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    code: String,
    trace_id: String,
}

/// Which body key is expected to carry the detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKey {
    /// Failures: `{"error": ...}`
    Error,
    /// Empty collections: `{"message": ...}`
    Message,
}

/// Assert that response parts conform to the error contract
///
/// Validates:
/// - HTTP status matches expected
/// - x-trace-id header exists and matches body trace_id
/// - code matches and the detail sits under the expected key
pub fn assert_error_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail: Option<(&str, DetailKey)>,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("Response body should be a JSON error body");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);

    if let Some((expected, key)) = expected_detail {
        let (present, absent) = match key {
            DetailKey::Error => (&body.error, &body.message),
            DetailKey::Message => (&body.message, &body.error),
        };
        assert_eq!(present.as_deref(), Some(expected), "detail under {key:?}");
        assert!(absent.is_none(), "only one detail key expected");
    }
}

/// Assert that a ServiceResponse conforms to the error contract
pub async fn assert_error_from_service_response<B>(
    resp: actix_web::dev::ServiceResponse<B>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail: Option<(&str, DetailKey)>,
) where
    B: actix_web::body::MessageBody,
{
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail,
    );
}
