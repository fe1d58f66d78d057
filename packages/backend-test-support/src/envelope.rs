//! Response envelope test helpers
//!
//! Every response of the score service carries `{message, success}` plus
//! operation-specific fields. These helpers assert that contract without
//! depending on backend types.

use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend envelope
#[derive(Debug, Deserialize)]
pub struct EnvelopeLike {
    pub message: String,
    pub success: bool,
}

/// Assert that response parts conform to the failure envelope contract
///
/// Validates:
/// - HTTP status matches expected
/// - x-trace-id header is present
/// - body is `{message, success: false}` with the expected message
pub fn assert_failure_envelope_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_message: &str,
    expected_status: StatusCode,
) {
    assert_eq!(status, expected_status);

    assert!(
        headers.get("x-trace-id").is_some(),
        "x-trace-id header should be present"
    );

    let envelope: EnvelopeLike = serde_json::from_slice(body_bytes)
        .expect("Response body should be a valid {message, success} envelope");

    assert!(!envelope.success, "failure envelope must have success=false");
    assert_eq!(envelope.message, expected_message);
}

/// Assert that a ServiceResponse is a failure envelope
pub async fn assert_failure_envelope_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_message: &str,
    expected_status: StatusCode,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_failure_envelope_from_parts(status, &headers, &body, expected_message, expected_status);
}
