#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;


// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    canastra_test_support::logging::init();
}

/// Assert status, presence of `x-trace-id`, and return the JSON body.
pub async fn read_json(resp: ServiceResponse<BoxBody>, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    assert!(
        resp.headers().get("x-trace-id").is_some(),
        "x-trace-id header should be present"
    );

    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "body should be JSON, got: {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Read a success envelope and check its message.
pub async fn read_success(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) -> Value {
    let json = read_json(resp, expected_status).await;
    assert_eq!(json["success"], true, "body: {json}");
    assert_eq!(json["message"], expected_message, "body: {json}");
    json
}
