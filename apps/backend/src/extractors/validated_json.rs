use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::trace_ctx;

/// JSON body extractor whose failures all surface as `400 invalid_json`.
///
/// Unlike `web::Json` it ignores the `Content-Type` header: clients of this
/// API routinely post JSON without one.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let path = req.path().to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        path = %path,
                        error = %e,
                        "Failed to read request body"
                    );
                    AppError::invalid_json("Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let detail = describe_json_error(&e);
                debug!(
                    trace_id = %trace_id,
                    path = %path,
                    body_size = body.len(),
                    detail = %detail,
                    "Rejected request body"
                );
                AppError::invalid_json(detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Sanitized description of a JSON failure; never echoes the body.
fn describe_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("malformed JSON at line {}", error.line()),
        Category::Eof => "body ended before the JSON value was complete".to_string(),
        Category::Data => "missing field or wrong type".to_string(),
        Category::Io => "I/O error while reading body".to_string(),
    }
}
