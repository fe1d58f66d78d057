//! Per-request trace id.
//!
//! Generates a UUID v4 for every request, stores it in the request
//! extensions as [`TraceId`], installs it as the task-local trace id for the
//! downstream future (inside a `request` span) and echoes it back in the
//! `x-trace-id` response header.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Trace id of the request, available from `req.extensions()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        let fut = self.service.call(req);

        Box::pin(
            trace_ctx::with_trace_id(trace_id.clone(), async move {
                let mut res = fut.await?;

                if let Ok(value) = HeaderValue::from_str(&trace_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }

                Ok(res)
            })
            .instrument(span),
        )
    }
}
