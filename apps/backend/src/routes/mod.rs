use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod players;

/// Register every route plus the extractor error mapping they rely on.
///
/// The caller still owns `App::default_service`; point it at [`not_found`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    // A non-numeric id can never name a row.
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| {
        AppError::not_found(ErrorCode::NotFound, format!("{} ({err})", req.path())).into()
    }));

    cfg.configure(health::configure_routes);
    cfg.configure(players::configure_routes);
    cfg.configure(games::configure_routes);
}

/// Fallback for paths no route matches.
pub async fn not_found(req: HttpRequest) -> Result<&'static str, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> Result<&'static str, AppError> {
    Err(AppError::method_not_allowed())
}
