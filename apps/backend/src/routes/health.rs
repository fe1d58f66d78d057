use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::http::envelope::{Envelope, MSG_ALL_GOOD};
use crate::state::app_state::AppState;

/// Liveness probe; answers every method.
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(Envelope::ok(MSG_ALL_GOOD))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    migration: Option<String>,
}

/// Readiness probe: store reachable and schema version.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let probe = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1".to_string(),
        ))
        .await;

    let body = match probe {
        Ok(_) => HealthResponse {
            status: "ok",
            app_version: env!("CARGO_PKG_VERSION"),
            db: "ok",
            migration: get_latest_migration_version(db).await.ok().flatten(),
        },
        Err(e) => {
            warn!(error = %e, "health probe failed");
            HealthResponse {
                status: "degraded",
                app_version: env!("CARGO_PKG_VERSION"),
                db: "unreachable",
                migration: None,
            }
        }
    };

    let status = if body.db == "ok" {
        actix_web::http::StatusCode::OK
    } else {
        actix_web::http::StatusCode::SERVICE_UNAVAILABLE
    };
    Ok(HttpResponse::build(status).json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(root)))
        .service(
            web::resource("/health")
                .route(web::get().to(health))
                .default_service(web::route().to(super::method_not_allowed)),
        );
}
