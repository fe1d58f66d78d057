use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::http::envelope::{WithEnvelope, MSG_PLAYER_FOUND, MSG_USER_CREATED};
use crate::services::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    /// Absent is treated like blank so it gets the validation message.
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
struct CreatedPlayer {
    id: i64,
}

#[derive(Debug, Serialize)]
struct PlayerBody {
    id: i64,
    name: String,
}

async fn add_player(
    req: HttpRequest,
    body: ValidatedJson<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = body.into_inner().name;

    let player = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            PlayerService::new()
                .register(txn, &name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(WithEnvelope::ok(
        CreatedPlayer { id: player.id },
        MSG_USER_CREATED,
    )))
}

async fn get_player(
    req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();

    let player = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            PlayerService::new()
                .get(txn, player_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(WithEnvelope::ok(
        PlayerBody {
            id: player.id,
            name: player.name,
        },
        MSG_PLAYER_FOUND,
    )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players/add")
            .route(web::post().to(add_player))
            .default_service(web::route().to(super::method_not_allowed)),
    )
    .service(
        web::resource("/players/{player_id}")
            .route(web::get().to(get_player))
            .default_service(web::route().to(super::method_not_allowed)),
    );
}
