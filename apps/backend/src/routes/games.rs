use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::http::envelope::{
    WithEnvelope, MSG_GAME_CREATED, MSG_GAME_FOUND, MSG_GAME_PLAYER_CREATED, MSG_GAME_UPDATED,
};
use crate::services::score_ledger::ScoreEntry;
use crate::services::{GameService, ScoreLedgerService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub score_ceiling: i64,
}

#[derive(Debug, Deserialize)]
pub struct AttachPlayerRequest {
    pub player_id: i64,
    pub game_id: i64,
}

/// `score` is a delta added to the stored total, not the new total.
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    pub game_id: i64,
    pub player_id: i64,
    pub score: i64,
}

/// Kept raw: a missing or non-integer `game_id` lists nothing.
#[derive(Debug, Deserialize)]
pub struct ListScoresQuery {
    pub game_id: Option<String>,
}

impl ListScoresQuery {
    fn game_id(&self) -> Option<i64> {
        self.game_id.as_deref()?.parse().ok()
    }
}

#[derive(Debug, Serialize)]
struct CreatedId {
    id: i64,
}

#[derive(Debug, Serialize)]
struct GameBody {
    id: i64,
    score_ceiling: i64,
}

#[derive(Debug, Serialize)]
struct NewScore {
    new_score: i64,
}

#[derive(Debug, Serialize)]
struct ScoreRow {
    game_id: i64,
    player_id: i64,
    score: i64,
}

impl From<ScoreEntry> for ScoreRow {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            game_id: entry.game_id,
            player_id: entry.player_id,
            score: entry.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreList {
    data: Vec<ScoreRow>,
}

async fn create_game(
    req: HttpRequest,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let score_ceiling = body.score_ceiling;

    let game = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            GameService::new()
                .create(txn, score_ceiling)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(WithEnvelope::ok(
        CreatedId { id: game.id },
        MSG_GAME_CREATED,
    )))
}

async fn get_game(
    req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();

    let game = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            GameService::new()
                .get(txn, game_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(WithEnvelope::ok(
        GameBody {
            id: game.id,
            score_ceiling: game.score_ceiling,
        },
        MSG_GAME_FOUND,
    )))
}

async fn attach_player(
    req: HttpRequest,
    body: ValidatedJson<AttachPlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let AttachPlayerRequest { player_id, game_id } = body.into_inner();

    let row = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            ScoreLedgerService::new()
                .attach_player(txn, game_id, player_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(WithEnvelope::ok(
        CreatedId { id: row.id },
        MSG_GAME_PLAYER_CREATED,
    )))
}

async fn update_score(
    req: HttpRequest,
    body: ValidatedJson<UpdateScoreRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let UpdateScoreRequest {
        game_id,
        player_id,
        score,
    } = body.into_inner();

    let new_score = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            ScoreLedgerService::new()
                .apply_delta(txn, game_id, player_id, score)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(WithEnvelope::ok(
        NewScore { new_score },
        MSG_GAME_UPDATED,
    )))
}

async fn list_scores(
    req: HttpRequest,
    query: web::Query<ListScoresQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entries = match query.game_id() {
        Some(game_id) => {
            with_txn(Some(&req), &app_state, |txn| {
                Box::pin(async move {
                    ScoreLedgerService::new()
                        .list_scores(txn, game_id)
                        .await
                        .map_err(AppError::from)
                })
            })
            .await?
        }
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(ScoreList {
        data: entries.into_iter().map(ScoreRow::from).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Fixed paths first: `/games/{game_id}` would otherwise swallow them.
    cfg.service(
        web::resource("/games/new")
            .route(web::post().to(create_game))
            .default_service(web::route().to(super::method_not_allowed)),
    )
    .service(
        web::resource("/games/update-score")
            .route(web::put().to(update_score))
            .default_service(web::route().to(super::method_not_allowed)),
    )
    .service(
        web::resource("/games/players/add")
            .route(web::post().to(attach_player))
            .default_service(web::route().to(super::method_not_allowed)),
    )
    .service(
        web::resource("/games")
            .route(web::get().to(list_scores))
            .default_service(web::route().to(super::method_not_allowed)),
    )
    .service(
        web::resource("/games/{game_id}")
            .route(web::get().to(get_game))
            .default_service(web::route().to(super::method_not_allowed)),
    );
}
