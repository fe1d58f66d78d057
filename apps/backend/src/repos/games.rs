//! Game repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game domain model
///
/// `score_ceiling` is informational: nothing compares it against scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub score_ceiling: i64,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    score_ceiling: i64,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(score_ceiling);
    let game = games_adapter::create_game(txn, dto).await?;
    Ok(Game::from(game))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Find a game or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            score_ceiling: model.score_ceiling,
            created_at: model.created_at,
        }
    }
}
