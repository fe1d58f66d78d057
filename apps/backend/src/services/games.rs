//! Game session service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{info, warn};

use crate::errors::domain::DomainError;
use crate::repos::games::{self, Game};

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game with the given score ceiling.
    ///
    /// Non-positive ceilings are stored as-is; they only produce a warning.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        score_ceiling: i64,
    ) -> Result<Game, DomainError> {
        if score_ceiling <= 0 {
            warn!(score_ceiling, "Creating game with non-positive score ceiling");
        }

        let game = games::create_game(txn, score_ceiling).await?;
        info!(game_id = game.id, score_ceiling, "Game created");
        Ok(game)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Game, DomainError> {
        games::require_game(conn, game_id).await
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
