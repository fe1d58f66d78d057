//! Score ledger service: attaching players to games and moving their scores.

use sea_orm::{ConnectionTrait, DatabaseTransaction, TransactionTrait};
use tracing::{debug, info};

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::scores::{self, GamePlayerScore};
use crate::repos::{games, players};

/// One row of a game's score listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub game_id: i64,
    pub player_id: i64,
    pub score: i64,
}

impl From<GamePlayerScore> for ScoreEntry {
    fn from(row: GamePlayerScore) -> Self {
        Self {
            game_id: row.game_id,
            player_id: row.player_id,
            score: row.score,
        }
    }
}

/// Score ledger domain service.
pub struct ScoreLedgerService;

impl ScoreLedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Attach a player to a game with a zero score and return the new row.
    ///
    /// The insert runs first, inside a savepoint, so the transaction takes the
    /// write lock before it reads anything; a racing duplicate then waits and
    /// fails on `ux_game_players_player_game` as `Conflict(AlreadyAttached)`.
    /// A foreign-key failure is resolved afterwards into `NotFound(Game)` or
    /// `NotFound(Player)`.
    pub async fn attach_player(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player_id: i64,
    ) -> Result<GamePlayerScore, DomainError> {
        let savepoint = txn.begin().await?;

        match scores::attach(&savepoint, game_id, player_id).await {
            Ok(row) => {
                savepoint.commit().await?;
                info!(
                    game_id,
                    player_id,
                    game_player_id = row.id,
                    "Player attached to game"
                );
                Ok(row)
            }
            Err(DomainError::NotFound(NotFoundKind::Reference, detail)) => {
                savepoint.rollback().await?;
                games::require_game(txn, game_id).await?;
                players::require_player(txn, player_id).await?;
                Err(DomainError::not_found(NotFoundKind::Reference, detail))
            }
            Err(err) => {
                // Postgres leaves the transaction aborted until the savepoint goes.
                let _ = savepoint.rollback().await;
                Err(err)
            }
        }
    }

    /// Add `delta` to the player's score in the game and return the new total.
    pub async fn apply_delta(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player_id: i64,
        delta: i64,
    ) -> Result<i64, DomainError> {
        let row = scores::apply_delta(txn, game_id, player_id, delta).await?;
        debug!(game_id, player_id, delta, new_score = row.score, "Score updated");
        Ok(row.score)
    }

    /// Scores of every player attached to the game. Unknown games list empty.
    pub async fn list_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<ScoreEntry>, DomainError> {
        let rows = scores::find_all_by_game(conn, game_id).await?;
        Ok(rows.into_iter().map(ScoreEntry::from).collect())
    }
}

impl Default for ScoreLedgerService {
    fn default() -> Self {
        Self::new()
    }
}
