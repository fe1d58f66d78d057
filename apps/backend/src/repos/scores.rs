//! Score ledger repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::game_players_sea as ledger_adapter;
use crate::entities::game_players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A player's running score in one game
#[derive(Debug, Clone, PartialEq)]
pub struct GamePlayerScore {
    pub id: i64,
    pub game_id: i64,
    pub player_id: i64,
    pub score: i64,
}

/// Insert the (game, player) row with a zero score.
pub async fn attach(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
) -> Result<GamePlayerScore, DomainError> {
    let dto = ledger_adapter::GamePlayerCreate { game_id, player_id };
    let row = ledger_adapter::create_game_player(txn, dto).await?;
    Ok(GamePlayerScore::from(row))
}

/// Add `delta` to the stored score and return the updated row.
pub async fn apply_delta(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
    delta: i64,
) -> Result<GamePlayerScore, DomainError> {
    let dto = ledger_adapter::ScoreDelta {
        game_id,
        player_id,
        delta,
    };
    if let Some(row) = ledger_adapter::apply_score_delta(txn, dto).await? {
        return Ok(GamePlayerScore::from(row));
    }

    // Nothing matched: either the pair is not attached or the total would overflow.
    match ledger_adapter::find_by_game_and_player(txn, game_id, player_id).await? {
        Some(_) => Err(DomainError::validation("score out of range")),
        None => Err(DomainError::not_found(
            NotFoundKind::GamePlayer,
            format!("Player {player_id} is not attached to game {game_id}"),
        )),
    }
}

/// All scores recorded for a game, in storage order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<GamePlayerScore>, DomainError> {
    let rows = ledger_adapter::find_all_by_game(conn, game_id).await?;
    Ok(rows.into_iter().map(GamePlayerScore::from).collect())
}

impl From<game_players::Model> for GamePlayerScore {
    fn from(model: game_players::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            player_id: model.player_id,
            score: model.score,
        }
    }
}
