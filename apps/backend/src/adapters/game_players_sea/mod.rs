//! SeaORM adapter for the score ledger (game_players rows).

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::entities::game_players;

pub mod dto;

pub use dto::{GamePlayerCreate, ScoreDelta};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Insert a new association row with a zero score.
///
/// Duplicate pairs are rejected by `ux_game_players_player_game`.
pub async fn create_game_player(
    txn: &DatabaseTransaction,
    dto: GamePlayerCreate,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let row = game_players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        score: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };

    row.insert(txn).await
}

pub async fn find_by_game_and_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .filter(game_players::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

/// Apply `score = score + delta` in the database engine, then refetch.
///
/// The increment is a single UPDATE so concurrent deltas on the same row
/// serialize on the row lock instead of racing in application code. The
/// refetch runs in the same transaction and therefore sees this write.
///
/// Rows whose new score would leave the i64 range are not matched.
///
/// Returns `Ok(None)` when no row matches; nothing is inserted in that case.
pub async fn apply_score_delta(
    txn: &DatabaseTransaction,
    dto: ScoreDelta,
) -> Result<Option<game_players::Model>, sea_orm::DbErr> {
    let in_range = if dto.delta >= 0 {
        game_players::Column::Score.lte(i64::MAX - dto.delta)
    } else {
        game_players::Column::Score.gte(i64::MIN - dto.delta)
    };

    let result = game_players::Entity::update_many()
        .col_expr(
            game_players::Column::Score,
            Expr::col(game_players::Column::Score).add(dto.delta),
        )
        .col_expr(
            game_players::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(game_players::Column::GameId.eq(dto.game_id))
        .filter(game_players::Column::PlayerId.eq(dto.player_id))
        .filter(in_range)
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    find_by_game_and_player(txn, dto.game_id, dto.player_id).await
}

/// All rows for a game, in storage order (no ORDER BY).
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .all(conn)
        .await
}
