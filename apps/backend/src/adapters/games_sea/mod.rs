//! SeaORM adapter for game sessions - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, Set};

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_game(
    txn: &DatabaseTransaction,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        score_ceiling: Set(dto.score_ceiling),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    game_active.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}
