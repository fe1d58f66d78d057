//! SeaORM adapter for the player directory - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, Set};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_player(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    player_active.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}
