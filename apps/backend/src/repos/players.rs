//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_player(txn: &DatabaseTransaction, name: &str) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate::new(name);
    let player = players_adapter::create_player(txn, dto).await?;
    Ok(Player::from(player))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

/// Find a player or fail with `NotFound(Player)`.
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
