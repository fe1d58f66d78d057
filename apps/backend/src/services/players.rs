//! Player directory service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::players::{self, Player};

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Register a new player. Blank names are rejected; duplicates are allowed.
    ///
    /// The name is stored exactly as given, surrounding whitespace included.
    pub async fn register(
        &self,
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<Player, DomainError> {
        validate_name(name)?;

        let player = players::create_player(txn, name).await?;
        info!(player_id = player.id, "Player registered");
        Ok(player)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, DomainError> {
        players::require_player(conn, player_id).await
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name can't be blank"));
    }
    Ok(())
}
