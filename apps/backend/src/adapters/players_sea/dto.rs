//! DTOs for players_sea adapter.

/// DTO for registering a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
}

impl PlayerCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
