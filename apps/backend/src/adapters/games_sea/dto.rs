//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub score_ceiling: i64,
}

impl GameCreate {
    pub fn new(score_ceiling: i64) -> Self {
        Self { score_ceiling }
    }
}
