//! DTOs for game_players_sea adapter.

/// DTO for attaching a player to a game.
#[derive(Debug, Clone, Copy)]
pub struct GamePlayerCreate {
    pub game_id: i64,
    pub player_id: i64,
}

/// DTO for an additive score change on one (game, player) row.
#[derive(Debug, Clone, Copy)]
pub struct ScoreDelta {
    pub game_id: i64,
    pub player_id: i64,
    pub delta: i64,
}
