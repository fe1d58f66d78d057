//! SeaORM adapters for the entity store.

pub mod game_players_sea;
pub mod games_sea;
pub mod players_sea;
