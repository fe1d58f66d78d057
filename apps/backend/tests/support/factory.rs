//! Committed fixtures built through the services.

use canastra::repos::games::Game;
use canastra::repos::players::Player;
use canastra::repos::scores::GamePlayerScore;
use canastra::services::{GameService, PlayerService, ScoreLedgerService};
use canastra_test_support::unique_helpers::unique_player_name;
use sea_orm::{DatabaseConnection, TransactionTrait};

pub async fn create_player(db: &DatabaseConnection, name: &str) -> Player {
    let txn = db.begin().await.expect("begin");
    let player = PlayerService::new()
        .register(&txn, name)
        .await
        .expect("register player");
    txn.commit().await.expect("commit");
    player
}

pub async fn create_unique_player(db: &DatabaseConnection) -> Player {
    create_player(db, &unique_player_name("player")).await
}

pub async fn create_game(db: &DatabaseConnection, score_ceiling: i64) -> Game {
    let txn = db.begin().await.expect("begin");
    let game = GameService::new()
        .create(&txn, score_ceiling)
        .await
        .expect("create game");
    txn.commit().await.expect("commit");
    game
}

pub async fn attach(db: &DatabaseConnection, game_id: i64, player_id: i64) -> GamePlayerScore {
    let txn = db.begin().await.expect("begin");
    let row = ScoreLedgerService::new()
        .attach_player(&txn, game_id, player_id)
        .await
        .expect("attach player");
    txn.commit().await.expect("commit");
    row
}

pub async fn apply_delta(db: &DatabaseConnection, game_id: i64, player_id: i64, delta: i64) -> i64 {
    let txn = db.begin().await.expect("begin");
    let score = ScoreLedgerService::new()
        .apply_delta(&txn, game_id, player_id, delta)
        .await
        .expect("apply delta");
    txn.commit().await.expect("commit");
    score
}

/// A game with `n` freshly registered players attached.
pub async fn game_with_players(db: &DatabaseConnection, n: usize) -> (Game, Vec<Player>) {
    let game = create_game(db, 3000).await;
    let mut players = Vec::with_capacity(n);
    for _ in 0..n {
        let player = create_unique_player(db).await;
        attach(db, game.id, player.id).await;
        players.push(player);
    }
    (game, players)
}
