use canastra::adapters::players_sea::{self, PlayerCreate};
use sea_orm::TransactionTrait;

use crate::support::build_test_state;
use crate::support::test_state::db;

#[tokio::test]
async fn create_then_find_round_trips() {
    let state = build_test_state().await;
    let txn = db(&state).begin().await.unwrap();

    let created = players_sea::create_player(&txn, PlayerCreate::new("Alice"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Alice");

    let found = players_sea::find_by_id(&txn, created.id).await.unwrap();
    assert_eq!(found, Some(created));

    txn.rollback().await.unwrap();
}

#[tokio::test]
async fn duplicate_names_get_distinct_ids() {
    let state = build_test_state().await;
    let txn = db(&state).begin().await.unwrap();

    let a = players_sea::create_player(&txn, PlayerCreate::new("Same"))
        .await
        .unwrap();
    let b = players_sea::create_player(&txn, PlayerCreate::new("Same"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
    txn.rollback().await.unwrap();
}

#[tokio::test]
async fn name_is_stored_verbatim() {
    let state = build_test_state().await;
    let txn = db(&state).begin().await.unwrap();

    let created = players_sea::create_player(&txn, PlayerCreate::new("  Zé Canastra  "))
        .await
        .unwrap();
    let found = players_sea::find_by_id(&txn, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "  Zé Canastra  ");

    txn.rollback().await.unwrap();
}

#[tokio::test]
async fn unknown_id_is_none() {
    let state = build_test_state().await;
    let found = players_sea::find_by_id(db(&state), 9_999).await.unwrap();
    assert!(found.is_none());
}
