use canastra::errors::domain::NotFoundKind;
use canastra::services::GameService;
use canastra::DomainError;
use sea_orm::TransactionTrait;

use crate::support::build_test_state;
use crate::support::test_state::db;

#[tokio::test]
async fn create_then_get_round_trips_ceiling() {
    let state = build_test_state().await;
    let service = GameService::new();

    let txn = db(&state).begin().await.unwrap();
    let game = service.create(&txn, 3000).await.unwrap();
    txn.commit().await.unwrap();

    let found = service.get(db(&state), game.id).await.unwrap();
    assert_eq!(found.score_ceiling, 3000);
}

#[tokio::test]
async fn non_positive_ceiling_is_accepted() {
    let state = build_test_state().await;
    let service = GameService::new();
    let txn = db(&state).begin().await.unwrap();

    let zero = service.create(&txn, 0).await.unwrap();
    let negative = service.create(&txn, -10).await.unwrap();

    assert_eq!(zero.score_ceiling, 0);
    assert_eq!(negative.score_ceiling, -10);
    txn.rollback().await.unwrap();
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let state = build_test_state().await;
    let err = GameService::new().get(db(&state), 31).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}
