use canastra::db::txn::with_txn;
use canastra::error::AppError;
use canastra::errors::ErrorCode;
use canastra::repos::players;
use canastra::AppState;

use crate::support::build_test_state;
use crate::support::test_state::db;

#[tokio::test]
async fn ok_commits() {
    let state = build_test_state().await;

    let id = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let player = players::create_player(txn, "Alice")
                .await
                .map_err(AppError::from)?;
            Ok::<_, AppError>(player.id)
        })
    })
    .await
    .expect("with_txn should succeed");

    let found = players::find_by_id(db(&state), id).await.unwrap();
    assert_eq!(found.map(|p| p.name), Some("Alice".to_string()));
}

#[tokio::test]
async fn err_rolls_back_and_preserves_error() {
    let state = build_test_state().await;

    let result: Result<i64, AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let player = players::create_player(txn, "Ghost")
                .await
                .map_err(AppError::from)?;
            assert_eq!(player.id, 1);
            Err(AppError::invalid(ErrorCode::ValidationError, "abort"))
        })
    })
    .await;

    match result {
        Err(AppError::Validation { detail, .. }) => assert_eq!(detail, "abort"),
        other => panic!("expected the closure's error, got {other:?}"),
    }
    assert!(players::find_by_id(db(&state), 1).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_store_is_db_unavailable() {
    let state = AppState::without_db();

    let result: Result<(), AppError> =
        with_txn(None, &state, |_txn| Box::pin(async move { Ok(()) })).await;

    assert!(matches!(result, Err(AppError::DbUnavailable)));
}
