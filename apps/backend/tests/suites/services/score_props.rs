use canastra::services::ScoreLedgerService;
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;
use crate::support::build_test_state;
use crate::support::factory::{apply_delta, game_with_players};
use crate::support::test_state::db;

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Property: the stored score is the sum of every applied delta
    #[test]
    fn prop_final_score_is_sum_of_deltas(
        deltas in prop::collection::vec(-10_000i64..10_000, 0..25),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (last, listed) = rt.block_on(async {
            let state = build_test_state().await;
            let conn = db(&state);
            let (game, players) = game_with_players(conn, 2).await;

            let mut last = 0;
            for &delta in &deltas {
                last = apply_delta(conn, game.id, players[0].id, delta).await;
            }

            let listed = ScoreLedgerService::new()
                .list_scores(conn, game.id)
                .await
                .unwrap();
            (last, listed)
        });

        let expected: i64 = deltas.iter().sum();
        if !deltas.is_empty() {
            prop_assert_eq!(last, expected);
        }
        prop_assert_eq!(listed.len(), 2);
        let total: i64 = listed.iter().map(|e| e.score).sum();
        prop_assert_eq!(total, expected);
    }
}
