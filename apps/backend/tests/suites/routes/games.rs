use actix_web::http::StatusCode;
use actix_web::test;
use canastra_test_support::envelope::assert_failure_envelope_from_service_response;
use serde_json::json;

use crate::common::{read_json, read_success};
use crate::support::factory::{attach, create_game, create_unique_player};
use crate::support::test_state::db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn create_and_get_game() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/games/new")
        .set_json(json!({"score_ceiling": 3000}))
        .to_request();
    let json = read_success(
        test::call_service(&app, req).await,
        StatusCode::CREATED,
        "game_created",
    )
    .await;
    let id = json["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri(&format!("/games/{id}")).to_request();
    let json = read_success(
        test::call_service(&app, req).await,
        StatusCode::OK,
        "game_found",
    )
    .await;
    assert_eq!(json["id"], id);
    assert_eq!(json["score_ceiling"], 3000);
}

#[actix_web::test]
async fn legacy_ceiling_names_are_not_accepted() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    for body in [json!({"max_points": 3000}), json!({"maximum_score": 3000})] {
        let req = test::TestRequest::post()
            .uri("/games/new")
            .set_json(body)
            .to_request();
        assert_failure_envelope_from_service_response(
            test::call_service(&app, req).await,
            "invalid_json",
            StatusCode::BAD_REQUEST,
        )
        .await;
    }
}

#[actix_web::test]
async fn attach_player_and_conflict_on_repeat() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let body = json!({"player_id": player.id, "game_id": game.id});

    let req = test::TestRequest::post()
        .uri("/games/players/add")
        .set_json(&body)
        .to_request();
    let json = read_success(
        test::call_service(&app, req).await,
        StatusCode::CREATED,
        "game_player_created",
    )
    .await;
    assert!(json["id"].as_i64().unwrap() > 0);

    let req = test::TestRequest::post()
        .uri("/games/players/add")
        .set_json(&body)
        .to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "conflict",
        StatusCode::CONFLICT,
    )
    .await;
}

#[actix_web::test]
async fn attach_unknown_references_is_not_found() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/games/players/add")
        .set_json(json!({"player_id": 404, "game_id": game.id}))
        .to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "not_found",
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[actix_web::test]
async fn update_score_returns_new_total() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    attach(db(&state), game.id, player.id).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for (delta, expected) in [(120, 120), (-20, 100)] {
        let req = test::TestRequest::put()
            .uri("/games/update-score")
            .set_json(json!({"game_id": game.id, "player_id": player.id, "score": delta}))
            .to_request();
        let json = read_success(
            test::call_service(&app, req).await,
            StatusCode::OK,
            "game_updated",
        )
        .await;
        assert_eq!(json["new_score"], expected);
    }
}

#[actix_web::test]
async fn update_score_for_unattached_player_is_not_found() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri("/games/update-score")
        .set_json(json!({"game_id": game.id, "player_id": player.id, "score": 5}))
        .to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "not_found",
        StatusCode::NOT_FOUND,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/games?game_id={}", game.id))
        .to_request();
    let json = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(json["data"], json!([]));
}

#[actix_web::test]
async fn list_scores_shapes() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    attach(db(&state), game.id, player.id).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/games?game_id={}", game.id))
        .to_request();
    let json = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(
        json,
        json!({"data": [{"game_id": game.id, "player_id": player.id, "score": 0}]})
    );

    for uri in ["/games?game_id=9999", "/games"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let json = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
        assert_eq!(json, json!({"data": []}), "uri {uri}");
    }
}

#[actix_web::test]
async fn list_scores_with_non_integer_game_id_is_empty() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    attach(db(&state), game.id, player.id).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in ["/games?game_id=abc", "/games?game_id=", "/games?game_id=1.5"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let json = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
        assert_eq!(json, json!({"data": []}), "uri {uri}");
    }
}

#[actix_web::test]
async fn update_score_overflow_is_validation_error() {
    let state = build_test_state().await;
    let game = create_game(db(&state), 3000).await;
    let player = create_unique_player(db(&state)).await;
    attach(db(&state), game.id, player.id).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let update = |delta: i64| {
        test::TestRequest::put()
            .uri("/games/update-score")
            .set_json(json!({"game_id": game.id, "player_id": player.id, "score": delta}))
            .to_request()
    };

    let json = read_success(

        test::call_service(&app, update(i64::MAX)).await,

        StatusCode::OK,

        "game_updated",

    )

    .await;
    assert_eq!(json["new_score"], i64::MAX);

    assert_failure_envelope_from_service_response(
        test::call_service(&app, update(1)).await,
        "validation_error: score out of range",
        StatusCode::BAD_REQUEST,
    )
    .await;
}
