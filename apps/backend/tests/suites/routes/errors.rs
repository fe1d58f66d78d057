use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use canastra::error::AppError;
use canastra::errors::ErrorCode;
use canastra_test_support::envelope::assert_failure_envelope_from_service_response;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn wrong_method_on_known_route_is_405() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    for req in [
        test::TestRequest::get().uri("/players/add"),
        test::TestRequest::post().uri("/games/update-score"),
        test::TestRequest::delete().uri("/games/1"),
        test::TestRequest::put().uri("/games"),
        test::TestRequest::get().uri("/games/new"),
    ] {
        assert_failure_envelope_from_service_response(
            test::call_service(&app, req.to_request()).await,
            "method_not_allowed",
            StatusCode::METHOD_NOT_ALLOWED,
        )
        .await;
    }
}

#[actix_web::test]
async fn malformed_bodies_are_invalid_json() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let cases = [
        ("/players/add", "{not json"),
        ("/games/new", r#"{"score_ceiling": "lots"}"#),
        ("/games/players/add", r#"{"player_id": 1}"#),
        ("/games/new", ""),
    ];
    for (uri, body) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_payload(body)
            .to_request();
        assert_failure_envelope_from_service_response(
            test::call_service(&app, req).await,
            "invalid_json",
            StatusCode::BAD_REQUEST,
        )
        .await;
    }

    let req = test::TestRequest::put()
        .uri("/games/update-score")
        .set_payload(r#"{"game_id": 1, "player_id": 1}"#)
        .to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "invalid_json",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[actix_web::test]
async fn unknown_path_is_not_found() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/tournaments").to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "not_found",
        StatusCode::NOT_FOUND,
    )
    .await;
}

async fn fail_with(err: AppError) -> Result<HttpResponse, AppError> {
    Err(err)
}

#[actix_web::test]
async fn internal_failures_hide_their_detail() {
    let app = create_test_app(canastra::AppState::without_db())
        .with_routes(|cfg| {
            cfg.route(
                "/db",
                web::get().to(|| {
                    fail_with(AppError::db(ErrorCode::DbError, "disk full at /var/lib"))
                }),
            )
            .route(
                "/internal",
                web::get().to(|| fail_with(AppError::internal("secret stack trace"))),
            );
        })
        .build()
        .await;

    for uri in ["/db", "/internal"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_failure_envelope_from_service_response(
            resp,
            "internal_server_error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .await;
    }
}

#[actix_web::test]
async fn store_outage_surfaces_as_500() {
    let app = create_test_app(canastra::AppState::without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/players/1").to_request();
    assert_failure_envelope_from_service_response(
        test::call_service(&app, req).await,
        "internal_server_error",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() {
    let app = create_test_app(build_test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let a = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let b = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    let a = a.headers().get("x-trace-id").cloned().unwrap();
    let b = b.headers().get("x-trace-id").cloned().unwrap();
    assert_ne!(a, b);
}
