//! Router-level tests driving requests through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use swiss_tournament::api::create_router;
use swiss_tournament::api::handlers::AppState;
use swiss_tournament::database::create_memory_pool;
use swiss_tournament::services::TournamentService;

fn app() -> Router {
    let service = TournamentService::new(create_memory_pool().unwrap());
    service.reset().unwrap();
    create_router(Arc::new(AppState { service }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn full_round_over_http() {
    let app = app();

    let (status, tournament) = send(&app, "POST", "/api/tournaments", Some(json!({"name": "Open"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let t = tournament["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for name in ["Ann", "Bo", "Cy"] {
        let (status, player) = send(&app, "POST", "/api/players", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(player["id"].as_i64().unwrap());
    }

    let (_, count) = send(&app, "GET", "/api/players/count", None).await;
    assert_eq!(count["count"], 3);

    let (status, body) = send(&app, "GET", &format!("/api/tournaments/{t}/pairings"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["pairings"],
        json!([
            {"player1Id": ids[0], "player1Name": "Ann", "player2Id": null, "player2Name": null},
            {"player1Id": ids[1], "player1Name": "Bo", "player2Id": ids[2], "player2Name": "Cy"}
        ])
    );

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/tournaments/{t}/matches"),
        Some(json!({"player1": ids[1], "player2": ids[2], "winner": ids[2]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, bye) = send(
        &app,
        "POST",
        &format!("/api/tournaments/{t}/matches"),
        Some(json!({"player1": ids[0]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(bye["winner"], ids[0]);

    let (_, standings) = send(&app, "GET", &format!("/api/tournaments/{t}/standings"), None).await;
    let rows = standings.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["playerId"], ids[1]);
    assert_eq!(rows[2]["losses"], 1);
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/players", Some(json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name must not be empty"));

    let (status, _) = send(&app, "GET", "/api/tournaments/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/tournaments/5/pairings", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/tournaments/0/standings", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
