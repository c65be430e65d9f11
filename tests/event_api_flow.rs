use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use event_reminder::modules::events::store::in_memory::InMemoryEventStore;
use event_reminder::modules::events::store::sqlite::SqliteEventStore;
use event_reminder::shell::http::router;
use event_reminder::shell::state::AppState;

fn in_memory_app() -> Router {
    router(AppState::new(Arc::new(InMemoryEventStore::new())))
}

fn sqlite_app() -> Router {
    router(AppState::new(Arc::new(
        SqliteEventStore::open_in_memory().unwrap(),
    )))
}

async fn post_event(app: &Router, deadline: &str, title: &str, memo: &str) -> (StatusCode, Value) {
    let body = json!({ "deadline": deadline, "title": title, "memo": memo });
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/event")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(app: &Router, deadline: &str, title: &str, memo: &str) -> i64 {
    let (status, body) = post_event(app, deadline, title, memo).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "registered");
    body["id"].as_i64().unwrap()
}

async fn get_event(app: &Router, id: i64) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/event/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn list_events(app: &Router) -> Vec<Value> {
    let response = app
        .clone()
        .oneshot(Request::get("/api/v1/event").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    json.as_array().unwrap().clone()
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_round_trip_a_registered_event(#[case] app: Router) {
    let id = register(&app, "2019-06-11T14:00:00+09:00", "report", "memomemo").await;
    assert!(id > 0);

    let (status, body) = get_event(&app, id).await;
    assert_eq!(status, StatusCode::OK);
    let event: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(event["id"], id);
    assert_eq!(event["deadline"], "2019-06-11T14:00:00+09:00");
    assert_eq!(event["title"], "report");
    assert_eq!(event["memo"], "memomemo");
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_reject_a_non_rfc3339_deadline(#[case] app: Router) {
    let (status, body) = post_event(&app, "2019/06/11T14:00:00+09:00", "report", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "invalid date format");

    // Nothing was stored.
    assert!(list_events(&app).await.is_empty());
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_keep_distinct_events_distinct(#[case] app: Router) {
    let first = register(&app, "2019-06-11T14:00:00+09:00", "report", "memomemo").await;
    let second = register(&app, "2019-06-12T14:00:00+09:00", "report 2", "memomemo2").await;
    assert!(second > first);

    let (_, body) = get_event(&app, first).await;
    let event: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(event["title"], "report");

    let (_, body) = get_event(&app, second).await;
    let event: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(event["title"], "report 2");
    assert_eq!(event["deadline"], "2019-06-12T14:00:00+09:00");
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_list_registrations_in_insertion_order(#[case] app: Router) {
    let mut ids = Vec::new();
    for n in 1..=4 {
        let deadline = format!("2019-06-1{n}T14:00:00+09:00");
        let title = format!("report {n}");
        let memo = format!("memo {n}");
        ids.push(register(&app, &deadline, &title, &memo).await);
    }

    let events = list_events(&app).await;
    assert_eq!(events.len(), 4);
    for (n, event) in events.iter().enumerate() {
        assert_eq!(event["id"].as_i64().unwrap(), ids[n]);
        assert_eq!(event["title"], format!("report {}", n + 1));
        assert_eq!(event["memo"], format!("memo {}", n + 1));
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must increase");
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_return_404_with_an_empty_body_for_a_missing_event(#[case] app: Router) {
    let (status, body) = get_event(&app, 12345).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[rstest]
#[case::in_memory(in_memory_app())]
#[case::sqlite(sqlite_app())]
#[tokio::test]
async fn it_should_reject_a_malformed_body(#[case] app: Router) {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/event")
                .header("content-type", "application/json")
                .body(Body::from("not-json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "invalid request format");
}
