use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use karya_core::view::tag_chip;
use karya_core::{BackendConfig, GatewayClient, KaryaError, WorkDraft};

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fixture");
    });
    format!("http://{}", addr)
}

fn client_for(base: &str) -> GatewayClient {
    let config = BackendConfig::new(base).expect("test config");
    GatewayClient::new(&config)
}

#[tokio::test]
async fn announcements_fixture_parses() {
    let app = Router::new().route(
        "/api/announcements",
        get(|| async {
            Json(json!({"data": [{
                "id": 1,
                "title": "Solar Still",
                "content": "Eksperimen penyulingan air tenaga surya",
                "author": "Budi",
                "tags": ["fisika", "energi"],
            }]}))
        }),
    );
    let base = serve(app).await;

    let items = client_for(&base)
        .list_announcements()
        .await
        .expect("announcements fetch");

    assert_eq!(items.len(), 1);
    let card = &items[0];
    assert_eq!(card.title, "Solar Still");
    assert_eq!(card.display_author(), "Budi");
    let chips: Vec<String> = card.tags.iter().map(|t| tag_chip(t)).collect();
    assert_eq!(chips, vec!["#fisika", "#energi"]);
}

#[tokio::test]
async fn works_search_round_trips_to_query_parameter() {
    let queries: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let app = Router::new()
        .route(
            "/api/works",
            get(
                |State(queries): State<Arc<Mutex<Vec<Option<String>>>>>, RawQuery(q): RawQuery| async move {
                    queries.lock().expect("queries lock").push(q);
                    Json(json!({"data": []}))
                },
            ),
        )
        .with_state(queries.clone());
    let base = serve(app).await;
    let client = client_for(&base);

    client.list_works(Some("robot")).await.expect("search fetch");
    client.list_works(None).await.expect("unfiltered fetch");
    client.list_works(Some("")).await.expect("blank fetch");

    let seen = queries.lock().expect("queries lock").clone();
    assert_eq!(seen, vec![Some("q=robot".to_string()), None, None]);
}

#[tokio::test]
async fn absent_data_field_is_an_empty_list() {
    let app = Router::new().route("/api/works", get(|| async { Json(json!({})) }));
    let base = serve(app).await;

    let items = client_for(&base).list_works(None).await.expect("fetch");
    assert!(items.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route("/api/works", get(|| async { "not json at all" }));
    let base = serve(app).await;

    let err = client_for(&base)
        .list_works(None)
        .await
        .expect_err("malformed body must not parse");
    assert!(matches!(err, KaryaError::Decode(_)));
}

#[tokio::test]
async fn failed_read_carries_the_status() {
    let app = Router::new().route(
        "/api/announcements",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .list_announcements()
        .await
        .expect_err("read must fail");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn create_work_posts_the_full_draft_as_json() {
    let bodies: Arc<Mutex<Vec<(Option<String>, Value)>>> = Arc::default();
    let app = Router::new()
        .route(
            "/api/works",
            post(
                |State(bodies): State<Arc<Mutex<Vec<(Option<String>, Value)>>>>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(|s| s.to_string());
                    bodies.lock().expect("bodies lock").push((content_type, body.clone()));

                    let mut created = body;
                    created["id"] = json!(9);
                    (StatusCode::CREATED, Json(created))
                },
            ),
        )
        .with_state(bodies.clone());
    let base = serve(app).await;

    let mut draft = WorkDraft::default();
    draft.title = "Roket Air".to_string();
    draft.author = "Tim A".to_string();

    let created = client_for(&base).create_work(&draft).await.expect("create");
    assert_eq!(created.id, json!(9));
    assert_eq!(created.title, "Roket Air");

    let recorded = bodies.lock().expect("bodies lock");
    let (content_type, body) = &recorded[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let object = body.as_object().expect("json object body");
    assert_eq!(object.len(), 7, "every draft field is sent, empty or not");
    assert_eq!(object["title"], "Roket Air");
    assert_eq!(object["email"], "");
}

#[tokio::test]
async fn rejected_create_fails_with_the_status() {
    let app = Router::new().route(
        "/api/works",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(app).await;

    let err = client_for(&base)
        .create_work(&WorkDraft::default())
        .await
        .expect_err("create must fail");
    assert!(matches!(err, KaryaError::RequestFailed { status: 500 }));
}

#[tokio::test]
async fn connection_check_reports_reachability() {
    let app = Router::new().route(
        "/api/announcements",
        get(|| async { Json(json!({"data": []})) }),
    );
    let base = serve(app).await;

    client_for(&base)
        .check_connection()
        .await
        .expect("reachable backend");

    let unreachable = client_for("http://127.0.0.1:1");
    assert!(unreachable.check_connection().await.is_err());
}
