use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use portfolio_site::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::with_defaults())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_submit_score_is_acknowledged() {
    let (status, bytes) = send(app(), post_json("/api/highscore", r#"{"score": 150}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "success", "message": "Score 150 recorded!"})
    );
}

#[tokio::test]
async fn test_submit_without_score_counts_as_zero() {
    let (status, bytes) = send(app(), post_json("/api/highscore", "{}")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "success", "message": "Score 0 recorded!"})
    );
}

#[tokio::test]
async fn test_malformed_submissions_degrade_to_zero() {
    let payloads = ["", "{", "not json", "[150]", r#"{"score": "150"}"#, r#"{"score": null}"#];

    for payload in payloads {
        let (status, bytes) = send(app(), post_json("/api/highscore", payload)).await;
        assert_eq!(status, StatusCode::OK, "payload {:?}", payload);

        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Score 0 recorded!", "payload {:?}", payload);
    }
}

#[tokio::test]
async fn test_submit_without_content_type_still_accepted() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/highscore")
        .body(Body::from(r#"{"score": 42}"#))
        .unwrap();
    let (status, bytes) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Score 42 recorded!");
}

#[tokio::test]
async fn test_submit_echoes_any_integer() {
    for n in [0i64, 7, 200, 999, 123_456_789, -10] {
        let payload = json!({ "score": n }).to_string();
        let (_, bytes) = send(app(), post_json("/api/highscore", payload)).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], format!("Score {} recorded!", n));
    }
}

#[tokio::test]
async fn test_submit_echoes_number_as_written() {
    let scores = [
        "99999999999999999999",
        "18446744073709551616",
        "-99999999999999999999",
        "12.5",
        "1e2",
    ];

    for raw in scores {
        let payload = format!(r#"{{"score": {}}}"#, raw);
        let (status, bytes) = send(app(), post_json("/api/highscore", payload)).await;
        assert_eq!(status, StatusCode::OK, "score {}", raw);

        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], format!("Score {} recorded!", raw));
    }
}

#[tokio::test]
async fn test_large_submission_is_acknowledged() {
    let padding = "x".repeat(3 * 1024 * 1024);
    let payload = json!({ "score": 5, "pad": padding }).to_string();
    assert!(payload.len() > 3 * 1024 * 1024);

    let (status, bytes) = send(app(), post_json("/api/highscore", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "success", "message": "Score 5 recorded!"})
    );
}

#[tokio::test]
async fn test_query_returns_highscore_in_range() {
    let app = app();
    for _ in 0..200 {
        let (status, bytes) = send(app.clone(), get("/api/highscore")).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);

        let h = body["highscore"].as_u64().expect("highscore is an integer");
        assert!((50..=200).contains(&h), "out of range: {}", h);
    }
}

#[tokio::test]
async fn test_query_not_affected_by_submit() {
    let app = app();
    let (status, _) = send(app.clone(), post_json("/api/highscore", r#"{"score": 999}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let mut distinct = std::collections::HashSet::new();
    for _ in 0..100 {
        let (_, bytes) = send(app.clone(), get("/api/highscore")).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let h = body["highscore"].as_u64().unwrap();
        assert_ne!(h, 999);
        distinct.insert(h);
    }
    // independent draws, not a remembered value
    assert!(distinct.len() > 1);
}

#[tokio::test]
async fn test_health_reports_portfolio_name() {
    let (status, bytes) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "app": "Sohaib Sohail Portfolio"})
    );
}

#[tokio::test]
async fn test_home_page_renders_profile() {
    let (status, bytes) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("<h1>Sohaib Sohail</h1>"));
    assert!(html.contains("Cloud Platforms"));
    assert!(html.contains("AWS Cloud Practitioner Certified"));
    assert!(html.contains("snake-board"));
}

#[tokio::test]
async fn test_game_page_renders() {
    let (status, bytes) = send(app(), get("/game")).await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Snake"));
    assert!(html.contains("/static/snake.js"));
    assert!(html.contains("Sohaib Sohail"));
}

#[tokio::test]
async fn test_unknown_route_is_404_json() {
    let (status, bytes) = send(app(), get("/admin")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "not found: /admin");
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/highscore")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
