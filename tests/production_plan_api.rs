//! HTTP tests for the production plan endpoint, driving the router in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use production_planner::api;
use production_planner::config::Config;
use production_planner::domain::Allocation;
use production_planner::state::AppState;

fn app() -> Router {
    app_with(&Config::default())
}

fn app_with(cfg: &Config) -> Router {
    api::router(AppState::default(), cfg)
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    send_to(app(), request).await
}

async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_plan(payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/productionplan")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn payload(load: f64) -> Value {
    json!({
        "load": load,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        },
        "powerplants": [
            {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredbig2", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
            {"name": "gasfiredsomewhatsmaller", "type": "gasfired", "efficiency": 0.37, "pmin": 40, "pmax": 210},
            {"name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16},
            {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150},
            {"name": "windpark2", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 36}
        ]
    })
}

#[tokio::test]
async fn test_production_plan_for_reference_payload() {
    let (status, body) = post_plan(&payload(480.0)).await;
    assert_eq!(status, StatusCode::OK);

    // 36 MW at 60% is 21.599999... in binary, which truncates to 21.5
    let plan: Vec<Allocation> = serde_json::from_value(body).unwrap();
    assert_eq!(
        plan,
        vec![
            Allocation::new("windpark1", 90.0),
            Allocation::new("windpark2", 21.5),
            Allocation::new("gasfiredbig1", 368.5),
            Allocation::new("gasfiredbig2", 0.0),
            Allocation::new("gasfiredsomewhatsmaller", 0.0),
            Allocation::new("tj1", 0.0),
        ]
    );
}

#[tokio::test]
async fn test_zero_load_switches_everything_off() {
    let (status, body) = post_plan(&payload(0.0)).await;
    assert_eq!(status, StatusCode::OK);

    let plan: Vec<Allocation> = serde_json::from_value(body).unwrap();
    assert_eq!(plan.len(), 6);
    assert!(plan.iter().all(|a| a.p == 0.0));
}

#[tokio::test]
async fn test_unknown_plant_type_is_a_generic_server_error() {
    let mut payload = payload(480.0);
    payload["powerplants"][0]["type"] = json!("nuclear");

    let (status, body) = post_plan(&payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "PlanningError");
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_missing_wind_percentage_rejected() {
    let mut payload = payload(480.0);
    payload["fuels"].as_object_mut().unwrap().remove("wind(%)");

    let (status, body) = post_plan(&payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_invalid_plant_rejected() {
    let mut payload = payload(480.0);
    payload["powerplants"][2]["pmax"] = json!(10);

    let (status, body) = post_plan(&payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_negative_load_rejected() {
    let (status, body) = post_plan(&payload(-5.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/productionplan")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"load": 480, "fuels": "#))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_health_endpoints() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");

    for uri in ["/health/live", "/health/ready"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported_media_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/productionplan")
        .body(Body::from(payload(480.0).to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "RequestRejected");
}

#[tokio::test]
async fn test_body_over_limit_is_payload_too_large() {
    let mut cfg = Config::default();
    cfg.server.body_limit_bytes = 64;

    let body = payload(480.0).to_string();
    assert!(body.len() > 64);
    let request = Request::builder()
        .method("POST")
        .uri("/productionplan")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send_to(app_with(&cfg), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "RequestRejected");
}

async fn allow_origin_header(cfg: &Config) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app_with(cfg).oneshot(request).await.unwrap();
    let origin = response
        .headers()
        .get("access-control-allow-origin")
        .map(|value| value.to_str().unwrap().to_string());
    (response.status(), origin)
}

#[tokio::test]
async fn test_cors_disabled_by_default() {
    let (status, origin) = allow_origin_header(&Config::default()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin, None);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let mut cfg = Config::default();
    cfg.server.enable_cors = true;

    let (status, origin) = allow_origin_header(&cfg).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin.as_deref(), Some("http://localhost:3000"));
}

#[tokio::test]
async fn test_invalid_cors_origin_serves_without_cors() {
    let mut cfg = Config::default();
    cfg.server.enable_cors = true;
    cfg.server.cors_origin = "http://bad\norigin".to_string();

    let (status, origin) = allow_origin_header(&cfg).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin, None);
}
