use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

fn paris_pois() -> Vec<poi_router::models::Poi> {
    vec![
        common::make_poi("Louvre", "Culture & heritage", 48.8606, 2.3376),
        common::make_poi("Le Petit Bistro", "Restaurant", 48.8580, 2.3400),
        common::make_poi("Jardin des Plantes", "Nature & View", 48.8440, 2.3590),
        common::make_poi("Cafe de Flore", "Cafe & Bakery", 48.8540, 2.3326),
    ]
}

async fn test_app() -> axum::Router {
    let state = common::build_test_state(paris_pois());
    poi_router::routes::create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn banner_reports_service_name() {
    let app = test_app().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["service"], "poi-router");
}

#[tokio::test]
async fn health_reports_all_dependencies() {
    let app = test_app().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["redis"], "healthy");
    assert_eq!(json["checks"]["database"], "healthy");
    assert_eq!(json["checks"]["qdrant"], "healthy");
}

#[tokio::test]
async fn locations_search_returns_nearby_pois() {
    let app = test_app().await;
    let req_body = json!({
        "latitude": 48.8566,
        "longitude": 2.3522,
        "transportation_mode": "WALKING"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/locations/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert!(json["pois"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn locations_search_rejects_invalid_coordinates() {
    let app = test_app().await;
    let req_body = json!({
        "latitude": 200.0,
        "longitude": 2.3522,
        "transportation_mode": "WALKING"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/locations/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn semantic_search_rejects_empty_query() {
    let app = test_app().await;
    let req_body = json!({ "query": "   " });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/semantic/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn semantic_combined_returns_hydrated_hits() {
    let app = test_app().await;
    let req_body = json!({
        "latitude": 48.8566,
        "longitude": 2.3522,
        "transportation_mode": "WALKING",
        "semantic_query": "Culture & heritage"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/semantic/combined")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results[0]["poi"].is_object());
}

#[tokio::test]
async fn create_routes_builds_a_target_mode_route() {
    let app = test_app().await;
    let req_body = json!({
        "latitude": 48.8566,
        "longitude": 2.3522,
        "transportation_mode": "WALKING",
        "semantic_query": "Culture & heritage,Restaurant,Nature & View",
        "target_places": 3,
        "max_routes": 1
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/route/routes")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert!(json["timing"]["route_building_ms"].is_u64());
}

#[tokio::test]
async fn replace_poi_without_cached_route_is_not_found() {
    let app = test_app().await;
    let req_body = json!({
        "user_id": uuid::Uuid::new_v4(),
        "route_id": 0,
        "poi_id_to_replace": uuid::Uuid::new_v4()
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/route/replace-poi")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn coordinates_validation() {
    use poi_router::models::Coordinates;

    assert!(Coordinates::new(48.8566, 2.3522).is_ok());
    assert!(Coordinates::new(0.0, 0.0).is_ok());
    assert!(Coordinates::new(-90.0, -180.0).is_ok());
    assert!(Coordinates::new(90.0, 180.0).is_ok());

    assert!(Coordinates::new(91.0, 0.0).is_err());
    assert!(Coordinates::new(-91.0, 0.0).is_err());
    assert!(Coordinates::new(0.0, 181.0).is_err());
    assert!(Coordinates::new(0.0, -181.0).is_err());
}
