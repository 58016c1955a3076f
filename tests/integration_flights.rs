mod common;

use axum::http::StatusCode;
use common::{VALID_TOKEN, request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn sample_flight_body() -> serde_json::Value {
    json!({
        "aircraft": "A320",
        "flightNumber": "AVIO201",
        "schedule": {
            "std": "2024-03-01T09:30:00Z",
            "sta": "2024-03-01T12:15:00Z"
        },
        "departure": "EBBR",
        "destination": "LFPG"
    })
}

async fn create_flight(app: axum::Router) -> serde_json::Value {
    let (status, body) = request(
        app,
        "POST",
        "/flights",
        Some(VALID_TOKEN),
        Some(sample_flight_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_routes_reject_missing_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let routes = [
        ("GET", "/flights".to_string(), None),
        ("POST", "/flights".to_string(), Some(sample_flight_body())),
        ("GET", format!("/flights/{}", Uuid::new_v4()), None),
        (
            "PATCH",
            format!("/flights/{}", Uuid::new_v4()),
            Some(json!({ "aircraft": "B737" })),
        ),
        ("DELETE", format!("/flights/{}", Uuid::new_v4()), None),
    ];

    for (method, uri, body) in routes {
        let (status, response) = request(app.clone(), method, &uri, None, body).await;

        assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
        assert_eq!(response["error"], "Access denied");
        assert_eq!(
            response["message"],
            "No token provided. You must be logged in."
        );
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_routes_reject_invalid_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = request(app, "GET", "/flights", Some("expired-token"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
    assert_eq!(body["message"], "The token is invalid or has expired.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_list_flights(pool: PgPool) {
    let app = setup_test_app(pool);

    let created = create_flight(app.clone()).await;
    assert!(created["id"].is_string());
    assert_eq!(created["aircraft"], "A320");
    assert_eq!(created["flightNumber"], "AVIO201");
    assert_eq!(created["departure"], "EBBR");
    assert_eq!(created["destination"], "LFPG");

    let (status, body) = request(app, "GET", "/flights", Some(VALID_TOKEN), None).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["id"], created["id"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_flight_missing_field(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut body = sample_flight_body();
    body.as_object_mut().unwrap().remove("destination");

    let (status, response) =
        request(app, "POST", "/flights", Some(VALID_TOKEN), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid payload");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_flight_missing_schedule_time(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut body = sample_flight_body();
    body["schedule"].as_object_mut().unwrap().remove("sta");

    let (status, response) =
        request(app, "POST", "/flights", Some(VALID_TOKEN), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid payload");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_flight_rejects_bad_airport_code(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut body = sample_flight_body();
    body["departure"] = json!("BRU");

    let (status, response) =
        request(app, "POST", "/flights", Some(VALID_TOKEN), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid payload");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_flight_rejects_overlong_aircraft(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut body = sample_flight_body();
    body["aircraft"] = json!("AIRBUS-A320");

    let (status, response) =
        request(app, "POST", "/flights", Some(VALID_TOKEN), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid payload");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_flight_by_id_is_idempotent(pool: PgPool) {
    let app = setup_test_app(pool);

    let created = create_flight(app.clone()).await;
    let uri = format!("/flights/{}", created["id"].as_str().unwrap());

    let (status, first) = request(app.clone(), "GET", &uri, Some(VALID_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, created);

    let (status, second) = request(app, "GET", &uri, Some(VALID_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_flight_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let uri = format!("/flights/{}", Uuid::new_v4());
    let (status, body) = request(app, "GET", &uri, Some(VALID_TOKEN), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_flight_with_malformed_id_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) =
        request(app, "GET", "/flights/not-a-real-id", Some(VALID_TOKEN), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_updates_only_supplied_fields(pool: PgPool) {
    let app = setup_test_app(pool);

    let created = create_flight(app.clone()).await;
    let uri = format!("/flights/{}", created["id"].as_str().unwrap());

    let (status, updated) = request(
        app.clone(),
        "PATCH",
        &uri,
        Some(VALID_TOKEN),
        Some(json!({ "aircraft": "B737" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["aircraft"], "B737");
    assert_eq!(updated["flightNumber"], created["flightNumber"]);
    assert_eq!(updated["schedule"], created["schedule"]);
    assert_eq!(updated["departure"], created["departure"]);
    assert_eq!(updated["destination"], created["destination"]);

    let (status, fetched) = request(app, "GET", &uri, Some(VALID_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_unknown_flight_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let uri = format!("/flights/{}", Uuid::new_v4());
    let (status, body) = request(
        app,
        "PATCH",
        &uri,
        Some(VALID_TOKEN),
        Some(json!({ "aircraft": "B737" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_rejects_invalid_field(pool: PgPool) {
    let app = setup_test_app(pool);

    let created = create_flight(app.clone()).await;
    let uri = format!("/flights/{}", created["id"].as_str().unwrap());

    let (status, body) = request(
        app,
        "PATCH",
        &uri,
        Some(VALID_TOKEN),
        Some(json!({ "destination": "PARIS" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid payload");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_flight_then_get_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let created = create_flight(app.clone()).await;
    let uri = format!("/flights/{}", created["id"].as_str().unwrap());

    let (status, body) = request(app.clone(), "DELETE", &uri, Some(VALID_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = request(app, "GET", &uri, Some(VALID_TOKEN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_unknown_flight_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let uri = format!("/flights/{}", Uuid::new_v4());
    let (status, body) = request(app, "DELETE", &uri, Some(VALID_TOKEN), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}
