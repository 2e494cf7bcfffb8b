//! HTTP-level integration tests for reservations and room availability.
//!
//! These exercise the full loop: a reservation mutation over HTTP must be
//! observable as an updated `available` flag on the room before the
//! mutation's response even arrives at the next request.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn token() -> String {
    common::test_token(1, "staff")
}

/// Seed a hotel, a room, and a customer over HTTP. Returns
/// (hotel_id, room_number, customer_id).
async fn seed_fixture(pool: &PgPool, room_number: i32) -> (i64, i32, i64) {
    let token = token();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/hotels",
        serde_json::json!({
            "name": "Grand Plaza",
            "address": "1 Main St",
            "rating": 4.5
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let hotel_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/rooms",
        serde_json::json!({
            "number": room_number,
            "room_type": "double",
            "hotel_id": hotel_id
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/customers",
        serde_json::json!({
            "name": "Alice Smith",
            "email": "alice@example.com"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let customer_id = body_json(response).await["id"].as_i64().unwrap();

    (hotel_id, room_number, customer_id)
}

/// Fetch a room over HTTP and return its `available` flag.
async fn room_available(pool: &PgPool, number: i32) -> bool {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/rooms/{number}"), &token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["available"].as_bool().unwrap()
}

// ---------------------------------------------------------------------------
// Reservation lifecycle drives the availability flag
// ---------------------------------------------------------------------------

/// Creating a reservation that covers today flips the room to unavailable;
/// deleting it flips the room back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reservation_lifecycle_updates_availability(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 101).await;
    assert!(room_available(&pool, number).await, "room starts available");

    let today = Utc::now().date_naive();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "customer_id": customer_id,
            "room_number": number,
            "check_in": (today - Duration::days(1)).to_string(),
            "check_out": (today + Duration::days(1)).to_string()
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reservation_id = body_json(response).await["id"].as_i64().unwrap();

    assert!(
        !room_available(&pool, number).await,
        "room must be unavailable while a stay covers today"
    );

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/reservations/{reservation_id}"),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(
        room_available(&pool, number).await,
        "room must be available again after the reservation is deleted"
    );
}

/// A reservation entirely in the future leaves today's flag untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_future_reservation_leaves_room_available(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 102).await;

    let today = Utc::now().date_naive();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "customer_id": customer_id,
            "room_number": number,
            "check_in": (today + Duration::days(7)).to_string(),
            "check_out": (today + Duration::days(9)).to_string()
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    assert!(
        room_available(&pool, number).await,
        "a future stay must not block the room today"
    );
}

/// Moving a reservation onto today via PUT flips the flag.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_reservation_reconciles(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 103).await;

    let today = Utc::now().date_naive();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "customer_id": customer_id,
            "room_number": number,
            "check_in": (today + Duration::days(7)).to_string(),
            "check_out": (today + Duration::days(9)).to_string()
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reservation_id = body_json(response).await["id"].as_i64().unwrap();
    assert!(room_available(&pool, number).await);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/reservations/{reservation_id}"),
        serde_json::json!({
            "check_in": today.to_string(),
            "check_out": (today + Duration::days(2)).to_string()
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        !room_available(&pool, number).await,
        "moving the stay onto today must mark the room unavailable"
    );
}

/// check_out must be strictly after check_in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reservation_rejects_bad_interval(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 104).await;

    for (check_in, check_out) in [("2026-09-10", "2026-09-10"), ("2026-09-10", "2026-09-08")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/reservations",
            serde_json::json!({
                "customer_id": customer_id,
                "room_number": number,
                "check_in": check_in,
                "check_out": check_out
            }),
            &token(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// ---------------------------------------------------------------------------
// Manual reconciliation endpoint
// ---------------------------------------------------------------------------

/// Reconciling against dates inside and past a fixed stay produces the
/// expected flag on each side of the checkout boundary.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reconcile_against_explicit_date(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 101).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "customer_id": customer_id,
            "room_number": number,
            "check_in": "2024-03-10",
            "check_out": "2024-03-12"
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Mid-stay: occupied.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/availability/reconcile?date=2024-03-11",
        serde_json::json!({}),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await;
    assert_eq!(summary["date"], "2024-03-11");
    assert_eq!(summary["occupied"], 1);
    assert!(!room_available(&pool, number).await);

    // Day after checkout: free again.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/availability/reconcile?date=2024-03-13",
        serde_json::json!({}),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await;
    assert_eq!(summary["occupied"], 0);
    assert!(room_available(&pool, number).await);
}

/// A malformed date is rejected with 400 INVALID_ARGUMENT.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reconcile_rejects_bad_date(pool: PgPool) {
    seed_fixture(&pool, 105).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/availability/reconcile?date=not-a-date",
        serde_json::json!({}),
        &token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
}

/// Deleting a customer under the restrict policy is refused with 409 while
/// reservations reference them.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_customer_delete_restricted(pool: PgPool) {
    let (_hotel, number, customer_id) = seed_fixture(&pool, 106).await;

    let today = Utc::now().date_naive();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "customer_id": customer_id,
            "room_number": number,
            "check_in": (today + Duration::days(1)).to_string(),
            "check_out": (today + Duration::days(3)).to_string()
        }),
        &token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/customers/{customer_id}"), &token()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
