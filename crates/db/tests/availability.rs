//! Integration tests for availability reconciliation against a real
//! database: flags flip on overlap, recover after the stay, and repeated
//! runs are no-ops.

use sqlx::PgPool;

use innkeeper_db::availability::Reconciler;
use innkeeper_db::models::customer::CreateCustomer;
use innkeeper_db::models::hotel::CreateHotel;
use innkeeper_db::models::reservation::CreateReservation;
use innkeeper_db::models::room::{CreateRoom, RoomType};
use innkeeper_db::repositories::{CustomerRepo, HotelRepo, ReservationRepo, RoomRepo};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seed a hotel with the given room numbers; returns (hotel_id, customer_id).
async fn seed(pool: &PgPool, room_numbers: &[i32]) -> (i64, i64) {
    let hotel = HotelRepo::create(
        pool,
        &CreateHotel {
            name: "Seaside".to_string(),
            description: None,
            address: "1 Harbour Road".to_string(),
            rating: 4.0,
        },
    )
    .await
    .unwrap();

    let customer = CustomerRepo::create(
        pool,
        &CreateCustomer {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap();

    for &number in room_numbers {
        RoomRepo::create(
            pool,
            &CreateRoom {
                number,
                room_type: RoomType::Double,
                hotel_id: hotel.id,
            },
        )
        .await
        .unwrap();
    }

    (hotel.id, customer.id)
}

async fn reserve(pool: &PgPool, customer_id: i64, room: i32, from: chrono::NaiveDate, to: chrono::NaiveDate) -> i64 {
    ReservationRepo::create(
        pool,
        &CreateReservation {
            customer_id,
            room_number: room,
            check_in: from,
            check_out: to,
        },
    )
    .await
    .unwrap()
    .id
}

async fn available(pool: &PgPool, room: i32) -> bool {
    RoomRepo::find_by_number(pool, room)
        .await
        .unwrap()
        .expect("room should exist")
        .available
}

#[sqlx::test(migrations = "./migrations")]
async fn reconcile_flips_only_the_occupied_room(pool: PgPool) {
    let (_, customer_id) = seed(&pool, &[101, 102]).await;
    reserve(&pool, customer_id, 101, date(2024, 3, 10), date(2024, 3, 12)).await;
    reserve(&pool, customer_id, 102, date(2024, 4, 1), date(2024, 4, 3)).await;

    let reconciler = Reconciler::new(pool.clone());
    let summary = reconciler.run(date(2024, 3, 11)).await.unwrap();

    assert_eq!(summary.rooms, 2);
    assert_eq!(summary.occupied, 1);
    assert_eq!(summary.changed, 1);

    assert!(!available(&pool, 101).await);
    assert!(available(&pool, 102).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn reconcile_frees_the_room_after_the_stay(pool: PgPool) {
    let (_, customer_id) = seed(&pool, &[101]).await;
    reserve(&pool, customer_id, 101, date(2024, 3, 10), date(2024, 3, 12)).await;

    let reconciler = Reconciler::new(pool.clone());

    reconciler.run(date(2024, 3, 11)).await.unwrap();
    assert!(!available(&pool, 101).await);

    let summary = reconciler.run(date(2024, 3, 13)).await.unwrap();
    assert_eq!(summary.occupied, 0);
    assert_eq!(summary.changed, 1);
    assert!(available(&pool, 101).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn boundary_days_occupy_the_room(pool: PgPool) {
    let (_, customer_id) = seed(&pool, &[101]).await;
    reserve(&pool, customer_id, 101, date(2024, 3, 10), date(2024, 3, 12)).await;

    let reconciler = Reconciler::new(pool.clone());

    reconciler.run(date(2024, 3, 10)).await.unwrap();
    assert!(!available(&pool, 101).await, "check-in day occupies");

    reconciler.run(date(2024, 3, 12)).await.unwrap();
    assert!(!available(&pool, 101).await, "check-out day occupies");
}

#[sqlx::test(migrations = "./migrations")]
async fn rerun_without_changes_is_a_no_op(pool: PgPool) {
    let (_, customer_id) = seed(&pool, &[101, 102]).await;
    reserve(&pool, customer_id, 101, date(2024, 3, 10), date(2024, 3, 12)).await;

    let reconciler = Reconciler::new(pool.clone());
    let first = reconciler.run(date(2024, 3, 11)).await.unwrap();
    assert_eq!(first.changed, 1);

    let second = reconciler.run(date(2024, 3, 11)).await.unwrap();
    assert_eq!(second.changed, 0, "same inputs, no flag writes");
    assert_eq!(second.occupied, first.occupied);
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_the_reservation_restores_availability(pool: PgPool) {
    let (_, customer_id) = seed(&pool, &[101]).await;
    let reservation_id =
        reserve(&pool, customer_id, 101, date(2024, 3, 10), date(2024, 3, 12)).await;

    let reconciler = Reconciler::new(pool.clone());
    reconciler.run(date(2024, 3, 11)).await.unwrap();
    assert!(!available(&pool, 101).await);

    ReservationRepo::delete(&pool, reservation_id).await.unwrap();
    reconciler.run(date(2024, 3, 11)).await.unwrap();
    assert!(available(&pool, 101).await);
}
