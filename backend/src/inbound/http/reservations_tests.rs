//! Tests for reservation HTTP handlers.

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{RESERVATION_CONFLICT_MESSAGE, TRACE_ID_HEADER};
use crate::inbound::http::tables::TableResponse;
use crate::inbound::http::test_utils::{booking_app, memory_state};

trait TestService:
    actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

impl<S> TestService for S where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >
{
}

async fn post(app: &impl TestService, uri: &str, body: Value) -> ServiceResponse {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    actix_test::call_service(app, request).await
}

async fn delete(app: &impl TestService, uri: &str) -> ServiceResponse {
    let request = actix_test::TestRequest::delete().uri(uri).to_request();
    actix_test::call_service(app, request).await
}

async fn list(app: &impl TestService) -> Vec<ReservationResponse> {
    let request = actix_test::TestRequest::get()
        .uri("/reservations/")
        .to_request();
    actix_test::call_and_read_body_json(app, request).await
}

async fn seed_table(app: &impl TestService) -> i32 {
    let response = post(
        app,
        "/tables/",
        json!({"name": "Window", "seats": 4, "location": "Main hall"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let table: TableResponse = actix_test::read_body_json(response).await;
    table.id
}

fn booking(table_id: i32, time: &str, duration: i32) -> Value {
    json!({
        "customer_name": "Alice",
        "table_id": table_id,
        "reservation_time": time,
        "duration_minutes": duration,
    })
}

#[actix_web::test]
async fn create_reservation_returns_created_record() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(
        &app,
        "/reservations/",
        booking(table_id, "2025-04-10T18:00:00Z", 60),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ReservationResponse = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        ReservationResponse {
            id: 1,
            customer_name: "Alice".to_owned(),
            table_id,
            reservation_time: "2025-04-10T18:00:00Z".to_owned(),
            duration_minutes: 60,
        }
    );
}

#[actix_web::test]
async fn naive_timestamp_is_read_as_utc() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(
        &app,
        "/reservations/",
        booking(table_id, "2025-04-10T18:00:00", 30),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ReservationResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.reservation_time, "2025-04-10T18:00:00Z");
}

#[rstest]
#[case("2025-04-10T18:00")]
#[case("2025-04-10 18:00:00")]
#[case("2025-04-10T20:00+02:00")]
#[actix_web::test]
async fn shorthand_iso_timestamps_are_accepted(#[case] time: &str) {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(&app, "/reservations/", booking(table_id, time, 30)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ReservationResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.reservation_time, "2025-04-10T18:00:00Z");
}

#[actix_web::test]
async fn time_before_storable_range_is_invalid() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(
        &app,
        "/reservations/",
        booking(table_id, "-5000-01-01T18:00:00", 60),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("reservation_time")
    );
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("out_of_range")
    );
    assert!(list(&app).await.is_empty());
}

#[rstest]
#[case("2025-04-10T18:30:00Z", StatusCode::BAD_REQUEST)]
#[case("2025-04-10T17:30:00Z", StatusCode::BAD_REQUEST)]
#[case("2025-04-10T19:00:00Z", StatusCode::CREATED)]
#[case("2025-04-10T17:00:00Z", StatusCode::CREATED)]
#[actix_web::test]
async fn overlapping_bookings_are_rejected(#[case] time: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;
    let first = post(
        &app,
        "/reservations/",
        booking(table_id, "2025-04-10T18:00:00Z", 60),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let response = post(&app, "/reservations/", booking(table_id, time, 60)).await;

    assert_eq!(response.status(), expected);
    if expected == StatusCode::BAD_REQUEST {
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("conflict"));
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some(RESERVATION_CONFLICT_MESSAGE)
        );
    }
}

#[actix_web::test]
async fn booking_a_missing_table_is_not_found() {
    let app = actix_test::init_service(booking_app(memory_state())).await;

    let response = post(
        &app,
        "/reservations/",
        booking(42, "2025-04-10T18:00:00Z", 60),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Table with id 42 not found")
    );
}

#[rstest]
#[case(0)]
#[case(-15)]
#[actix_web::test]
async fn non_positive_duration_is_invalid(#[case] duration: i32) {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(
        &app,
        "/reservations/",
        booking(table_id, "2025-04-10T18:00:00Z", duration),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Duration must be positive")
    );
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("duration_minutes")
    );
}

#[actix_web::test]
async fn unparseable_time_is_invalid() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;

    let response = post(
        &app,
        "/reservations/",
        booking(table_id, "tomorrow evening", 60),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("reservation_time")
    );
    assert!(body.get("traceId").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn deleting_a_reservation_twice_reports_not_found() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let table_id = seed_table(&app).await;
    post(
        &app,
        "/reservations/",
        booking(table_id, "2025-04-10T18:00:00Z", 60),
    )
    .await;

    assert_eq!(
        delete(&app, "/reservations/1").await.status(),
        StatusCode::NO_CONTENT
    );
    let second = delete(&app, "/reservations/1").await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Reservation with id 1 not found")
    );
}

#[actix_web::test]
async fn deleting_a_table_removes_its_reservations() {
    let app = actix_test::init_service(booking_app(memory_state())).await;
    let doomed = seed_table(&app).await;
    let kept = seed_table(&app).await;
    for table_id in [doomed, kept] {
        let response = post(
            &app,
            "/reservations/",
            booking(table_id, "2025-04-10T18:00:00Z", 60),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(&app, &format!("/tables/{doomed}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = list(&app).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.first().map(|r| r.table_id), Some(kept));

    let rebooked = post(
        &app,
        "/reservations/",
        booking(doomed, "2025-04-10T18:00:00Z", 60),
    )
    .await;
    assert_eq!(rebooked.status(), StatusCode::NOT_FOUND);
}
