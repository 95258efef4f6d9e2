//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde::Deserialize;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn response_body(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialises");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let (status, header, body) = response_body(&internal_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body.message(), "Internal server error");
    assert_eq!(body.trace_id(), Some(TRACE_ID));
    assert!(body.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("Duration must be positive")
        .with_details(json!({"field": "duration_minutes"}));
    let (status, header, body) = response_body(&error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(header.is_none());
    assert_eq!(body, error);
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "deserialisation target only")]
    seats: i32,
}

async fn accept(_payload: web::Json<Payload>, _id: web::Path<i32>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case::malformed_json("/items/1", r#"{"seats": "#)]
#[case::wrong_type("/items/1", r#"{"seats": "four"}"#)]
#[case::missing_field("/items/1", r#"{}"#)]
#[case::bad_path_id("/items/abc", r#"{"seats": 4}"#)]
#[actix_web::test]
async fn extractor_failures_render_as_unprocessable(#[case] uri: &str, #[case] body: &str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(path_config())
            .route("/items/{id}", web::post().to(accept)),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Error = actix_test::read_body_json(res).await;
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}
