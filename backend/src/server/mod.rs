//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use booking::Trace;
#[cfg(debug_assertions)]
use booking::doc::ApiDoc;
use booking::inbound::http::error::{json_config, path_config};
use booking::inbound::http::health::{HealthState, live, ready, tables_health};
use booking::inbound::http::reservations::{
    create_reservation, delete_reservation, list_reservations,
};
use booking::inbound::http::state::HttpState;
use booking::inbound::http::tables::{create_table, delete_table, list_tables};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    // `/tables/health` is registered ahead of `/tables/{id}`.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(tables_health)
        .service(list_tables)
        .service(create_table)
        .service(delete_table)
        .service(list_reservations)
        .service(create_reservation)
        .service(delete_reservation)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] carrying the bind address and optional pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// OS signals are not handled by the server itself; pair it with
/// [`drain_on`] so the probes report draining before connections close.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .disable_signals()
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Resolve on Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed never fires.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received SIGTERM"),
    }
}

/// Once `signal` resolves, mark the server as draining and stop it gracefully.
///
/// Liveness and readiness both answer 503 while in-flight requests finish.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    signal.await;
    health_state.mark_unhealthy();
    info!("draining booking server");
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    //! Wiring checks for the assembled application.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use booking::domain::TRACE_ID_HEADER;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::net::SocketAddr;

    fn deps() -> AppDependencies {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(&config),
        }
    }

    #[rstest]
    #[case("/tables/health", StatusCode::OK)]
    #[case("/tables/", StatusCode::OK)]
    #[case("/reservations/", StatusCode::OK)]
    #[case("/health/ready", StatusCode::OK)]
    #[case("/health/live", StatusCode::OK)]
    #[actix_web::test]
    async fn routes_are_mounted(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = actix_test::init_service(build_app(deps())).await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(response.status(), expected);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[actix_web::test]
    async fn shutdown_marks_draining_then_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let server = create_server(health_state.clone(), config).expect("server binds");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        assert!(health_state.is_ready());

        drain_on(std::future::ready(()), health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        assert!(!health_state.is_ready());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }

    #[actix_web::test]
    async fn booking_flow_runs_against_the_memory_store() {
        let app = actix_test::init_service(build_app(deps())).await;

        let table = actix_test::TestRequest::post()
            .uri("/tables/")
            .set_json(json!({"name": "Corner", "seats": 2, "location": "Patio"}))
            .to_request();
        let table: Value = actix_test::call_and_read_body_json(&app, table).await;
        let table_id = table.get("id").and_then(Value::as_i64).expect("table id");

        let booking = json!({
            "customer_name": "Bob",
            "table_id": table_id,
            "reservation_time": "2025-04-10T18:00:00Z",
            "duration_minutes": 90,
        });
        let first = actix_test::TestRequest::post()
            .uri("/reservations/")
            .set_json(&booking)
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, first).await.status(),
            StatusCode::CREATED
        );
        let second = actix_test::TestRequest::post()
            .uri("/reservations/")
            .set_json(&booking)
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, second).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
