//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use exercise_tracker::Trace;
#[cfg(debug_assertions)]
use exercise_tracker::doc::ApiDoc;
use exercise_tracker::inbound::http::api_scope;
use exercise_tracker::inbound::http::health::{HealthState, live, ready};
use exercise_tracker::inbound::http::home::index;
use exercise_tracker::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(index)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = build_http_state(&db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    fail_liveness_on_shutdown(health_state);
    Ok(server)
}

/// Flip liveness to failing once Ctrl-C starts the graceful drain.
///
/// Actix handles the same signal itself and stops accepting connections; this
/// only updates what `/health/live` reports while in-flight requests finish.
fn fail_liveness_on_shutdown(health_state: web::Data<HealthState>) {
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown signal received; liveness now failing");
                health_state.mark_unhealthy();
            }
            Err(error) => warn!(%error, "cannot listen for shutdown signal"),
        }
    });
}
