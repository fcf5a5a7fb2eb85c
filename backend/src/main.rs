//! Exercise tracker entry-point: loads settings, prepares the store and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use exercise_tracker::settings::TrackerSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = TrackerSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let database_url = settings.database_url()?;
    let bind_addr = settings.bind_addr()?;

    apply_migrations(database_url)
        .await
        .wrap_err("failed to migrate the database schema")?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("failed to build the connection pool")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "exercise tracker listening");
    server.await.wrap_err("server terminated unexpectedly")
}
