//! HTTP server configuration object.

use std::net::SocketAddr;

use exercise_tracker::outbound::persistence::DbPool;

/// Everything the server needs once settings are resolved and the store is up.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Bundle the resolved bind address and the store pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
