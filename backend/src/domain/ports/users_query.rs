//! Driving port for user-facing queries.
//!
//! Inbound adapters use this port to read users without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user, in registration order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
