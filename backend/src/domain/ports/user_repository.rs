//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter detail.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter detail.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Port for storing and reading registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a newly registered user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every stored user, in registration order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;
}
