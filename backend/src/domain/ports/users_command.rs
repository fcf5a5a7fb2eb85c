//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Registration input as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Requested username, untrimmed.
    pub username: String,
}

/// Driving port for user write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user under a freshly generated identifier.
    ///
    /// Usernames need not be unique; a blank username is rejected with
    /// [`crate::domain::ErrorCode::InvalidRequest`].
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;
}
