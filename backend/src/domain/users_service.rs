//! User registration and listing services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CreateUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, UserId, Username};

pub(crate) fn map_user_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Users service implementing both user driving ports.
#[derive(Clone)]
pub struct UsersService<R> {
    user_repo: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service backed by the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let username = Username::new(request.username)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let user = User::new(UserId::random(), username);

        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_repository_error)?;

        debug!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list_all()
            .await
            .map_err(map_user_repository_error)
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
