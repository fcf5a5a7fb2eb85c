//! Port for exercise persistence.

use async_trait::async_trait;

use crate::domain::{Exercise, ExerciseFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter detail.
            message: String,
        } =>
            "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter detail.
            message: String,
        } =>
            "exercise repository query failed: {message}",
    }
}

/// Port for writing exercises and reading a user's log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a logged exercise.
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError>;

    /// Exercises matching `filter`, in insertion order, truncated to the
    /// filter's limit.
    async fn find(&self, filter: &ExerciseFilter)
    -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
