//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, LogQueryParams, User};

/// Log request for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    /// Identifier taken from the request path; not yet validated.
    pub user_id: String,
    /// Raw `from`, `to` and `limit` values.
    pub params: LogQueryParams,
}

/// A user's exercises as selected by a log request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    user: User,
    entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Pair a user with the exercises selected for them.
    pub fn new(user: User, entries: Vec<Exercise>) -> Self {
        Self { user, entries }
    }

    /// Owner of the log.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Selected exercises in insertion order.
    pub fn entries(&self) -> &[Exercise] {
        &self.entries
    }

    /// Number of entries actually returned, after range and limit.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Result of [`ExerciseLogQuery::exercise_log`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseLogOutcome {
    /// The user exists; their filtered log.
    Found(ExerciseLog),
    /// No user carries the requested identifier.
    UnknownUser,
}

/// Driving port for exercise log reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Fetch the log for a user, honouring the optional window and limit.
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLogOutcome, Error>;
}
