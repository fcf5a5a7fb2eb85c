//! Driving port for logging exercises.
//!
//! Fields arrive as submitted. The service resolves the user before looking
//! at any of them, so an unknown user wins over a malformed payload.

use async_trait::async_trait;

use crate::domain::{Error, Exercise};

/// Exercise submission for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogExerciseRequest {
    /// Identifier taken from the request path; not yet validated.
    pub user_id: String,
    /// Required free text.
    pub description: Option<String>,
    /// Minutes as submitted; parsed by the service.
    pub duration: Option<String>,
    /// `YYYY-MM-DD`; missing or empty means today.
    pub date: Option<String>,
}

/// Result of [`ExerciseCommand::log_exercise`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogExerciseOutcome {
    /// The exercise was stored.
    Logged(Exercise),
    /// No user carries the requested identifier.
    UnknownUser,
}

/// Driving port for exercise write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Record an exercise against an existing user.
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LogExerciseOutcome, Error>;
}
