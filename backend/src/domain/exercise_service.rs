//! Exercise logging and log retrieval services.
//!
//! Both operations resolve the path user first. A malformed identifier is
//! treated the same as one that matches nobody.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    ExerciseCommand, ExerciseLog, ExerciseLogOutcome, ExerciseLogQuery, ExerciseLogRequest,
    ExercisePersistenceError, ExerciseRepository, LogExerciseOutcome, LogExerciseRequest,
    UserRepository,
};
use crate::domain::users_service::map_user_repository_error;
use crate::domain::{
    Description, Error, Exercise, ExerciseDate, LogQuery, User, UserId, parse_duration,
    parse_optional_date,
};

fn map_exercise_repository_error(error: ExercisePersistenceError) -> Error {
    match error {
        ExercisePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
    }
}

/// Exercise service implementing the exercise command and log query ports.
#[derive(Clone)]
pub struct ExerciseService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseService<U, E> {
    /// Create a new service. `clock` supplies the default exercise date.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }

    fn today(&self) -> ExerciseDate {
        ExerciseDate::new(self.clock.utc().date_naive())
    }
}

impl<U, E> ExerciseService<U, E>
where
    U: UserRepository,
{
    async fn resolve_user(&self, raw_id: &str) -> Result<Option<User>, Error> {
        let Ok(user_id) = UserId::new(raw_id) else {
            return Ok(None);
        };
        self.user_repo
            .find_by_id(&user_id)
            .await
            .map_err(map_user_repository_error)
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LogExerciseOutcome, Error> {
        let Some(user) = self.resolve_user(&request.user_id).await? else {
            return Ok(LogExerciseOutcome::UnknownUser);
        };

        let invalid = |err: crate::domain::ExerciseValidationError| {
            Error::invalid_request(err.to_string())
        };
        let description = Description::new(request.description.unwrap_or_default())
            .map_err(invalid)?;
        let duration = parse_duration(request.duration.as_deref()).map_err(invalid)?;
        let date = parse_optional_date(request.date.as_deref())
            .map_err(invalid)?
            .unwrap_or_else(|| self.today());

        let exercise = Exercise::record_for(&user, description, duration, date);
        self.exercise_repo
            .insert(&exercise)
            .await
            .map_err(map_exercise_repository_error)?;

        debug!(user_id = %user.id(), exercise_id = %exercise.id(), "exercise logged");
        Ok(LogExerciseOutcome::Logged(exercise))
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLogOutcome, Error> {
        let Some(user) = self.resolve_user(&request.user_id).await? else {
            return Ok(ExerciseLogOutcome::UnknownUser);
        };

        let filter = LogQuery::from_params(&request.params)
            .map_err(|err| Error::invalid_request(err.to_string()))?
            .for_user(user.id().clone());
        let entries = self
            .exercise_repo
            .find(&filter)
            .await
            .map_err(map_exercise_repository_error)?;

        Ok(ExerciseLogOutcome::Found(ExerciseLog::new(user, entries)))
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
