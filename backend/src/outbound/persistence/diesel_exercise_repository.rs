//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! The date window is an open interval on `performed_on`; results keep
//! insertion order and the limit is applied in SQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{
    Description, Exercise, ExerciseDate, ExerciseDraft, ExerciseFilter, LogLimit, LogRange,
    UserId, Username,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the exercise repository port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ExercisePersistenceError {
    map_pool_error(error, ExercisePersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    map_diesel_error(
        error,
        ExercisePersistenceError::query,
        ExercisePersistenceError::connection,
    )
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    let ExerciseRow {
        id,
        user_id,
        username,
        description,
        duration,
        performed_on,
    } = row;
    let corrupt = |err: &dyn std::fmt::Display| {
        ExercisePersistenceError::query(format!("stored exercise {id}: {err}"))
    };

    Ok(Exercise::new(ExerciseDraft {
        id,
        user_id: UserId::from_uuid(user_id),
        username: Username::new(username).map_err(|err| corrupt(&err))?,
        description: Description::new(description).map_err(|err| corrupt(&err))?,
        duration,
        date: ExerciseDate::new(performed_on),
    }))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewExerciseRow {
            id: exercise.id(),
            user_id: *exercise.user_id().as_uuid(),
            username: exercise.username().as_ref(),
            description: exercise.description().as_ref(),
            duration: exercise.duration(),
            performed_on: exercise.date().as_naive_date(),
        };

        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(*filter.user_id.as_uuid()))
            .order((exercises::created_at.asc(), exercises::id.asc()))
            .select(ExerciseRow::as_select())
            .into_boxed();

        if let LogRange::Between { from, to } = filter.range {
            query = query
                .filter(exercises::performed_on.gt(from.as_naive_date()))
                .filter(exercises::performed_on.lt(to.as_naive_date()));
        }
        if let LogLimit::AtMost(limit) = filter.limit {
            query = query.limit(i64::from(limit));
        }

        let rows: Vec<ExerciseRow> = query.load(&mut conn).await.map_err(diesel_error)?;
        rows.into_iter().map(row_to_exercise).collect()
    }
}
