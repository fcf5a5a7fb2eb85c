//! Test utilities for the exercise tracker crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Exercise, ExerciseFilter, User, UserId};

/// Failure the in-memory store should report instead of touching its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    /// Behave like an unreachable store.
    Connection,
    /// Behave like a store that rejects the statement.
    Query,
}

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    exercises: Vec<Exercise>,
    failure: Option<StoreFailure>,
}

/// In-memory store implementing both repository ports.
///
/// Keeps insertion order and applies log filters the same way the SQL
/// adapter does. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    /// Empty, healthy store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail until [`InMemoryStore::recover`].
    pub fn fail_with(&self, failure: StoreFailure) {
        self.lock().failure = Some(failure);
    }

    /// Clear any failure set by [`InMemoryStore::fail_with`].
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Snapshot of stored exercises in insertion order.
    pub fn exercises(&self) -> Vec<Exercise> {
        self.lock().exercises.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn user_error(failure: StoreFailure) -> UserPersistenceError {
    match failure {
        StoreFailure::Connection => UserPersistenceError::connection("in-memory store offline"),
        StoreFailure::Query => UserPersistenceError::query("in-memory store rejected query"),
    }
}

fn exercise_error(failure: StoreFailure) -> ExercisePersistenceError {
    match failure {
        StoreFailure::Connection => {
            ExercisePersistenceError::connection("in-memory store offline")
        }
        StoreFailure::Query => ExercisePersistenceError::query("in-memory store rejected query"),
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        if let Some(failure) = state.failure {
            return Err(user_error(failure));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock();
        if let Some(failure) = state.failure {
            return Err(user_error(failure));
        }
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock();
        if let Some(failure) = state.failure {
            return Err(user_error(failure));
        }
        Ok(state.users.clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut state = self.lock();
        if let Some(failure) = state.failure {
            return Err(exercise_error(failure));
        }
        state.exercises.push(exercise.clone());
        Ok(())
    }

    async fn find(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let state = self.lock();
        if let Some(failure) = state.failure {
            return Err(exercise_error(failure));
        }
        let matching = state
            .exercises
            .iter()
            .filter(|exercise| exercise.user_id() == &filter.user_id)
            .filter(|exercise| filter.range.contains(exercise.date()))
            .cloned();
        Ok(match filter.limit.as_usize() {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    /// Clock frozen at `utc_now`.
    pub fn new(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }

    /// Clock frozen at midday UTC on the given calendar day.
    ///
    /// # Panics
    ///
    /// Panics when the date does not exist.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let utc_now = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"));
        Self::new(utc_now)
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, LogLimit, LogRange};
    use rstest::rstest;

    fn user(name: &str) -> User {
        User::new(UserId::random(), crate::domain::Username::new(name).expect("name"))
    }

    fn exercise(owner: &User, description: &str, date: &str) -> Exercise {
        Exercise::record_for(
            owner,
            Description::new(description).expect("description"),
            None,
            date.parse().expect("date"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn find_filters_by_user_range_and_limit() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        let bob = user("bob");
        UserRepository::insert(&store, &alice).await.expect("alice");
        UserRepository::insert(&store, &bob).await.expect("bob");
        for (owner, description, date) in [
            (&alice, "a1", "2021-01-01"),
            (&bob, "b1", "2021-01-02"),
            (&alice, "a2", "2021-01-03"),
            (&alice, "a3", "2021-01-04"),
        ] {
            ExerciseRepository::insert(&store, &exercise(owner, description, date))
                .await
                .expect("exercise");
        }

        let found = store
            .find(&ExerciseFilter {
                user_id: alice.id().clone(),
                range: LogRange::Between {
                    from: "2021-01-01".parse().expect("date"),
                    to: "2021-01-05".parse().expect("date"),
                },
                limit: LogLimit::AtMost(1),
            })
            .await
            .expect("find");

        let descriptions: Vec<_> = found
            .iter()
            .map(|exercise| exercise.description().as_ref().to_owned())
            .collect();
        assert_eq!(descriptions, ["a2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_keeps_exercises_whose_owner_is_gone() {
        let store = InMemoryStore::new();
        let ghost = user("ghost");

        ExerciseRepository::insert(&store, &exercise(&ghost, "run", "2021-01-01"))
            .await
            .expect("no owner check at write time");
        assert_eq!(store.exercises().len(), 1);
    }

    #[rstest]
    #[case(StoreFailure::Connection)]
    #[case(StoreFailure::Query)]
    #[tokio::test]
    async fn injected_failures_apply_until_recovery(#[case] failure: StoreFailure) {
        let store = InMemoryStore::new();
        store.fail_with(failure);
        assert!(store.list_all().await.is_err());

        store.recover();
        assert_eq!(store.list_all().await.expect("list"), Vec::new());
    }

    #[rstest]
    fn fixture_clock_reports_fixed_day() {
        let clock = FixtureClock::on(2026, 10, 19);
        assert_eq!(clock.utc().date_naive().to_string(), "2026-10-19");
    }
}
