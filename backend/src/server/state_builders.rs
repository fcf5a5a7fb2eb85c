//! Builders wiring Diesel repositories into the HTTP driving ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use exercise_tracker::domain::{ExerciseService, UsersService};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::persistence::{
    DbPool, DieselExerciseRepository, DieselUserRepository,
};

/// Build the handler state over a shared connection pool.
///
/// Both services share one user repository so the unknown-user check on the
/// exercise routes sees the same rows as user registration.
pub fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let user_repo = Arc::new(DieselUserRepository::new(pool.clone()));
    let exercise_repo = Arc::new(DieselExerciseRepository::new(pool.clone()));

    let users = Arc::new(UsersService::new(user_repo.clone()));
    let exercises = Arc::new(ExerciseService::new(
        user_repo,
        exercise_repo,
        Arc::new(DefaultClock),
    ));

    web::Data::new(HttpState::new(
        users.clone(),
        users,
        exercises.clone(),
        exercises,
    ))
}
