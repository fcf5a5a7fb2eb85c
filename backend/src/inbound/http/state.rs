//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExerciseCommand, ExerciseLogQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration.
    pub users: Arc<dyn UsersCommand>,
    /// User listing.
    pub users_query: Arc<dyn UsersQuery>,
    /// Exercise logging.
    pub exercises: Arc<dyn ExerciseCommand>,
    /// Exercise log reads.
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExerciseCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }
}
