//! Test helpers for HTTP handler unit tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockExerciseCommand, MockExerciseLogQuery, MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; unset expectations panic when called.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub exercises: MockExerciseCommand,
    pub exercise_log: MockExerciseLogQuery,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.users),
            Arc::new(self.users_query),
            Arc::new(self.exercises),
            Arc::new(self.exercise_log),
        ))
    }
}
