//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the payload schemas. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};
use crate::inbound::http::exercises::{
    ExerciseForm, ExerciseResponse, LogEntry, LogResponse, UnknownUserResponse,
};
use crate::inbound::http::users::CreateUserForm;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, log exercises and read date-filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::index,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::log_exercise,
        crate::inbound::http::exercises::exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Error,
        ErrorCode,
        CreateUserForm,
        ExerciseForm,
        ExerciseResponse,
        LogEntry,
        LogResponse,
        UnknownUserResponse
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise logging and log retrieval"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "home", description = "Landing page")
    )
)]
pub struct ApiDoc;
