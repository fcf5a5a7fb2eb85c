//! Exercise API handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises   description=run&duration=30&date=2022-05-06
//! GET  /api/users/{id}/logs?from=2022-01-01&to=2022-12-31&limit=5
//! ```
//!
//! An unknown user is not an error status on either route: logging answers
//! with the plain text `Unknown userId`, the log read with a JSON
//! `{"message": "Unknown userId"}` body.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    ExerciseLog, ExerciseLogOutcome, ExerciseLogRequest, LogExerciseOutcome, LogExerciseRequest,
};
use crate::domain::{Error, Exercise, LogQueryParams};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const UNKNOWN_USER: &str = "Unknown userId";

/// Exercise form for `POST /api/users/{id}/exercises`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ExerciseForm {
    /// Required free text.
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Minutes.
    #[schema(example = "30")]
    pub duration: Option<String>,
    /// `YYYY-MM-DD`; today when omitted.
    #[schema(example = "2022-05-06")]
    pub date: Option<String>,
}

/// Stored exercise echoed back to the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    /// Owning user's identifier.
    #[serde(rename = "_id")]
    pub user_id: String,
    /// Owning user's name.
    pub username: String,
    /// Day performed, as `Www Mmm DD YYYY`.
    #[schema(example = "Fri May 06 2022")]
    pub date: String,
    /// Minutes; omitted when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// What was done.
    pub description: String,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            user_id: exercise.user_id().to_string(),
            username: exercise.username().to_string(),
            date: exercise.date().to_display_string(),
            duration: exercise.duration(),
            description: exercise.description().as_ref().to_owned(),
        }
    }
}

/// Query parameters for `GET /api/users/{id}/logs`.
///
/// The date window applies only when `from`, `to` and `limit` are all given.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryForm {
    /// Exclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Exclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum entries; only the leading integer counts, and it must be positive.
    pub limit: Option<String>,
}

impl From<LogQueryForm> for LogQueryParams {
    fn from(form: LogQueryForm) -> Self {
        Self {
            from: form.from,
            to: form.to,
            limit: form.limit,
        }
    }
}

/// One entry of an exercise log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    /// What was done.
    pub description: String,
    /// Minutes; omitted when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Same rendering as [`ExerciseResponse::date`].
    #[schema(example = "Fri May 06 2022")]
    pub date: String,
}

/// Exercise log for one user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogResponse {
    /// User identifier.
    #[serde(rename = "_id")]
    pub user_id: String,
    /// User's name.
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    /// Entries in insertion order.
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let entries: Vec<LogEntry> = log
            .entries()
            .iter()
            .map(|exercise| LogEntry {
                description: exercise.description().as_ref().to_owned(),
                duration: exercise.duration(),
                date: exercise.date().to_display_string(),
            })
            .collect();
        Self {
            user_id: log.user().id().to_string(),
            username: log.user().username().to_string(),
            count: entries.len(),
            log: entries,
        }
    }
}

/// Body returned by the log route for an unknown user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnknownUserResponse {
    /// Always `Unknown userId`.
    #[schema(example = "Unknown userId")]
    pub message: String,
}

/// Log an exercise against a user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User identifier")),
    request_body(content = ExerciseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise stored, or plain text `Unknown userId`", body = ExerciseResponse),
        (status = 400, description = "Description missing or field malformed", body = Error),
        (status = 500, description = "Store rejected the insert", body = Error),
        (status = 503, description = "Store unreachable", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "logExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn log_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<ExerciseForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let request = LogExerciseRequest {
        user_id: path.into_inner(),
        description: form.description,
        duration: form.duration,
        date: form.date,
    };

    match state.exercises.log_exercise(request).await? {
        LogExerciseOutcome::Logged(exercise) => {
            Ok(HttpResponse::Ok().json(ExerciseResponse::from(&exercise)))
        }
        LogExerciseOutcome::UnknownUser => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(UNKNOWN_USER)),
    }
}

/// Read a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User identifier"), LogQueryForm),
    responses(
        (status = 200, description = "Exercise log, or `{\"message\": \"Unknown userId\"}`", body = LogResponse),
        (status = 400, description = "Malformed window date", body = Error),
        (status = 500, description = "Store query failed", body = Error),
        (status = 503, description = "Store unreachable", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "exerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryForm>,
) -> ApiResult<HttpResponse> {
    let request = ExerciseLogRequest {
        user_id: path.into_inner(),
        params: query.into_inner().into(),
    };

    match state.exercise_log.exercise_log(request).await? {
        ExerciseLogOutcome::Found(log) => Ok(HttpResponse::Ok().json(LogResponse::from(log))),
        ExerciseLogOutcome::UnknownUser => Ok(HttpResponse::Ok().json(UnknownUserResponse {
            message: UNKNOWN_USER.to_owned(),
        })),
    }
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
