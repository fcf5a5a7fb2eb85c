//! Domain primitives, ports and services.
//!
//! Purpose: Define strongly typed entities used by the API and persistence
//! layers, plus the services implementing the driving ports. Types are
//! immutable once constructed and document their invariants and serialisation
//! contracts in their Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): registered user and its identifier.
//! - Exercise (alias to `exercise::Exercise`): logged exercise.
//! - LogQuery (alias to `log_query::LogQuery`): interpreted log parameters.

pub mod error;
pub mod exercise;
pub mod exercise_service;
pub mod log_query;
pub mod ports;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    Description, Exercise, ExerciseDate, ExerciseDraft, ExerciseValidationError, parse_duration,
    parse_optional_date,
};
pub use self::exercise_service::ExerciseService;
pub use self::log_query::{
    ExerciseFilter, LogLimit, LogQuery, LogQueryError, LogQueryParams, LogRange,
};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::users_service::UsersService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
