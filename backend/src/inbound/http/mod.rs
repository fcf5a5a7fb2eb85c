//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

use crate::domain::Error;

pub mod error;
pub mod exercises;
pub mod health;
pub mod home;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Form extractor settings rendering decode failures as the error envelope.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid form body: {err}")).into()
    })
}

/// Query extractor settings rendering decode failures as the error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// REST endpoints mounted under `/api`.
///
/// Extractor configuration travels with the scope so every route reports
/// malformed input through the JSON error envelope.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .app_data(form_config())
        .app_data(query_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(exercises::log_exercise)
        .service(exercises::exercise_log)
}
