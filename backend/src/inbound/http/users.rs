//! Users API handlers.
//!
//! ```text
//! POST /api/users   username=fcc_test
//! GET  /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateUserRequest;
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration form for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserForm {
    /// Display name, stored as given; must not be blank.
    #[schema(example = "fcc_test")]
    pub username: Option<String>,
}

/// Register a user under a new identifier.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = CreateUserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User registered", body = User),
        (status = 400, description = "Username missing or blank", body = Error),
        (status = 500, description = "Store rejected the insert", body = Error),
        (status = 503, description = "Store unreachable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<CreateUserForm>,
) -> ApiResult<web::Json<User>> {
    let request = CreateUserRequest {
        username: form.into_inner().username.unwrap_or_default(),
    };
    let user = state.users.create_user(request).await?;
    Ok(web::Json(user))
}

/// List every registered user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users in registration order", body = [User]),
        (status = 500, description = "Store query failed", body = Error),
        (status = 503, description = "Store unreachable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::form_config;
    use crate::inbound::http::test_utils::MockPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn fixture_user() -> User {
        User::try_from_strings(USER_ID, "fcc_test").expect("valid user")
    }

    async fn call(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(ports.into_state())
                .app_data(form_config())
                .service(web::scope("/api").service(create_user).service(list_users)),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn create_user_returns_username_and_id() {
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_create_user()
            .withf(|request| request.username == "fcc_test")
            .return_once(|_| Ok(fixture_user()));

        let (status, body) = call(
            ports,
            actix_test::TestRequest::post()
                .uri("/api/users")
                .set_form([("username", "fcc_test")]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "username": "fcc_test", "_id": USER_ID }));
    }

    #[actix_web::test]
    async fn create_user_forwards_missing_username_as_empty() {
        let mut ports = MockPorts::default();
        ports
            .users
            .expect_create_user()
            .withf(|request| request.username.is_empty())
            .return_once(|_| Err(Error::invalid_request("username is required")));

        let (status, body) = call(
            ports,
            actix_test::TestRequest::post()
                .uri("/api/users")
                .set_form([("other", "value")]),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("username is required")
        );
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[rstest]
    #[case(
        Error::service_unavailable("user repository unavailable: refused"),
        StatusCode::SERVICE_UNAVAILABLE
    )]
    #[case(
        Error::internal("user repository error: syntax"),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[actix_web::test]
    async fn list_users_reports_store_failures(#[case] error: Error, #[case] expected: StatusCode) {
        let message = error.message().to_owned();
        let mut ports = MockPorts::default();
        ports
            .users_query
            .expect_list_users()
            .return_once(move || Err(error));

        let (status, body) = call(ports, actix_test::TestRequest::get().uri("/api/users")).await;

        assert_eq!(status, expected);
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(message.as_str())
        );
    }

    #[actix_web::test]
    async fn list_users_returns_array() {
        let mut ports = MockPorts::default();
        ports
            .users_query
            .expect_list_users()
            .return_once(|| Ok(vec![fixture_user()]));

        let (status, body) = call(ports, actix_test::TestRequest::get().uri("/api/users")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "username": "fcc_test", "_id": USER_ID }]));
    }
}
