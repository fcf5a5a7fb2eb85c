//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier was blank.
    EmptyId,
    /// Identifier was not a UUID.
    InvalidId,
    /// Username was blank.
    EmptyUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyUsername => write!(f, "username is required"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
///
/// Any textual UUID form is accepted; the canonical hyphenated lowercase form
/// is what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self::from_uuid(parsed))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Username as submitted at registration.
///
/// Usernames are not unique; the only rule is that they carry some
/// non-whitespace content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered user.
///
/// Serialises as `{"username": "...", "_id": "..."}`, the shape returned by
/// both the registration and the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = String, example = "fcc_test")]
    username: Username,
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(id: UserId, username: Username) -> Self {
        Self { username, id }
    }

    /// Validate raw strings and build a user.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::User;
    ///
    /// let user = User::try_from_strings("3fa85f64-5717-4562-b3fc-2c963f66afa6", "fcc_test")
    ///     .expect("valid user");
    /// assert_eq!(user.username().as_ref(), "fcc_test");
    /// ```
    pub fn try_from_strings(
        id: impl AsRef<str>,
        username: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, Username::new(username)?))
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Username captured at registration.
    pub fn username(&self) -> &Username {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for user validation and wire shape.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
    fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    #[case(ID)]
    #[case("3FA85F64-5717-4562-B3FC-2C963F66AFA6")]
    #[case("3fa85f6457174562b3fc2c963f66afa6")]
    fn user_id_renders_canonical_form(#[case] raw: &str) {
        let id = UserId::new(raw).expect("valid id");
        assert_eq!(id.as_ref(), ID);
        assert_eq!(id, UserId::new(ID).expect("valid id"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn username_rejects_blank_values(#[case] raw: &str) {
        assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
    }

    #[rstest]
    fn username_allows_any_non_blank_text() {
        let username = Username::new("fcc test 42!").expect("valid username");
        assert_eq!(username.as_ref(), "fcc test 42!");
    }

    #[rstest]
    fn user_serialises_with_underscore_id() {
        let user = User::try_from_strings(ID, "fcc_test").expect("valid user");
        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(value, json!({ "username": "fcc_test", "_id": ID }));
    }

    #[rstest]
    fn user_round_trips_through_json() {
        let user = User::try_from_strings(ID, "fcc_test").expect("valid user");
        let json = serde_json::to_string(&user).expect("serialise");
        let decoded: User = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(decoded, user);
    }
}
