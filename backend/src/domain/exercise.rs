//! Exercise data model.
//!
//! Exercises are immutable once logged. The owning user's name is copied onto
//! each record at creation time and never refreshed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{User, UserId, Username};

/// Validation errors returned by the exercise constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    /// Description was missing or blank.
    EmptyDescription,
    /// Date was not a real `YYYY-MM-DD` day.
    InvalidDate {
        /// Rejected input.
        value: String,
    },
    /// Duration was not a finite number.
    InvalidDuration {
        /// Rejected input.
        value: String,
    },
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description is required"),
            Self::InvalidDate { value } => {
                write!(f, "date must use the YYYY-MM-DD format, got {value:?}")
            }
            Self::InvalidDuration { value } => {
                write!(f, "duration must be a number, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Calendar day an exercise was performed on.
///
/// Stored and compared as a calendar date; rendered for clients in the
/// `Mon Jan 01 1990` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseDate(NaiveDate);

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

impl ExerciseDate {
    /// Wrap a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying calendar date.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Render the date as weekday, month, zero-padded day and year.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDate;
    ///
    /// let date: ExerciseDate = "1990-01-01".parse().expect("valid date");
    /// assert_eq!(date.to_display_string(), "Mon Jan 01 1990");
    /// ```
    pub fn to_display_string(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl FromStr for ExerciseDate {
    type Err = ExerciseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDate {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

/// Free-text description of the exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parse an optional duration submitted as text.
///
/// Missing or empty input means "no duration". Anything else must be a finite
/// number; the value itself is not range checked.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::parse_duration;
///
/// assert_eq!(parse_duration(Some("30")), Ok(Some(30.0)));
/// assert_eq!(parse_duration(Some("")), Ok(None));
/// assert!(parse_duration(Some("half an hour")).is_err());
/// ```
pub fn parse_duration(raw: Option<&str>) -> Result<Option<f64>, ExerciseValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ExerciseValidationError::InvalidDuration {
            value: raw.to_owned(),
        }),
    }
}

/// Parse an optional date submitted as text; empty input counts as missing.
pub fn parse_optional_date(
    raw: Option<&str>,
) -> Result<Option<ExerciseDate>, ExerciseValidationError> {
    raw.filter(|value| !value.is_empty())
        .map(str::parse)
        .transpose()
}

/// Logged exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    id: Uuid,
    user_id: UserId,
    username: Username,
    description: Description,
    duration: Option<f64>,
    date: ExerciseDate,
}

/// Input for [`Exercise::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    /// Exercise identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: UserId,
    /// Owner's username at logging time.
    pub username: Username,
    /// What was done.
    pub description: Description,
    /// Minutes, when supplied.
    pub duration: Option<f64>,
    /// Day performed.
    pub date: ExerciseDate,
}

impl Exercise {
    /// Assemble an exercise from validated parts.
    pub fn new(draft: ExerciseDraft) -> Self {
        let ExerciseDraft {
            id,
            user_id,
            username,
            description,
            duration,
            date,
        } = draft;
        Self {
            id,
            user_id,
            username,
            description,
            duration,
            date,
        }
    }

    /// Record a new exercise for `user`, copying the username onto it.
    pub fn record_for(
        user: &User,
        description: Description,
        duration: Option<f64>,
        date: ExerciseDate,
    ) -> Self {
        Self::new(ExerciseDraft {
            id: Uuid::new_v4(),
            user_id: user.id().clone(),
            username: user.username().clone(),
            description,
            duration,
            date,
        })
    }

    /// Identifier of this exercise record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owning user's identifier.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Username copied from the owner at creation time.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Exercise description.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Duration, if one was given.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Calendar day of the exercise.
    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
