//! Exercise log query construction.
//!
//! A log request carries optional `from`, `to` and `limit` parameters. The
//! date window is only applied when all three are present and non-empty; in
//! every other case the log covers the user's full history. `limit` is honoured
//! whenever its leading integer is positive.

use std::fmt;

use crate::domain::{ExerciseDate, ExerciseValidationError, UserId};

/// Raw log parameters as received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQueryParams {
    /// Exclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Exclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum entry count, read up to the first non-digit.
    pub limit: Option<String>,
}

/// Errors raised while interpreting [`LogQueryParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogQueryError {
    /// `from` is not a valid date.
    InvalidFrom(ExerciseValidationError),
    /// `to` is not a valid date.
    InvalidTo(ExerciseValidationError),
}

impl fmt::Display for LogQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrom(err) => write!(f, "invalid from parameter: {err}"),
            Self::InvalidTo(err) => write!(f, "invalid to parameter: {err}"),
        }
    }
}

impl std::error::Error for LogQueryError {}

/// Date window applied to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRange {
    /// Every exercise is eligible.
    Unbounded,
    /// Exercises strictly after `from` and strictly before `to`.
    Between {
        /// Exclusive lower bound.
        from: ExerciseDate,
        /// Exclusive upper bound.
        to: ExerciseDate,
    },
}

impl LogRange {
    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: ExerciseDate) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Between { from, to } => *from < date && date < *to,
        }
    }
}

/// Maximum number of entries returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLimit {
    /// Return every matching entry.
    Unbounded,
    /// Return at most this many entries.
    AtMost(u32),
}

impl LogLimit {
    fn parse(raw: Option<&str>) -> Self {
        raw.and_then(leading_integer)
            .filter(|value| *value > 0)
            .map_or(Self::Unbounded, |value| {
                Self::AtMost(u32::try_from(value).unwrap_or(u32::MAX))
            })
    }

    /// Limit as a `usize`, if bounded.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(value) => usize::try_from(*value).ok(),
        }
    }
}

/// Interpreted log parameters, independent of any user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    range: LogRange,
    limit: LogLimit,
}

impl LogQuery {
    /// Interpret raw parameters.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::{LogLimit, LogQuery, LogQueryParams, LogRange};
    ///
    /// let query = LogQuery::from_params(&LogQueryParams {
    ///     from: Some("2021-01-01".into()),
    ///     to: None,
    ///     limit: Some("2".into()),
    /// })
    /// .expect("valid params");
    /// assert_eq!(query.range(), LogRange::Unbounded);
    /// assert_eq!(query.limit(), LogLimit::AtMost(2));
    /// ```
    pub fn from_params(params: &LogQueryParams) -> Result<Self, LogQueryError> {
        let from = non_empty(params.from.as_deref());
        let to = non_empty(params.to.as_deref());
        let limit = non_empty(params.limit.as_deref());

        let range = match (from, to, limit) {
            (Some(from), Some(to), Some(_)) => LogRange::Between {
                from: from.parse().map_err(LogQueryError::InvalidFrom)?,
                to: to.parse().map_err(LogQueryError::InvalidTo)?,
            },
            _ => LogRange::Unbounded,
        };

        Ok(Self {
            range,
            limit: LogLimit::parse(limit),
        })
    }

    /// Window to apply.
    pub fn range(&self) -> LogRange {
        self.range
    }

    /// Entry cap to apply.
    pub fn limit(&self) -> LogLimit {
        self.limit
    }

    /// Bind the query to a user, producing a repository filter.
    pub fn for_user(self, user_id: UserId) -> ExerciseFilter {
        ExerciseFilter {
            user_id,
            range: self.range,
            limit: self.limit,
        }
    }
}

/// Leading base-10 integer of `raw`, ignoring anything after the digits.
///
/// `"2abc"` and `"1.5"` yield 2 and 1; input without leading digits yields
/// `None`. Positive values too large for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let end = trimmed.len() - unsigned.len() + digits;
    match trimmed.get(..end)?.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => (!trimmed.starts_with('-')).then_some(i64::MAX),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Repository-level selection of a user's exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    /// Owner whose exercises are read.
    pub user_id: UserId,
    /// Date window.
    pub range: LogRange,
    /// Entry cap, applied after the window.
    pub limit: LogLimit,
}
