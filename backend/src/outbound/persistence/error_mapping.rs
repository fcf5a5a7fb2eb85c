//! Shared Diesel error mapping for the repositories.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(super) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Driver detail is logged at debug level and replaced with a short, stable
/// message before it reaches clients.
pub(super) fn map_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            query("referenced record does not exist")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            query("record failed a database check")
        }
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    struct Info;

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "driver detail"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn map(error: DieselError) -> Mapped {
        map_diesel_error(
            error,
            |message| Mapped::Query(message.to_owned()),
            |message| Mapped::Connection(message.to_owned()),
        )
    }

    #[rstest]
    #[case(
        DatabaseErrorKind::ClosedConnection,
        Mapped::Connection("database connection error".to_owned())
    )]
    #[case(
        DatabaseErrorKind::ForeignKeyViolation,
        Mapped::Query("referenced record does not exist".to_owned())
    )]
    #[case(DatabaseErrorKind::UniqueViolation, Mapped::Query("database error".to_owned()))]
    fn database_errors_hide_driver_detail(
        #[case] kind: DatabaseErrorKind,
        #[case] expected: Mapped,
    ) {
        assert_eq!(map(DieselError::DatabaseError(kind, Box::new(Info))), expected);
    }

    #[rstest]
    fn not_found_maps_to_query() {
        assert_eq!(
            map(DieselError::NotFound),
            Mapped::Query("record not found".to_owned())
        );
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn pool_errors_map_to_connection(#[case] error: PoolError, #[case] expected: &str) {
        let mapped = map_pool_error(error, Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection(expected.to_owned()));
    }
}
