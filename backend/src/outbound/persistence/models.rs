//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

/// Insertable struct for registering users.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

/// Row struct for reading from the exercises table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: Option<f64>,
    pub performed_on: NaiveDate,
}

/// Insertable struct for logging exercises.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: &'a str,
    pub description: &'a str,
    pub duration: Option<f64>,
    pub performed_on: NaiveDate,
}
