//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users. Usernames are not unique.
    users (id) {
        id -> Uuid,
        username -> Text,
        /// Insertion time; orders the user listing.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises with the owner's username copied in. `user_id` is
    /// checked against `users` when the exercise is logged, not by a
    /// foreign key.
    exercises (id) {
        id -> Uuid,
        user_id -> Uuid,
        username -> Text,
        description -> Text,
        duration -> Nullable<Float8>,
        /// Calendar day of the exercise.
        performed_on -> Date,
        /// Insertion time; orders the exercise log.
        created_at -> Timestamptz,
    }
}
