//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// User accounts table.
    ///
    /// Stores registered users with their raw credential strings. The
    /// username carries the only uniqueness constraint.
    users (id) {
        /// Primary key: autoincrement row id.
        id -> Integer,
        /// Unique username, compared as an exact string.
        username -> Text,
        /// Opaque password string, compared as an exact string.
        password -> Text,
    }
}

diesel::table! {
    /// Registered properties table.
    ///
    /// Each row is owned by one user; the external `property_id` is unique
    /// across all users.
    properties (id) {
        /// Primary key: autoincrement row id.
        id -> Integer,
        /// Owning user's row id.
        user_id -> Integer,
        /// Unique external property identifier (business key).
        property_id -> Text,
        /// Street address.
        address -> Text,
        /// Free-form size text; never parsed numerically.
        size -> Text,
        /// Property classification string.
        #[sql_name = "type"]
        kind -> Text,
        /// Free-form ownership notes.
        ownership_details -> Text,
    }
}

diesel::table! {
    /// Append-only payment log.
    ///
    /// References properties by business key; the reference is declared but
    /// not enforced by the engine.
    payments (id) {
        /// Primary key: autoincrement row id.
        id -> Integer,
        /// External identifier of the paid property.
        property_id -> Text,
        /// Amount paid.
        amount -> Double,
        /// Server-assigned timestamp, `YYYY-MM-DD HH:MM:SS`.
        payment_date -> Text,
    }
}

diesel::joinable!(properties -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, properties, payments);
