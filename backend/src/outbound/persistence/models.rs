//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::{payments, properties, users};

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Row struct for reading from the properties table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PropertyRow {
    pub id: i32,
    pub user_id: i32,
    pub property_id: String,
    pub address: String,
    pub size: String,
    pub kind: String,
    pub ownership_details: String,
}

/// Insertable struct for creating new property records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = properties)]
pub(crate) struct NewPropertyRow<'a> {
    pub user_id: i32,
    pub property_id: &'a str,
    pub address: &'a str,
    pub size: &'a str,
    pub kind: &'a str,
    pub ownership_details: &'a str,
}

/// Row struct for reading from the payments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PaymentRow {
    pub id: i32,
    pub property_id: String,
    pub amount: f64,
    pub payment_date: String,
}

/// Insertable struct for appending payment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub(crate) struct NewPaymentRow<'a> {
    pub property_id: &'a str,
    pub amount: f64,
    pub payment_date: &'a str,
}
