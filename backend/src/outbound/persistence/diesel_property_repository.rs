//! SQLite-backed `PropertyRepository` implementation using Diesel ORM.
//!
//! The unique index on the external `property_id` enforces global uniqueness
//! across all users; listings read primary-key ascending so callers observe
//! insertion order.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{PropertyPersistenceError, PropertyRepository};
use crate::domain::{NewProperty, Property, PropertyId, PropertyKind, UserId};

use super::models::{NewPropertyRow, PropertyRow};
use super::schema::properties;
use super::storage::{Storage, StorageError};

/// Diesel-backed implementation of the `PropertyRepository` port.
#[derive(Clone)]
pub struct DieselPropertyRepository {
    storage: Storage,
}

impl DieselPropertyRepository {
    /// Create a new repository over the given storage handle.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

/// Map storage handle errors to domain property persistence errors.
fn map_storage_error(error: StorageError) -> PropertyPersistenceError {
    PropertyPersistenceError::connection(error.to_string())
}

/// Map Diesel errors to domain property persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> PropertyPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PropertyPersistenceError::DuplicatePropertyId
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PropertyPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => PropertyPersistenceError::query("record not found"),
        _ => PropertyPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain Property.
///
/// A stored classification outside the enumerated set means the row was
/// written by something other than this service; surface it as a query
/// error rather than guessing a rate.
fn row_to_property(row: PropertyRow) -> Result<Property, PropertyPersistenceError> {
    let kind = PropertyKind::parse(&row.kind).map_err(|err| {
        tracing::warn!(value = %row.kind, row_id = row.id, "unrecognised property type in store");
        PropertyPersistenceError::query(err.to_string())
    })?;
    let property_id = PropertyId::new(row.property_id)
        .map_err(|err| PropertyPersistenceError::query(err.to_string()))?;

    Ok(Property {
        id: row.id,
        owner: UserId::new(row.user_id),
        property_id,
        address: row.address,
        size: row.size,
        kind,
        ownership_details: row.ownership_details,
    })
}

#[async_trait]
impl PropertyRepository for DieselPropertyRepository {
    async fn insert(
        &self,
        owner: UserId,
        property: &NewProperty,
    ) -> Result<Property, PropertyPersistenceError> {
        let row = self
            .storage
            .with_conn(|conn| {
                let new_row = NewPropertyRow {
                    user_id: owner.get(),
                    property_id: property.property_id.as_ref(),
                    address: property.address.as_str(),
                    size: property.size.as_str(),
                    kind: property.kind.as_str(),
                    ownership_details: property.ownership_details.as_str(),
                };

                diesel::insert_into(properties::table)
                    .values(&new_row)
                    .returning(properties::id)
                    .get_result::<i32>(conn)
            })
            .map_err(map_storage_error)?;

        let id = row.map_err(map_diesel_error)?;
        Ok(Property {
            id,
            owner,
            property_id: property.property_id.clone(),
            address: property.address.clone(),
            size: property.size.clone(),
            kind: property.kind,
            ownership_details: property.ownership_details.clone(),
        })
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Property>, PropertyPersistenceError> {
        let rows = self
            .storage
            .with_conn(|conn| {
                properties::table
                    .filter(properties::user_id.eq(owner.get()))
                    .order(properties::id.asc())
                    .select(PropertyRow::as_select())
                    .load::<PropertyRow>(conn)
            })
            .map_err(map_storage_error)?;

        rows.map_err(map_diesel_error)?
            .into_iter()
            .map(row_to_property)
            .collect()
    }

    async fn find_by_property_id(
        &self,
        property_id: &PropertyId,
    ) -> Result<Option<Property>, PropertyPersistenceError> {
        let row = self
            .storage
            .with_conn(|conn| {
                properties::table
                    .filter(properties::property_id.eq(property_id.as_ref()))
                    .select(PropertyRow::as_select())
                    .first::<PropertyRow>(conn)
                    .optional()
            })
            .map_err(map_storage_error)?;

        row.map_err(map_diesel_error)?
            .map(row_to_property)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for property persistence against in-memory stores.
    use super::*;

    fn repository() -> DieselPropertyRepository {
        DieselPropertyRepository::new(Storage::in_memory().expect("in-memory store"))
    }

    fn payload(property_id: &str, kind: &str) -> NewProperty {
        NewProperty::try_from_parts(property_id, "1 High St", "1200", kind, "sole owner")
            .expect("valid property payload")
    }

    #[tokio::test]
    async fn insert_returns_the_stored_row() {
        let repo = repository();
        let owner = UserId::new(1);

        let property = repo
            .insert(owner, &payload("P100", "Commercial"))
            .await
            .expect("insert succeeds");

        assert_eq!(property.id, 1);
        assert_eq!(property.owner, owner);
        assert_eq!(property.property_id.as_ref(), "P100");
        assert_eq!(property.kind, PropertyKind::Commercial);
    }

    #[tokio::test]
    async fn duplicate_property_id_is_rejected_across_users() {
        let repo = repository();

        repo.insert(UserId::new(1), &payload("P100", "Residential"))
            .await
            .expect("first insert succeeds");
        let err = repo
            .insert(UserId::new(2), &payload("P100", "Industrial"))
            .await
            .expect_err("duplicate id must fail even under another user");

        assert_eq!(err, PropertyPersistenceError::DuplicatePropertyId);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_owner_in_insertion_order() {
        let repo = repository();
        let alice = UserId::new(1);
        let bob = UserId::new(2);

        repo.insert(alice, &payload("P2", "Residential"))
            .await
            .expect("insert succeeds");
        repo.insert(bob, &payload("P9", "Industrial"))
            .await
            .expect("insert succeeds");
        repo.insert(alice, &payload("P1", "Commercial"))
            .await
            .expect("insert succeeds");

        let listed = repo.list_for_owner(alice).await.expect("listing succeeds");
        let ids: Vec<&str> = listed.iter().map(|p| p.property_id.as_ref()).collect();

        // Insertion order, not lexicographic order, and no other user's rows.
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[tokio::test]
    async fn listing_is_empty_for_unknown_owner() {
        let repo = repository();
        let listed = repo
            .list_for_owner(UserId::new(42))
            .await
            .expect("listing succeeds");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn find_by_property_id_ignores_ownership() {
        let repo = repository();
        repo.insert(UserId::new(1), &payload("P100", "Commercial"))
            .await
            .expect("insert succeeds");

        let property_id = PropertyId::new("P100").expect("valid id");
        let found = repo
            .find_by_property_id(&property_id)
            .await
            .expect("lookup succeeds")
            .expect("property exists");
        assert_eq!(found.owner, UserId::new(1));

        let missing = repo
            .find_by_property_id(&PropertyId::new("NOPE").expect("valid id"))
            .await
            .expect("lookup succeeds");
        assert!(missing.is_none());
    }
}
