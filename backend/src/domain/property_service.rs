//! Property domain service implementing registration and listing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    PropertyCommand, PropertyPersistenceError, PropertyQuery, PropertyRepository,
};
use crate::domain::{Error, NewProperty, Property, UserId};

/// Property service implementing the property driving ports.
#[derive(Clone)]
pub struct PropertyService<R> {
    properties: Arc<R>,
}

impl<R> PropertyService<R> {
    /// Create a new service over the given property repository.
    pub fn new(properties: Arc<R>) -> Self {
        Self { properties }
    }
}

pub(crate) fn map_property_error(error: PropertyPersistenceError) -> Error {
    match error {
        PropertyPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("property repository unavailable: {message}"))
        }
        PropertyPersistenceError::Query { message } => {
            Error::internal(format!("property repository error: {message}"))
        }
        PropertyPersistenceError::DuplicatePropertyId => {
            Error::conflict("property id already exists")
        }
    }
}

#[async_trait]
impl<R> PropertyCommand for PropertyService<R>
where
    R: PropertyRepository,
{
    async fn register_property(
        &self,
        owner: UserId,
        property: NewProperty,
    ) -> Result<Property, Error> {
        self.properties
            .insert(owner, &property)
            .await
            .map_err(map_property_error)
    }
}

#[async_trait]
impl<R> PropertyQuery for PropertyService<R>
where
    R: PropertyRepository,
{
    async fn list_properties(&self, owner: UserId) -> Result<Vec<Property>, Error> {
        self.properties
            .list_for_owner(owner)
            .await
            .map_err(map_property_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockPropertyRepository;
    use crate::domain::{ErrorCode, PropertyId, PropertyKind};

    fn new_property(property_id: &str) -> NewProperty {
        NewProperty::try_from_parts(property_id, "1 High St", "1200", "Commercial", "sole owner")
            .expect("valid property payload")
    }

    fn stored(owner: UserId, id: i32, property: &NewProperty) -> Property {
        Property {
            id,
            owner,
            property_id: property.property_id.clone(),
            address: property.address.clone(),
            size: property.size.clone(),
            kind: property.kind,
            ownership_details: property.ownership_details.clone(),
        }
    }

    #[tokio::test]
    async fn register_property_returns_stored_row() {
        let owner = UserId::new(1);
        let payload = new_property("P100");
        let row = stored(owner, 1, &payload);
        let returned = row.clone();

        let mut repo = MockPropertyRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(move |_, _| Ok(returned));

        let service = PropertyService::new(Arc::new(repo));
        let property = service
            .register_property(owner, payload)
            .await
            .expect("registration succeeds");

        assert_eq!(property, row);
        assert_eq!(property.kind, PropertyKind::Commercial);
    }

    #[tokio::test]
    async fn register_property_surfaces_duplicate_id_as_conflict() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_, _| Err(PropertyPersistenceError::DuplicatePropertyId));

        let service = PropertyService::new(Arc::new(repo));
        let err = service
            .register_property(UserId::new(2), new_property("P100"))
            .await
            .expect_err("duplicate must fail");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "property id already exists");
    }

    #[tokio::test]
    async fn list_properties_passes_through_owner_scope() {
        let owner = UserId::new(3);
        let payload = new_property("P7");
        let row = stored(owner, 4, &payload);
        let returned = vec![row.clone()];

        let mut repo = MockPropertyRepository::new();
        repo.expect_list_for_owner()
            .withf(move |requested| *requested == owner)
            .times(1)
            .return_once(move |_| Ok(returned));

        let service = PropertyService::new(Arc::new(repo));
        let properties = service
            .list_properties(owner)
            .await
            .expect("listing succeeds");

        assert_eq!(properties, vec![row]);
    }

    #[tokio::test]
    async fn list_properties_is_empty_for_unknown_owner() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_list_for_owner()
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let service = PropertyService::new(Arc::new(repo));
        let properties = service
            .list_properties(UserId::new(9))
            .await
            .expect("listing succeeds");

        assert!(properties.is_empty());
    }

    #[rstest]
    #[case(
        PropertyPersistenceError::connection("database unavailable"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        PropertyPersistenceError::query("database query failed"),
        ErrorCode::InternalError
    )]
    #[tokio::test]
    async fn list_properties_maps_persistence_failures(
        #[case] failure: PropertyPersistenceError,
        #[case] expected_code: ErrorCode,
    ) {
        let mut repo = MockPropertyRepository::new();
        repo.expect_list_for_owner()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = PropertyService::new(Arc::new(repo));
        let err = service
            .list_properties(UserId::new(1))
            .await
            .expect_err("repository failures should surface as domain errors");

        assert_eq!(err.code(), expected_code);
    }

    #[test]
    fn property_id_type_round_trip() {
        let id = PropertyId::new("P100").expect("valid id");
        assert_eq!(id.as_ref(), "P100");
    }
}
