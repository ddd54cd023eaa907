//! Property data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Validation errors returned by property constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValidationError {
    /// The external property identifier was missing.
    EmptyPropertyId,
    /// The property type string is not one of the enumerated kinds.
    UnknownKind {
        /// The rejected input value.
        value: String,
    },
}

impl fmt::Display for PropertyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPropertyId => write!(f, "property id must not be empty"),
            Self::UnknownKind { value } => write!(
                f,
                "unknown property type {value:?}; expected Residential, Commercial, or Industrial",
            ),
        }
    }
}

impl std::error::Error for PropertyValidationError {}

/// External property identifier, unique across all users.
///
/// This is the business key payments reference; it is distinct from the
/// store-assigned numeric row id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyId(String);

impl PropertyId {
    /// Validate and construct a [`PropertyId`] from owned input.
    pub fn new(id: impl Into<String>) -> Result<Self, PropertyValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PropertyValidationError::EmptyPropertyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for PropertyId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PropertyId> for String {
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PropertyId {
    type Error = PropertyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Enumerated property classification driving the tax rate.
///
/// The wire and storage representation is the capitalised name, matching the
/// fixed choice set the registration form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PropertyKind {
    /// Residential housing.
    Residential,
    /// Commercial premises.
    Commercial,
    /// Industrial sites.
    Industrial,
}

impl PropertyKind {
    /// Canonical string form used in storage and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }

    /// Parse the canonical string form.
    ///
    /// Out-of-set values are rejected here, at the boundary, so every
    /// downstream operation receives a known kind.
    pub fn parse(value: &str) -> Result<Self, PropertyValidationError> {
        match value {
            "Residential" => Ok(Self::Residential),
            "Commercial" => Ok(Self::Commercial),
            "Industrial" => Ok(Self::Industrial),
            other => Err(PropertyValidationError::UnknownKind {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PropertyKind {
    type Err = PropertyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A registered property row.
///
/// ## Invariants
/// - `property_id` is unique across all users (enforced by the store).
/// - `size` is stored exactly as supplied; it carries no numeric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Store-assigned row identifier.
    pub id: i32,
    /// Owning user.
    #[schema(value_type = i32)]
    pub owner: UserId,
    /// External property identifier.
    #[schema(value_type = String, example = "P100")]
    pub property_id: PropertyId,
    /// Street address.
    pub address: String,
    /// Free-form size text as entered at registration.
    pub size: String,
    /// Property classification.
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Free-form ownership notes.
    pub ownership_details: String,
}

/// Payload for registering a new property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    /// External property identifier.
    pub property_id: PropertyId,
    /// Street address.
    pub address: String,
    /// Free-form size text; accepted without numeric parsing.
    pub size: String,
    /// Property classification.
    pub kind: PropertyKind,
    /// Free-form ownership notes.
    pub ownership_details: String,
}

impl NewProperty {
    /// Validate and construct a registration payload from raw string inputs.
    ///
    /// Only the property id and kind are constrained; the remaining fields
    /// are stored exactly as supplied.
    pub fn try_from_parts(
        property_id: &str,
        address: &str,
        size: &str,
        kind: &str,
        ownership_details: &str,
    ) -> Result<Self, PropertyValidationError> {
        Ok(Self {
            property_id: PropertyId::new(property_id)?,
            address: address.to_owned(),
            size: size.to_owned(),
            kind: PropertyKind::parse(kind)?,
            ownership_details: ownership_details.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Residential", PropertyKind::Residential)]
    #[case("Commercial", PropertyKind::Commercial)]
    #[case("Industrial", PropertyKind::Industrial)]
    fn kind_parses_canonical_names(#[case] input: &str, #[case] expected: PropertyKind) {
        assert_eq!(PropertyKind::parse(input).expect("known kind"), expected);
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("residential")]
    #[case("COMMERCIAL")]
    #[case("Agricultural")]
    #[case("")]
    fn kind_rejects_out_of_set_values(#[case] input: &str) {
        let err = PropertyKind::parse(input).expect_err("unknown kind must fail");
        assert!(matches!(err, PropertyValidationError::UnknownKind { .. }));
    }

    #[test]
    fn property_id_must_not_be_empty() {
        let err = PropertyId::new("").expect_err("empty id must fail");
        assert_eq!(err, PropertyValidationError::EmptyPropertyId);
    }

    #[test]
    fn new_property_keeps_size_verbatim() {
        let property = NewProperty::try_from_parts("P1", "1 High St", "12a5", "Residential", "")
            .expect("valid payload");
        // Size carries no numeric meaning; arbitrary text survives.
        assert_eq!(property.size, "12a5");
        assert_eq!(property.ownership_details, "");
    }

    #[test]
    fn property_serializes_kind_under_type_key() {
        let property = Property {
            id: 1,
            owner: UserId::new(7),
            property_id: PropertyId::new("P100").expect("valid id"),
            address: "1 High St".to_owned(),
            size: "1200".to_owned(),
            kind: PropertyKind::Commercial,
            ownership_details: "sole owner".to_owned(),
        };

        let value = serde_json::to_value(&property).expect("serializable property");
        assert_eq!(value.get("type"), Some(&serde_json::json!("Commercial")));
        assert_eq!(value.get("propertyId"), Some(&serde_json::json!("P100")));
        assert!(value.get("kind").is_none());
    }
}
