//! Tax computation over the fixed rate table.
//!
//! The rate table is part of the service contract and has no configuration
//! override: Residential 1%, Commercial 1.5%, Industrial 2%.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PropertyId, PropertyKind};

/// Fractional tax rate for a property kind.
pub const fn rate_for(kind: PropertyKind) -> f64 {
    match kind {
        PropertyKind::Residential => 0.01,
        PropertyKind::Commercial => 0.015,
        PropertyKind::Industrial => 0.02,
    }
}

/// Compute the tax owed on a property value.
///
/// Pure function: `value * rate_for(kind)`. Out-of-set kinds are
/// unrepresentable, so no failure case exists here.
///
/// # Examples
/// ```
/// use taxo_backend::domain::{compute_tax, PropertyKind};
///
/// assert_eq!(compute_tax(PropertyKind::Commercial, 200_000.0), 3000.0);
/// ```
pub fn compute_tax(kind: PropertyKind, value: f64) -> f64 {
    value * rate_for(kind)
}

/// A tax computation result for a specific property.
///
/// Returned by the quote use-case so the caller can present the owed amount
/// before recording a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxQuote {
    /// External identifier of the quoted property.
    #[schema(value_type = String, example = "P100")]
    pub property_id: PropertyId,
    /// Classification the rate was drawn from.
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Property value the tax was computed over.
    pub value: f64,
    /// Fractional rate applied.
    #[schema(example = 0.015)]
    pub rate: f64,
    /// Tax owed.
    #[schema(example = 3000.0)]
    pub amount: f64,
}

impl TaxQuote {
    /// Build a quote for a property of the given kind and value.
    pub fn compute(property_id: PropertyId, kind: PropertyKind, value: f64) -> Self {
        Self {
            property_id,
            kind,
            value,
            rate: rate_for(kind),
            amount: compute_tax(kind, value),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PropertyKind::Residential, 0.01)]
    #[case(PropertyKind::Commercial, 0.015)]
    #[case(PropertyKind::Industrial, 0.02)]
    fn rate_table_is_fixed(#[case] kind: PropertyKind, #[case] expected: f64) {
        assert_eq!(rate_for(kind), expected);
    }

    #[rstest]
    #[case(PropertyKind::Residential, 200_000.0, 2000.0)]
    #[case(PropertyKind::Commercial, 200_000.0, 3000.0)]
    #[case(PropertyKind::Industrial, 200_000.0, 4000.0)]
    #[case(PropertyKind::Residential, 0.0, 0.0)]
    fn computes_exact_amounts(
        #[case] kind: PropertyKind,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(compute_tax(kind, value), expected);
    }

    #[test]
    fn quote_carries_rate_and_amount() {
        let property_id = PropertyId::new("P100").expect("valid id");
        let quote = TaxQuote::compute(property_id.clone(), PropertyKind::Commercial, 200_000.0);

        assert_eq!(quote.property_id, property_id);
        assert_eq!(quote.rate, 0.015);
        assert_eq!(quote.amount, 3000.0);
    }

    #[test]
    fn quote_serializes_kind_under_type_key() {
        let quote = TaxQuote::compute(
            PropertyId::new("P1").expect("valid id"),
            PropertyKind::Industrial,
            50_000.0,
        );
        let value = serde_json::to_value(&quote).expect("serializable quote");
        assert_eq!(value.get("type"), Some(&serde_json::json!("Industrial")));
        assert_eq!(value.get("amount"), Some(&serde_json::json!(1000.0)));
    }
}
