//! Record validation
//!
//! Records come straight from user supplied JSON. Each record type has a set
//! of required and optional attributes; anything else is rejected before a
//! package is rendered.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{PackageError, Result};

/// Attribute sets of one record type
#[derive(Clone, Copy, Debug)]
pub struct Validator {
    pub kind: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

pub const OFFER: Validator = Validator {
    kind: "Offer",
    required: &["ProductEan", "SellerProductId"],
    optional: &[
        "Comment",
        "StrikedPrice",
        "PriceMustBeAligned",
        "MinimumPriceForPriceAlignment",
        "ProductPackagingUnit",
        "ProductPackagingValue",
        "BluffDeliveryMax",
        "DiscountList",
        "ShippingInformationList",
        "ProductCondition",
        "Price",
        "EcoPart",
        "Vat",
        "DeaTax",
        "Stock",
        "PreparationTime",
    ],
};

pub const PRODUCT: Validator = Validator {
    kind: "Product",
    required: &[
        "ShortLabel",
        "SellerProductId",
        "CategoryCode",
        "ProductKind",
        "Model",
        "LongLabel",
        "Description",
        "BrandName",
        "EanList",
        "Pictures",
    ],
    optional: &[
        "Width",
        "Weight",
        "Size",
        "SellerProductFamily",
        "SellerProductColorName",
        "ManufacturerPartNumber",
        "Length",
        "ISBN",
        "Height",
        "EncodedMarketingDescription",
        "ModelProperties",
        "Navigation",
    ],
};

/// Top level keys of the offer package input
pub const OFFER_PACKAGE: Validator = Validator {
    kind: "OfferPackage",
    required: &["OfferCollection"],
    optional: &["OfferPublicationList", "PurgeAndReplace", "PackageType"],
};

/// Top level keys of the product package input
pub const PRODUCT_PACKAGE: Validator = Validator {
    kind: "ProductPackage",
    required: &["Products"],
    optional: &[],
};

pub const DISCOUNT_COMPONENT: Validator = Validator {
    kind: "DiscountComponent",
    required: &["DiscountValue", "Type", "StartDate", "EndDate"],
    optional: &[],
};

pub const SHIPPING_INFORMATION: Validator = Validator {
    kind: "ShippingInformation",
    required: &["ShippingCharges", "AdditionalShippingCharges", "DeliveryMode"],
    optional: &[],
};

pub const PRODUCT_EAN: Validator = Validator {
    kind: "ProductEan",
    required: &["Ean"],
    optional: &[],
};

pub const PRODUCT_IMAGE: Validator = Validator {
    kind: "ProductImage",
    required: &["Uri"],
    optional: &[],
};

impl Validator {
    /// Check the attributes of `record` and return it as a map
    pub fn validate<'v>(&self, record: &'v Value) -> Result<&'v Map<String, Value>> {
        let map = record.as_object().ok_or_else(|| {
            PackageError::validation(format!("{} must be an object, got {}", self.kind, record))
        })?;

        let missing: Vec<&str> = self
            .required
            .iter()
            .copied()
            .filter(|key| !map.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(PackageError::validation(format!(
                "Missing required attributes for {}: {}",
                self.kind,
                missing.join(", ")
            )));
        }

        let invalid: Vec<&str> = map
            .keys()
            .map(String::as_str)
            .filter(|key| !self.required.contains(key) && !self.optional.contains(key))
            .collect();
        if !invalid.is_empty() {
            let allowed: BTreeSet<&str> = self.optional.iter().copied().collect();
            return Err(PackageError::validation(format!(
                "These attributes are not valid: {}. Please use only the following ones if necessary: {}",
                invalid.join(", "),
                allowed.into_iter().collect::<Vec<_>>().join(", ")
            )));
        }

        Ok(map)
    }

    /// Validate every item of a nested list
    ///
    /// The list is either a plain array or wrapped under the item name
    /// (`{"ProductEan": [..]}`), which is how the service itself returns lists.
    pub fn validate_list<'v>(&self, list: &'v Value) -> Result<Vec<&'v Map<String, Value>>> {
        unwrap_list(list, self.kind)?
            .into_iter()
            .map(|item| self.validate(item))
            .collect()
    }
}

/// Returns the items of a list given either as an array or wrapped under `item`
pub(crate) fn unwrap_list<'v>(list: &'v Value, item: &str) -> Result<Vec<&'v Value>> {
    match list {
        Value::Array(items) => Ok(items.iter().collect()),
        Value::Object(map) if map.len() == 1 && map.contains_key(item) => match &map[item] {
            Value::Array(items) => Ok(items.iter().collect()),
            single => Ok(vec![single]),
        },
        other => Err(PackageError::validation(format!(
            "expected a list of {}, got {}",
            item, other
        ))),
    }
}

/// Unwrap `{"Offer": {..}}` style entries, plain records are accepted as is
pub(crate) fn unwrap_record<'v>(entry: &'v Value, kind: &str) -> &'v Value {
    match entry.as_object() {
        Some(map) if map.len() == 1 => map.get(kind).unwrap_or(entry),
        _ => entry,
    }
}

/// String form of a scalar attribute
pub(crate) fn scalar_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(PackageError::validation(format!(
            "attribute {} must be a string, a number or a boolean, got {}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_offer() {
        let offer = json!({"ProductEan": "2009863600561", "SellerProductId": "SKU1", "Price": 10});
        let map = OFFER.validate(&offer).unwrap();
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_missing_required_attributes() {
        let offer = json!({"Price": 10});
        let err = OFFER.validate(&offer).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required attributes for Offer: ProductEan, SellerProductId"
        );
    }

    #[test]
    fn test_unknown_attributes() {
        let image = json!({"Uri": "http://x/1.jpg", "Size": 3});
        let err = PRODUCT_IMAGE.validate(&image).unwrap_err();
        assert!(err.to_string().starts_with("These attributes are not valid: Size."));

        let offer = json!({"ProductEan": "1", "SellerProductId": "2", "Colour": "red"});
        let message = OFFER.validate(&offer).unwrap_err().to_string();
        assert!(message.contains("Colour"));
        assert!(message.contains("PreparationTime"));
    }

    #[test]
    fn test_record_must_be_an_object() {
        assert!(matches!(
            PRODUCT_EAN.validate(&json!("123")),
            Err(PackageError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_list_accepts_both_forms() {
        let plain = json!([{"Ean": "1"}, {"Ean": "2"}]);
        assert_eq!(PRODUCT_EAN.validate_list(&plain).unwrap().len(), 2);

        let wrapped = json!({"ProductEan": [{"Ean": "1"}]});
        assert_eq!(PRODUCT_EAN.validate_list(&wrapped).unwrap().len(), 1);

        let single = json!({"ProductEan": {"Ean": "1"}});
        assert_eq!(PRODUCT_EAN.validate_list(&single).unwrap().len(), 1);

        assert!(PRODUCT_EAN.validate_list(&json!({"Other": []})).is_err());
        assert!(PRODUCT_EAN.validate_list(&json!([{"Uri": "x"}])).is_err());
    }

    #[test]
    fn test_unwrap_record() {
        let wrapped = json!({"Offer": {"ProductEan": "1"}});
        assert_eq!(unwrap_record(&wrapped, "Offer"), &json!({"ProductEan": "1"}));

        let plain = json!({"ProductEan": "1", "SellerProductId": "2"});
        assert_eq!(unwrap_record(&plain, "Offer"), &plain);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text("Price", &json!(19.36)).unwrap(), "19.36");
        assert_eq!(scalar_text("Stock", &json!(5)).unwrap(), "5");
        assert_eq!(scalar_text("PriceMustBeAligned", &json!(true)).unwrap(), "true");
        assert_eq!(scalar_text("Comment", &json!("ok")).unwrap(), "ok");
        assert!(scalar_text("Comment", &json!(null)).is_err());
    }
}
