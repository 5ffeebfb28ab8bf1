//! Offer integration package (`Content/Offers.xml`)

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{PackageError, Result};
use crate::package::{Attributes, Document, Package, XAML_NAMESPACE, capacity};
use crate::validator::{
    DISCOUNT_COMPONENT, OFFER, OFFER_PACKAGE, SHIPPING_INFORMATION, Validator, scalar_text,
    unwrap_list, unwrap_record,
};

pub const OFFER_NAMESPACE: &str = "clr-namespace:Cdiscount.Service.OfferIntegration.Pivot;assembly=Cdiscount.Service.OfferIntegration";

const PUBLICATION_LIST_ERROR: &str = "The value OfferPublicationList should be a list of integers representing the ids of the marketplaces.";

/// Whether the package carries complete offers or only stock and price updates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackageType {
    #[default]
    Full,
    StockAndPrice,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Full => "Full",
            PackageType::StockAndPrice => "StockAndPrice",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Full" => Ok(PackageType::Full),
            "StockAndPrice" => Ok(PackageType::StockAndPrice),
            _ => Err(format!(
                "Invalid package type: {}. Valid values: Full, StockAndPrice",
                s
            )),
        }
    }
}

/// A validated offer
#[derive(Clone, Debug, PartialEq)]
pub struct Offer {
    attributes: Attributes,
    shipping_information: Vec<Attributes>,
    discounts: Vec<Attributes>,
}

impl Offer {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = OFFER.validate(value)?;

        let shipping_information = match map.get("ShippingInformationList") {
            Some(list) => nested(&SHIPPING_INFORMATION, list)?,
            None => Vec::new(),
        };
        let discounts = match map.get("DiscountList") {
            Some(list) => nested(&DISCOUNT_COMPONENT, list)?,
            None => Vec::new(),
        };

        Ok(Self {
            attributes: attributes(map, &["ShippingInformationList", "DiscountList"])?,
            shipping_information,
            discounts,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn write(&self, doc: &mut Document) -> Result<()> {
        if self.shipping_information.is_empty() && self.discounts.is_empty() {
            return doc.empty("Offer", &self.attributes);
        }
        doc.start("Offer", &self.attributes)?;
        doc.collection(
            "Offer.ShippingInformationList",
            "ShippingInformationList",
            &self.shipping_information,
            "ShippingInformation",
        )?;
        doc.collection(
            "Offer.PriceAndDiscountList",
            "DiscountComponentList",
            &self.discounts,
            "DiscountComponent",
        )?;
        doc.end("Offer")
    }
}

/// Scalar attributes of a record, sorted by name, nulls left out
pub(crate) fn attributes(map: &Map<String, Value>, skip: &[&str]) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for (key, value) in map {
        if skip.contains(&key.as_str()) || value.is_null() {
            continue;
        }
        attributes.push((key.clone(), scalar_text(key, value)?));
    }
    attributes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(attributes)
}

/// Validate a nested list and turn its items into attribute sets
pub(crate) fn nested(validator: &Validator, list: &Value) -> Result<Vec<Attributes>> {
    validator
        .validate_list(list)?
        .into_iter()
        .map(|item| attributes(item, &[]))
        .collect()
}

/// The `Offers.xml` package
#[derive(Clone, Debug, PartialEq)]
pub struct OfferPackage {
    name: String,
    purge_and_replace: bool,
    package_type: PackageType,
    publication_list: Vec<i64>,
    offers: Vec<Offer>,
}

impl OfferPackage {
    /// Build a package from its JSON description
    ///
    /// `data` holds `OfferCollection` and optionally `OfferPublicationList`,
    /// `PurgeAndReplace` and `PackageType`.
    pub fn new(name: &str, data: &Value) -> Result<Self> {
        let map = OFFER_PACKAGE.validate(data)?;

        let purge_and_replace = match map.get("PurgeAndReplace") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(PackageError::validation(format!(
                    "PurgeAndReplace must be a boolean, got {}",
                    other
                )));
            }
        };

        let package_type = match map.get("PackageType") {
            None | Some(Value::Null) => PackageType::default(),
            Some(Value::String(s)) => s.parse().map_err(PackageError::Validation)?,
            Some(other) => {
                return Err(PackageError::validation(format!(
                    "Invalid package type: {}. Valid values: Full, StockAndPrice",
                    other
                )));
            }
        };

        let mut package = Self {
            name: name.to_string(),
            purge_and_replace,
            package_type,
            publication_list: publication_list(map.get("OfferPublicationList"))?,
            offers: Vec::new(),
        };

        let entries = unwrap_list(&map["OfferCollection"], "Offer")?;
        if entries.is_empty() {
            return Err(PackageError::validation("OfferCollection holds no offer"));
        }
        for entry in entries {
            package.add(unwrap_record(entry, "Offer"))?;
        }

        Ok(package)
    }

    /// Validate and append an offer; returns false when it was already present
    pub fn add(&mut self, offer: &Value) -> Result<bool> {
        let offer = Offer::from_value(offer)?;
        if self.offers.contains(&offer) {
            debug!(
                "Skipping duplicate offer {}",
                offer.attribute("SellerProductId").unwrap_or_default()
            );
            return Ok(false);
        }
        self.offers.push(offer);
        Ok(true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn publication_list(&self) -> &[i64] {
        &self.publication_list
    }
}

fn publication_list(value: Option<&Value>) -> Result<Vec<i64>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(PackageError::validation(PUBLICATION_LIST_ERROR)),
    };
    items
        .iter()
        .map(|id| {
            id.as_i64()
                .ok_or_else(|| PackageError::validation(PUBLICATION_LIST_ERROR))
        })
        .collect()
}

impl Package for OfferPackage {
    const CONTENT: &'static str = "Offers.xml";

    fn render(&self) -> Result<String> {
        let mut doc = Document::new()?;

        let root: Attributes = vec![
            ("Name".to_string(), self.name.clone()),
            ("PurgeAndReplace".to_string(), self.purge_and_replace.to_string()),
            ("PackageType".to_string(), self.package_type.to_string()),
            ("xmlns".to_string(), OFFER_NAMESPACE.to_string()),
            ("xmlns:x".to_string(), XAML_NAMESPACE.to_string()),
        ];
        doc.start("OfferPackage", &root)?;

        doc.start("OfferPackage.Offers", &[])?;
        doc.start("OfferCollection", &[capacity(self.offers.len())])?;
        for offer in &self.offers {
            offer.write(&mut doc)?;
        }
        doc.end("OfferCollection")?;
        doc.end("OfferPackage.Offers")?;

        let pools: Vec<Attributes> = self
            .publication_list
            .iter()
            .map(|id| vec![("Id".to_string(), id.to_string())])
            .collect();
        doc.collection(
            "OfferPackage.OfferPublicationList",
            "OfferPublicationList",
            &pools,
            "PublicationPool",
        )?;

        doc.end("OfferPackage")?;
        doc.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer_data() -> Value {
        json!({
            "OfferCollection": [
                {"Offer": {
                    "ProductEan": "2009863600561",
                    "SellerProductId": "SKU-A",
                    "ProductCondition": 6,
                    "Price": 19.36,
                    "EcoPart": 0.1,
                    "DeaTax": 0.15,
                    "Vat": 0.2,
                    "Stock": 10,
                    "PreparationTime": 1,
                    "ShippingInformationList": {"ShippingInformation": [
                        {"ShippingCharges": 2, "AdditionalShippingCharges": 4, "DeliveryMode": "Standard"},
                        {"ShippingCharges": 4, "AdditionalShippingCharges": 8, "DeliveryMode": "Tracked"},
                    ]},
                    "DiscountList": {"DiscountComponent": [
                        {"DiscountValue": 5, "Type": 1, "StartDate": "2019-06-15T00:00:00", "EndDate": "2019-07-15T00:00:00"},
                    ]},
                }},
                {"Offer": {
                    "ProductEan": "2009863600562",
                    "SellerProductId": "SKU-B",
                    "Price": 10,
                    "Stock": 3,
                }},
            ],
            "OfferPublicationList": [1, 16],
            "PurgeAndReplace": false,
        })
    }

    #[test]
    fn test_new_offer_package() {
        let package = OfferPackage::new("offers", &offer_data()).unwrap();
        assert_eq!(package.name(), "offers");
        assert_eq!(package.offers().len(), 2);
        assert_eq!(package.package_type(), PackageType::Full);
        assert_eq!(package.publication_list(), &[1, 16]);
        assert_eq!(package.offers()[0].attribute("Price"), Some("19.36"));
    }

    #[test]
    fn test_duplicate_offers_are_skipped() {
        let mut package = OfferPackage::new("offers", &offer_data()).unwrap();
        let duplicate = json!({"ProductEan": "2009863600562", "SellerProductId": "SKU-B", "Price": 10, "Stock": 3});
        assert!(!package.add(&duplicate).unwrap());
        assert_eq!(package.offers().len(), 2);
    }

    #[test]
    fn test_missing_offer_collection() {
        let err = OfferPackage::new("offers", &json!({"PurgeAndReplace": true})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required attributes for OfferPackage: OfferCollection"
        );
        assert!(OfferPackage::new("offers", &json!({"OfferCollection": []})).is_err());
    }

    #[test]
    fn test_publication_list_must_hold_integers() {
        let mut data = offer_data();
        data["OfferPublicationList"] = json!(["1", "16"]);
        let err = OfferPackage::new("offers", &data).unwrap_err();
        assert_eq!(err.to_string(), PUBLICATION_LIST_ERROR);

        data["OfferPublicationList"] = json!(1);
        assert!(OfferPackage::new("offers", &data).is_err());
    }

    #[test]
    fn test_package_type() {
        let mut data = offer_data();
        data["PackageType"] = json!("StockAndPrice");
        let package = OfferPackage::new("offers", &data).unwrap();
        assert_eq!(package.package_type(), PackageType::StockAndPrice);

        data["PackageType"] = json!("Partial");
        assert!(matches!(
            OfferPackage::new("offers", &data),
            Err(PackageError::Validation(msg)) if msg.starts_with("Invalid package type: Partial")
        ));
    }

    #[test]
    fn test_invalid_nested_record() {
        let data = json!({"OfferCollection": [{"Offer": {
            "ProductEan": "1",
            "SellerProductId": "2",
            "ShippingInformationList": [{"ShippingCharges": 2}],
        }}]});
        let err = OfferPackage::new("offers", &data).unwrap_err();
        assert!(err.to_string().starts_with("Missing required attributes for ShippingInformation"));
    }

    #[test]
    fn test_render() {
        let xml = OfferPackage::new("offers", &offer_data()).unwrap().render().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains(
            "<OfferPackage Name=\"offers\" PurgeAndReplace=\"false\" PackageType=\"Full\""
        ));
        assert!(xml.contains(OFFER_NAMESPACE));
        assert!(xml.contains("<OfferCollection Capacity=\"2\">"));
        assert!(xml.contains("<Offer.ShippingInformationList>"));
        assert!(xml.contains("<ShippingInformationList Capacity=\"2\">"));
        assert!(xml.contains(
            "<ShippingInformation AdditionalShippingCharges=\"4\" DeliveryMode=\"Standard\" ShippingCharges=\"2\"/>"
        ));
        assert!(xml.contains("<Offer.PriceAndDiscountList>"));
        assert!(xml.contains("<DiscountComponentList Capacity=\"1\">"));
        assert!(xml.contains("<OfferPublicationList Capacity=\"2\">"));
        assert!(xml.contains("<PublicationPool Id=\"16\"/>"));
        assert!(xml.contains(
            "<Offer Price=\"10\" ProductEan=\"2009863600562\" SellerProductId=\"SKU-B\" Stock=\"3\"/>"
        ));
    }

    #[test]
    fn test_render_without_publication_list() {
        let data = json!({"OfferCollection": [{"Offer": {"ProductEan": "1", "SellerProductId": "2"}}]});
        let xml = OfferPackage::new("offers", &data).unwrap().render().unwrap();
        assert!(!xml.contains("OfferPackage.OfferPublicationList"));
    }

    #[test]
    fn test_package_type_from_str() {
        assert_eq!("Full".parse::<PackageType>().unwrap(), PackageType::Full);
        assert!("full".parse::<PackageType>().is_err());
    }
}
