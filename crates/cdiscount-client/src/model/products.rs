// Product catalogue filters

use cdiscount_soap::ArrayOf;
use serde::Serialize;

/// Filter for `GetProductList`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductFilter {
    pub category_code: String,
}

/// Filter for `GetModelList`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelFilter {
    pub category_code_list: ArrayOf<String>,
}

impl ModelFilter {
    pub fn category(code: &str) -> Self {
        Self {
            category_code_list: ArrayOf::strings([code]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum IdentifierType {
    #[default]
    #[serde(rename = "EAN")]
    Ean,
}

/// Parameter of `GetProductListByIdentifier`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct IdentifierRequest {
    pub identifier_type: IdentifierType,
    pub value_list: ArrayOf<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_filter_serialization() {
        assert_eq!(
            serde_json::to_value(ModelFilter::category("06010701")).unwrap(),
            json!({"CategoryCodeList": {"arr:string": ["06010701"]}})
        );
    }

    #[test]
    fn test_identifier_request_serialization() {
        let request = IdentifierRequest {
            identifier_type: IdentifierType::Ean,
            value_list: ArrayOf::strings(["4005274238223"]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"IdentifierType": "EAN", "ValueList": {"arr:string": ["4005274238223"]}})
        );
    }
}
