//! The `headerMessage` sent with every operation
//!
//! Field names follow the service data contracts. Fields left unset are sent
//! as `nil`, so every member is serialized even when `None`.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    #[serde(rename = "CatalogID")]
    pub catalog_id: Option<i32>,
    #[serde(rename = "ConfigurationPolicy")]
    pub configuration_policy: Option<String>,
    #[serde(rename = "CustomerID")]
    pub customer_id: Option<String>,
    /// Legacy spelling kept by the contract next to `CustomerID`
    #[serde(rename = "CustomerId")]
    pub customer_id_legacy: Option<String>,
    #[serde(rename = "CustomerNumber")]
    pub customer_number: Option<String>,
    #[serde(rename = "CustomerPoolID")]
    pub customer_pool_id: Option<i32>,
    #[serde(rename = "GeoCoordinate")]
    pub geo_coordinate: Option<String>,
    #[serde(rename = "SecuredContext")]
    pub secured_context: Option<bool>,
    #[serde(rename = "SiteID")]
    pub site_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Localization {
    pub country: Option<String>,
    pub culture_name: Option<String>,
    pub currency: Option<String>,
    pub decimal_position: Option<i32>,
    pub language: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    #[serde(rename = "DomainRightsList")]
    pub domain_rights_list: Option<String>,
    #[serde(rename = "IssuerID")]
    pub issuer_id: Option<String>,
    #[serde(rename = "SessionID")]
    pub session_id: Option<String>,
    #[serde(rename = "SubjectLocality")]
    pub subject_locality: Option<String>,
    #[serde(rename = "TokenId")]
    pub token_id: Option<String>,
    #[serde(rename = "UserName")]
    pub user_name: Option<String>,
}

/// Header message carried as the first parameter of every call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HeaderMessage {
    pub context: Context,
    pub localization: Localization,
    pub security: Security,
    pub version: Option<String>,
}

impl Default for HeaderMessage {
    fn default() -> Self {
        Self {
            context: Context {
                site_id: Some(100),
                catalog_id: Some(1),
                ..Default::default()
            },
            localization: Localization {
                country: Some("Fr".to_string()),
                currency: Some("Eur".to_string()),
                decimal_position: Some(2),
                ..Default::default()
            },
            security: Security {
                user_name: Some(String::new()),
                ..Default::default()
            },
            version: Some("1.0".to_string()),
        }
    }
}

impl HeaderMessage {
    /// Load a header from a YAML file using the contract field names
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ClientError::Config(format!(
                "header file {} does not exist",
                path.display()
            )));
        }
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Copy of this header carrying the given token
    pub fn with_token(&self, token: &str) -> Self {
        let mut header = self.clone();
        header.security.token_id = Some(token.to_string());
        header
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
