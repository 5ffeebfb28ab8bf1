//! Security token service reply
//!
//! The issuer answers with a single serialized string:
//! `<string xmlns="http://schemas.microsoft.com/2003/10/Serialization/">TOKEN</string>`

use serde::Deserialize;

use crate::error::{Result, SoapError};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "$text", default)]
    token: String,
}

/// Extract the token from the issuer reply
pub fn parse_token(body: &str) -> Result<String> {
    let response: TokenResponse = quick_xml::de::from_str(body)?;
    let token = response.token.trim();
    if token.is_empty() {
        return Err(SoapError::EmptyToken);
    }
    Ok(token.to_string())
}
