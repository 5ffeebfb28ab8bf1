//! Connection to the Marketplace API
//!
//! Holds the session token and the header message, and sends operations as
//! SOAP envelopes. Sections borrow the connection to expose one method per
//! remote operation.

use std::{
    sync::RwLock,
    time::{Duration, Instant},
};

use cdiscount_soap::{Envelope, SoapError, decode, parse_token, soap_action};
use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    config::ClientConfig,
    constants::{ALL_DATA_LOGIN, ALL_DATA_PASSWORD, CONTENT_TYPE_XML, SOAP_ACTION_HEADER},
    error::{ClientError, Result},
    header::HeaderMessage,
    section::{Discussions, Fulfillment, Offers, Orders, Products, Relays, Seller, WebMail},
};

/// Session token and its expiry
#[derive(Clone, Debug)]
struct TokenInfo {
    token: String,
    // None when the lifetime does not fit in an Instant
    expires_at: Option<Instant>,
}

/// Authenticated connection to the Marketplace API
pub struct Connection {
    client: Client,
    config: ClientConfig,
    header: HeaderMessage,
    token: RwLock<Option<TokenInfo>>,
}

impl Connection {
    /// Validate the configuration, fetch a token and return a ready connection
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let instance = Self::build(config)?;
        instance.refresh_token().await?;
        Ok(instance)
    }

    /// Create a connection with a token obtained elsewhere, skipping the token service
    pub fn new_with_token(config: ClientConfig, token: &str) -> Result<Self> {
        let instance = Self::build(config)?;
        instance.set_token(token.to_string());
        Ok(instance)
    }

    fn build(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let header = config.resolve_header()?;

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            header,
            token: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current token, if one was obtained
    pub fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|t| t.token.clone())
    }

    /// The header message as sent, carrying the current token
    pub fn header(&self) -> HeaderMessage {
        match self.token() {
            Some(token) => self.header.with_token(&token),
            None => self.header.clone(),
        }
    }

    fn set_token(&self, token: String) {
        let ttl = Duration::from_secs(self.config.token_ttl_secs);
        let expires_at = Instant::now().checked_add(ttl);
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(TokenInfo { token, expires_at });
    }

    /// Token still within its lifetime
    fn valid_token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        guard
            .as_ref()
            .filter(|t| t.expires_at.is_none_or(|at| at > Instant::now()))
            .map(|t| t.token.clone())
    }

    /// Request a new token from the security token service
    pub async fn refresh_token(&self) -> Result<String> {
        let url = self.config.token_url();
        debug!("Requesting token from {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.login, Some(&self.config.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("Token request failed with status {}", status);
            return Err(ClientError::Auth(format!(
                "token service returned status {}",
                status
            )));
        }

        let token = parse_token(&body).map_err(|e| ClientError::Auth(e.to_string()))?;
        self.set_token(token.clone());
        debug!(
            "Token obtained, valid for {} seconds",
            self.config.token_ttl_secs
        );
        Ok(token)
    }

    async fn ensure_token(&self) -> Result<String> {
        if let Some(token) = self.valid_token() {
            return Ok(token);
        }
        warn!("Token missing or expired, refreshing...");
        self.refresh_token().await
    }

    /// Send an operation and return its decoded result
    ///
    /// The call is re-sent once with a fresh token when the service answers with
    /// a fault or HTTP 401. A result whose `OperationSuccess` is `false` is
    /// returned as [`ClientError::Operation`].
    pub async fn call(&self, operation: &str, params: Vec<(&str, Value)>) -> Result<Value> {
        let token = self.ensure_token().await?;

        let result = match self.send(operation, &params, &token).await {
            Err(err) if err.is_token_rejection() => {
                warn!("{} rejected ({}), refreshing token...", operation, err);
                let token = self.refresh_token().await?;
                warn!("Resending {}", operation);
                self.send(operation, &params, &token).await
            }
            other => other,
        }?;

        check_operation_status(result)
    }

    async fn send(&self, operation: &str, params: &[(&str, Value)], token: &str) -> Result<Value> {
        let envelope = params.iter().fold(
            Envelope::new(operation).with_header(self.header.with_token(token).to_value()?),
            |envelope, (name, value)| envelope.with_param(*name, value.clone()),
        );
        let body = envelope.encode()?;

        let url = self.config.service_url();
        debug!("Calling {} at {}", operation, url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_XML)
            .header(SOAP_ACTION_HEADER, format!("\"{}\"", soap_action(operation)))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(decode(&text)?);
        }

        match decode(&text) {
            Err(SoapError::Fault(fault)) => Err(SoapError::Fault(fault).into()),
            _ => {
                error!("{} failed with status {}: {}", operation, status, text);
                Err(ClientError::Http {
                    status: status.as_u16(),
                    body: text,
                })
            }
        }
    }

    /// A connection authenticated with the public catalogue account,
    /// sharing this connection's endpoints and header
    pub(crate) async fn all_data(&self) -> Result<Connection> {
        let mut config = self
            .config
            .clone()
            .with_credentials(ALL_DATA_LOGIN, ALL_DATA_PASSWORD);
        config.header = Some(self.header.clone());
        config.header_file = None;
        Connection::connect(config).await
    }

    pub fn seller(&self) -> Seller<'_> {
        Seller::new(self)
    }

    pub fn offers(&self) -> Offers<'_> {
        Offers::new(self)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    pub fn fulfillment(&self) -> Fulfillment<'_> {
        Fulfillment::new(self)
    }

    pub fn relays(&self) -> Relays<'_> {
        Relays::new(self)
    }

    pub fn discussions(&self) -> Discussions<'_> {
        Discussions::new(self)
    }

    pub fn webmail(&self) -> WebMail<'_> {
        WebMail::new(self)
    }
}

/// Turn a result reporting `OperationSuccess == false` into an error
fn check_operation_status(result: Value) -> Result<Value> {
    if result.get("OperationSuccess").and_then(Value::as_str) == Some("false") {
        let message = result
            .get("ErrorMessage")
            .and_then(Value::as_str)
            .unwrap_or("operation failed")
            .to_string();
        let errors = result.get("ErrorList").cloned().unwrap_or(Value::Null);
        return Err(ClientError::Operation { message, errors });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new("seller", "secret")
            .with_service_url("http://127.0.0.1:1/svc")
            .with_token_url("http://127.0.0.1:1/sts")
    }

    #[test]
    fn test_build_rejects_missing_credentials() {
        let result = Connection::new_with_token(ClientConfig::new("", ""), "t");
        assert!(matches!(result, Err(ClientError::Connection(_))));
    }

    #[test]
    fn test_header_carries_token() {
        let connection = Connection::new_with_token(config(), "abc").unwrap();
        assert_eq!(connection.token().as_deref(), Some("abc"));
        assert_eq!(
            connection.header().security.token_id.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_token_ttl() {
        let connection = Connection::new_with_token(config(), "abc").unwrap();
        assert_eq!(connection.valid_token().as_deref(), Some("abc"));

        let connection = Connection::new_with_token(config().with_token_ttl(0), "abc").unwrap();
        assert!(connection.valid_token().is_none());
        assert_eq!(connection.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_unbounded_token_ttl_never_expires() {
        let connection =
            Connection::new_with_token(config().with_token_ttl(u64::MAX), "abc").unwrap();
        assert_eq!(connection.valid_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_operation_success() {
        let result = json!({"OperationSuccess": "true", "Seller": {"Login": "x"}});
        assert_eq!(check_operation_status(result.clone()).unwrap(), result);

        // Records without a status flag pass through
        assert_eq!(check_operation_status(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_operation_failure() {
        let result = json!({
            "OperationSuccess": "false",
            "ErrorMessage": "Package not found",
            "ErrorList": {"Error": {"Message": "Package not found"}},
        });
        match check_operation_status(result) {
            Err(ClientError::Operation { message, errors }) => {
                assert_eq!(message, "Package not found");
                assert_eq!(errors["Error"]["Message"], "Package not found");
            }
            other => panic!("expected operation error, got {:?}", other),
        }
    }
}
