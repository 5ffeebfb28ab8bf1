// Configuration for the Marketplace API connection

use std::path::PathBuf;

use crate::{
    constants::{self, DEFAULT_TOKEN_TTL_SECS, DOMAIN, PREPROD_DOMAIN},
    error::{ClientError, Result},
    header::HeaderMessage,
};

/// Configuration for a [`Connection`](crate::Connection)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Seller login
    pub login: String,
    /// Seller API password
    pub password: String,
    /// Use the seller sandbox instead of production
    pub preprod: bool,
    /// Service endpoint override
    pub service_url: Option<String>,
    /// Token endpoint override
    pub token_url: Option<String>,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Token lifetime before a proactive refresh (default: 48h)
    pub token_ttl_secs: u64,
    /// Explicit header message
    pub header: Option<HeaderMessage>,
    /// YAML file holding the header message
    pub header_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login: String::new(),
            password: String::new(),
            preprod: false,
            service_url: None,
            token_url: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            header: None,
            header_file: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config for the given seller credentials
    pub fn new(login: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    /// Replace the credentials
    pub fn with_credentials(mut self, login: &str, password: &str) -> Self {
        self.login = login.to_string();
        self.password = password.to_string();
        self
    }

    pub fn with_preprod(mut self, preprod: bool) -> Self {
        self.preprod = preprod;
        self
    }

    /// Override the service endpoint
    pub fn with_service_url(mut self, url: &str) -> Self {
        self.service_url = Some(url.to_string());
        self
    }

    /// Override the token endpoint
    pub fn with_token_url(mut self, url: &str) -> Self {
        self.token_url = Some(url.to_string());
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    pub fn with_token_ttl(mut self, ttl_secs: u64) -> Self {
        self.token_ttl_secs = ttl_secs;
        self
    }

    pub fn with_header(mut self, header: HeaderMessage) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_header_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_file = Some(path.into());
        self
    }

    pub fn domain(&self) -> &'static str {
        if self.preprod { PREPROD_DOMAIN } else { DOMAIN }
    }

    pub fn service_url(&self) -> String {
        self.service_url
            .clone()
            .unwrap_or_else(|| constants::service_url(self.domain()))
    }

    pub fn token_url(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| constants::token_url(self.domain()))
    }

    /// Check the configuration before any network call
    pub fn validate(&self) -> Result<()> {
        if self.login.trim().is_empty() || self.password.is_empty() {
            return Err(ClientError::Connection(
                "Please provide valid login and password".to_string(),
            ));
        }
        if self.header.is_some() && self.header_file.is_some() {
            return Err(ClientError::Config(
                "header and header_file are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }

    /// The header message to send: explicit, loaded from file, or the default one
    pub fn resolve_header(&self) -> Result<HeaderMessage> {
        match (&self.header, &self.header_file) {
            (Some(_), Some(_)) => Err(ClientError::Config(
                "header and header_file are mutually exclusive".to_string(),
            )),
            (Some(header), None) => Ok(header.clone()),
            (None, Some(path)) => HeaderMessage::from_yaml_file(path),
            (None, None) => Ok(HeaderMessage::default()),
        }
    }
}
