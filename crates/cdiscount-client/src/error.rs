// Error types for the Marketplace API client

use cdiscount_soap::{Fault, SoapError};
use reqwest::StatusCode;
use serde_json::Value;

/// Errors that can occur while talking to the Marketplace API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Soap(#[from] SoapError),

    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("operation failed: {message}")]
    Operation { message: String, errors: Value },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("header file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Package(#[from] cdiscount_package::PackageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Returns the SOAP fault carried by this error, if any
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            ClientError::Soap(err) => err.as_fault(),
            _ => None,
        }
    }

    /// Whether the service rejected the call in a way a fresh token may fix
    pub(crate) fn is_token_rejection(&self) -> bool {
        match self {
            ClientError::Soap(SoapError::Fault(_)) => true,
            ClientError::Http { status, .. } => *status == StatusCode::UNAUTHORIZED.as_u16(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
