//! Error types for the SOAP wire layer

use std::fmt;

/// A SOAP fault returned by the service
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fault {
    pub code: String,
    pub message: String,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Errors raised while encoding requests or decoding responses
#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML deserialization error: {0}")]
    Deserialize(#[from] quick_xml::DeError),

    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("encoded envelope is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("malformed envelope: {0}")]
    Malformed(String),

    #[error("cannot encode a bare array as element '{0}'")]
    UnsupportedValue(String),

    #[error("security token service returned an empty token")]
    EmptyToken,

    #[error("SOAP fault: {0}")]
    Fault(Fault),
}

impl SoapError {
    /// Returns the fault when the error is a SOAP fault
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            SoapError::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SoapError>;
