//! Cdiscount SOAP - wire layer for the Marketplace API
//!
//! This crate provides:
//! - Envelope encoding from `serde_json::Value` parameters (DataContract member order)
//! - Response decoding into plain records, with SOAP fault detection
//! - `ArrayOf` for the serialization-array element convention
//! - Parsing of the security token service reply

pub mod array;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod namespace;
pub mod token;

pub use array::ArrayOf;
pub use decode::decode;
pub use envelope::{Envelope, soap_action};
pub use error::{Fault, Result, SoapError};
pub use token::parse_token;
