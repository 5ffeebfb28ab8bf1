// XML namespaces used by the Marketplace API service contract

/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// XML schema instance namespace, carries `nil`
pub const XML_SCHEMA_INSTANCE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Service contract and data contract namespace
pub const CDISCOUNT: &str = "http://www.cdiscount.com";

/// WCF primitive array namespace (`ArrayOfstring`, `ArrayOflong`, ...)
pub const SERIALIZATION_ARRAYS: &str = "http://schemas.microsoft.com/2003/10/Serialization/Arrays";

/// Namespace of the `headerMessage` data contract
pub const HEADER_MESSAGES: &str =
    "http://schemas.datacontract.org/2004/07/Cdiscount.Framework.Core.Communication.Messages";

/// Service contract interface used to build SOAPAction values
pub const SERVICE_CONTRACT: &str = "IMarketplaceAPIService";

pub const SOAP_PREFIX: &str = "s";
pub const INSTANCE_PREFIX: &str = "i";
pub const ARRAYS_PREFIX: &str = "arr";
pub const HEADER_PREFIX: &str = "a";
