//! Request envelope encoding
//!
//! Parameters are plain `serde_json::Value` trees. Objects become elements whose
//! children are written in ordinal key order, which is the member order WCF
//! DataContract serialization expects.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

use crate::error::{Result, SoapError};
use crate::namespace::{
    ARRAYS_PREFIX, CDISCOUNT, HEADER_MESSAGES, HEADER_PREFIX, INSTANCE_PREFIX,
    SERIALIZATION_ARRAYS, SERVICE_CONTRACT, SOAP_ENVELOPE, SOAP_PREFIX, XML_SCHEMA_INSTANCE,
};

/// Name of the header parameter every operation takes
pub const HEADER_PARAMETER: &str = "headerMessage";

/// Returns the SOAPAction header value for an operation
pub fn soap_action(operation: &str) -> String {
    format!("{}/{}/{}", CDISCOUNT, SERVICE_CONTRACT, operation)
}

/// A single operation call ready to be encoded
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    operation: String,
    header: Option<Value>,
    params: Vec<(String, Value)>,
}

impl Envelope {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            header: None,
            params: Vec::new(),
        }
    }

    /// Set the `headerMessage` parameter
    pub fn with_header(mut self, header: Value) -> Self {
        self.header = Some(header);
        self
    }

    /// Append an operation parameter; parameters keep their insertion order
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.push((name.into(), value));
        self
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    /// Encode the envelope as a SOAP 1.1 document
    pub fn encode(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let envelope_name = format!("{}:Envelope", SOAP_PREFIX);
        let mut envelope = BytesStart::new(envelope_name.as_str());
        envelope.push_attribute((format!("xmlns:{}", SOAP_PREFIX).as_str(), SOAP_ENVELOPE));
        envelope.push_attribute((
            format!("xmlns:{}", INSTANCE_PREFIX).as_str(),
            XML_SCHEMA_INSTANCE,
        ));
        envelope.push_attribute((
            format!("xmlns:{}", ARRAYS_PREFIX).as_str(),
            SERIALIZATION_ARRAYS,
        ));
        writer.write_event(Event::Start(envelope))?;

        let body_name = format!("{}:Body", SOAP_PREFIX);
        writer.write_event(Event::Start(BytesStart::new(body_name.as_str())))?;

        let mut operation = BytesStart::new(self.operation.as_str());
        operation.push_attribute(("xmlns", CDISCOUNT));
        writer.write_event(Event::Start(operation))?;

        if let Some(header) = &self.header {
            let mut start = BytesStart::new(HEADER_PARAMETER);
            start.push_attribute((format!("xmlns:{}", HEADER_PREFIX).as_str(), HEADER_MESSAGES));
            write_value(&mut writer, start, HEADER_PARAMETER, header, Some(HEADER_PREFIX))?;
        }

        for (name, value) in &self.params {
            write_element(&mut writer, name, value, None)?;
        }

        writer.write_event(Event::End(BytesEnd::new(self.operation.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new(body_name.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new(envelope_name.as_str())))?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn qualified_name(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !name.contains(':') => format!("{}:{}", prefix, name),
        _ => name.to_string(),
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &Value,
    prefix: Option<&str>,
) -> Result<()> {
    let qualified = qualified_name(name, prefix);
    let start = BytesStart::new(qualified.as_str());
    write_value(writer, start, &qualified, value, prefix)
}

fn write_value(
    writer: &mut Writer<Vec<u8>>,
    mut start: BytesStart<'_>,
    qualified: &str,
    value: &Value,
    prefix: Option<&str>,
) -> Result<()> {
    match value {
        Value::Null => {
            start.push_attribute((format!("{}:nil", INSTANCE_PREFIX).as_str(), "true"));
            writer.write_event(Event::Empty(start))?;
        }
        Value::Bool(b) => write_text(writer, start, qualified, if *b { "true" } else { "false" })?,
        Value::Number(n) => write_text(writer, start, qualified, &n.to_string())?,
        Value::String(s) => write_text(writer, start, qualified, s)?,
        Value::Object(map) => {
            writer.write_event(Event::Start(start))?;

            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            for (key, child) in entries {
                match child {
                    Value::Array(items) => {
                        for item in items {
                            if item.is_array() {
                                return Err(SoapError::UnsupportedValue(key.clone()));
                            }
                            write_element(writer, key, item, prefix)?;
                        }
                    }
                    _ => write_element(writer, key, child, prefix)?,
                }
            }

            writer.write_event(Event::End(BytesEnd::new(qualified)))?;
        }
        Value::Array(_) => return Err(SoapError::UnsupportedValue(qualified.to_string())),
    }
    Ok(())
}

fn write_text(
    writer: &mut Writer<Vec<u8>>,
    start: BytesStart<'_>,
    qualified: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(qualified)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayOf;
    use serde_json::json;

    fn body_of(xml: &str) -> &str {
        let start = xml.find("<s:Body>").unwrap() + "<s:Body>".len();
        let end = xml.find("</s:Body>").unwrap();
        &xml[start..end]
    }

    #[test]
    fn test_soap_action() {
        assert_eq!(
            soap_action("GetOrderList"),
            "http://www.cdiscount.com/IMarketplaceAPIService/GetOrderList"
        );
    }

    #[test]
    fn test_envelope_declares_namespaces() {
        let xml = Envelope::new("GetSellerInformation").encode().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\""));
        assert!(xml.contains("xmlns:i=\"http://www.w3.org/2001/XMLSchema-instance\""));
        assert!(
            xml.contains("xmlns:arr=\"http://schemas.microsoft.com/2003/10/Serialization/Arrays\"")
        );
        assert_eq!(
            body_of(&xml),
            "<GetSellerInformation xmlns=\"http://www.cdiscount.com\"></GetSellerInformation>"
        );
    }

    #[test]
    fn test_header_is_prefixed_and_first() {
        let header = json!({
            "Version": "1.0",
            "Security": {"TokenId": "abc", "IssuerID": null},
            "Context": {"SiteID": 100, "CatalogID": 1},
        });
        let xml = Envelope::new("GetOrderList")
            .with_param("orderFilter", json!({"FetchOrderLines": true}))
            .with_header(header)
            .encode()
            .unwrap();

        let body = body_of(&xml);
        let header_pos = body.find("<headerMessage").unwrap();
        let filter_pos = body.find("<orderFilter>").unwrap();
        assert!(header_pos < filter_pos);

        assert!(body.contains(
            "<a:Context><a:CatalogID>1</a:CatalogID><a:SiteID>100</a:SiteID></a:Context>"
        ));
        assert!(body.contains(
            "<a:Security><a:IssuerID i:nil=\"true\"/><a:TokenId>abc</a:TokenId></a:Security>"
        ));
        assert!(body.contains("<a:Version>1.0</a:Version>"));
        assert!(body.contains("<orderFilter><FetchOrderLines>true</FetchOrderLines></orderFilter>"));
    }

    #[test]
    fn test_object_keys_are_written_in_ordinal_order() {
        let xml = Envelope::new("Op")
            .with_param("p", json!({"b": 1, "CustomerId": 2, "CustomerID": 3, "A": 4}))
            .encode()
            .unwrap();
        assert!(body_of(&xml).contains(
            "<p><A>4</A><CustomerID>3</CustomerID><CustomerId>2</CustomerId><b>1</b></p>"
        ));
    }

    #[test]
    fn test_arrays_flatten_into_repeated_elements() {
        let filter = json!({
            "OrderReferenceList": ArrayOf::strings(["X1", "X2"]),
            "States": ArrayOf::new("OrderStateEnum", vec!["Shipped".to_string()]),
        });
        let xml = Envelope::new("GetOrderList")
            .with_param("orderFilter", filter)
            .encode()
            .unwrap();
        let body = body_of(&xml);
        assert!(body.contains(
            "<OrderReferenceList><arr:string>X1</arr:string><arr:string>X2</arr:string></OrderReferenceList>"
        ));
        assert!(body.contains("<States><OrderStateEnum>Shipped</OrderStateEnum></States>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = Envelope::new("Op")
            .with_param("request", json!({"Comment": "a < b & c"}))
            .encode()
            .unwrap();
        assert!(xml.contains("<Comment>a &lt; b &amp; c</Comment>"));
    }

    #[test]
    fn test_null_parameter_is_nil() {
        let xml = Envelope::new("GetModelList")
            .with_param("modelFilter", Value::Null)
            .encode()
            .unwrap();
        assert!(body_of(&xml).contains("<modelFilter i:nil=\"true\"/>"));
    }

    #[test]
    fn test_bare_array_is_rejected() {
        let result = Envelope::new("Op").with_param("ids", json!([1, 2])).encode();
        assert!(matches!(result, Err(SoapError::UnsupportedValue(name)) if name == "ids"));

        let nested = Envelope::new("Op")
            .with_param("p", json!({"Items": [[1], [2]]}))
            .encode();
        assert!(matches!(nested, Err(SoapError::UnsupportedValue(name)) if name == "Items"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let build = || {
            Envelope::new("Op")
                .with_param("p", json!({"z": 1, "a": {"y": 2, "b": 3}}))
                .encode()
                .unwrap()
        };
        assert_eq!(build(), build());
    }
}
