//! Response decoding
//!
//! Turns a response envelope into a plain record. There is no schema at hand,
//! so the conversion is structural:
//! - namespace prefixes are dropped
//! - `i:nil="true"` and empty leaves become `null`
//! - elements with children become objects, repeated children become arrays
//! - leaf text is kept verbatim as a string

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Fault, Result, SoapError};

/// A parsed XML element
#[derive(Debug, Default)]
struct Node {
    name: String,
    nil: bool,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut nil = false;
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if attr.key.local_name().as_ref() == b"nil" && attr.value.as_ref() == b"true" {
                nil = true;
            }
        }
        Ok(Self {
            name,
            nil,
            ..Default::default()
        })
    }

    fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    fn into_value(self) -> Value {
        if self.nil {
            return Value::Null;
        }

        if self.children.is_empty() {
            return if self.text.trim().is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            };
        }

        let mut map = Map::new();
        for child in self.children {
            let name = child.name.clone();
            let value = child.into_value();
            match map.get_mut(&name) {
                None => {
                    map.insert(name, value);
                }
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            }
        }
        Value::Object(map)
    }
}

/// Parse a document and return its root element
fn parse_document(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Node::from_start(&start)?),
            Event::Empty(start) => {
                let node = Node::from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return Ok(node),
                }
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| SoapError::Malformed("unbalanced end tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return Ok(node),
                }
            }
            Event::Eof => {
                return Err(SoapError::Malformed("no root element".to_string()));
            }
            _ => {}
        }
    }
}

fn fault_from(node: &Node) -> Fault {
    let text = |n: Option<&Node>| n.map(|n| n.text.trim().to_string()).unwrap_or_default();

    // SOAP 1.1 carries faultcode/faultstring, SOAP 1.2 carries Code/Value and Reason/Text
    let code = match node.child("faultcode") {
        Some(code) => code.text.trim().to_string(),
        None => text(node.child("Code").and_then(|c| c.child("Value"))),
    };
    let message = match node.child("faultstring") {
        Some(message) => message.text.trim().to_string(),
        None => text(node.child("Reason").and_then(|r| r.child("Text"))),
    };

    Fault { code, message }
}

/// Decode a response envelope into the operation result record
///
/// Returns the content of `<OpResult>` inside `<OpResponse>`, or `null` when the
/// response element is empty. A `Fault` body is returned as `SoapError::Fault`.
pub fn decode(xml: &str) -> Result<Value> {
    let root = parse_document(xml)?;
    if root.name != "Envelope" {
        return Err(SoapError::Malformed(format!(
            "expected Envelope, found {}",
            root.name
        )));
    }

    let body = root
        .children
        .into_iter()
        .find(|c| c.name == "Body")
        .ok_or_else(|| SoapError::Malformed("missing Body".to_string()))?;

    let payload = body
        .children
        .into_iter()
        .next()
        .ok_or_else(|| SoapError::Malformed("empty Body".to_string()))?;

    if payload.name == "Fault" {
        let fault = fault_from(&payload);
        debug!("Service returned a fault: {}", fault);
        return Err(SoapError::Fault(fault));
    }

    Ok(payload
        .children
        .into_iter()
        .next()
        .map(Node::into_value)
        .unwrap_or(Value::Null))
}
