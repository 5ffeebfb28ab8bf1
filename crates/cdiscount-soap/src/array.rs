//! Serialization arrays
//!
//! The service expects lists as a wrapper element holding one child per item,
//! every child carrying the same name (`<States><OrderStateEnum>..</OrderStateEnum>..</States>`).
//! `ArrayOf` serializes as a single-entry map `{ item: [..] }`, which the envelope
//! encoder flattens into repeated elements.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A list of items sent under a fixed element name
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayOf<T> {
    item: &'static str,
    items: Vec<T>,
}

impl<T> ArrayOf<T> {
    /// Creates an array whose items are written as `<item>` elements
    pub fn new(item: &'static str, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            item,
            items: items.into_iter().collect(),
        }
    }

    pub fn item_name(&self) -> &'static str {
        self.item
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ArrayOf<String> {
    /// `ArrayOfstring` from the serialization arrays namespace
    pub fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::new("arr:string", items.into_iter().map(Into::into))
    }
}

impl ArrayOf<i64> {
    /// `ArrayOflong` from the serialization arrays namespace
    pub fn longs(items: impl IntoIterator<Item = i64>) -> Self {
        Self::new("arr:long", items)
    }
}

impl ArrayOf<i32> {
    /// `ArrayOfint` from the serialization arrays namespace
    pub fn ints(items: impl IntoIterator<Item = i32>) -> Self {
        Self::new("arr:int", items)
    }
}

impl<T: Serialize> Serialize for ArrayOf<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.item, &self.items)?;
        map.end()
    }
}
