//! Opaque references to remote DOM nodes

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::result::UbicarResult;

/// JSON key identifying a web element reference on the wire.
///
/// Fixed by the WebDriver standard; every conforming remote end tags
/// element references with the same magic string.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Opaque handle to a remote DOM node.
///
/// Handles are owned by the session that minted them and are only
/// meaningful to that session. Geometry resolution reads through a handle
/// but never mutates the node it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    id: String,
}

impl ElementHandle {
    /// Wrap a remote element reference
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The remote reference string
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parse a handle out of a remote end's JSON value
    pub fn from_json(value: &serde_json::Value) -> UbicarResult<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// The W3C wire representation, a map keyed by [`ELEMENT_KEY`]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ ELEMENT_KEY: self.id })
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl Serialize for ElementHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ELEMENT_KEY, &self.id)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ElementHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HandleVisitor;

        impl<'de> Visitor<'de> for HandleVisitor {
            type Value = ElementHandle;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a web element reference map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut id = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == ELEMENT_KEY {
                        id = Some(map.next_value::<String>()?);
                    } else {
                        let _ = map.next_value::<de::IgnoredAny>()?;
                    }
                }
                id.map(ElementHandle::new)
                    .ok_or_else(|| de::Error::missing_field(ELEMENT_KEY))
            }
        }

        deserializer.deserialize_map(HandleVisitor)
    }
}
