//! Interop with `serde_json` and serde.
//!
//! Holes have no JSON form. They are written as `null`, so converting a
//! sparse array to JSON and back fills its holes with `Node::Null`.

use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::node::Node;

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(Arc::new(
                items.into_iter().map(|item| Some(Node::from(item))).collect(),
            )),
            Value::Object(map) => Node::Object(Arc::new(
                map.into_iter().map(|(k, v)| (k, Node::from(v))).collect(),
            )),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        node.to_value()
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_value()
    }
}

impl Node {
    /// Deep-copy into a `serde_json::Value`.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|slot| slot.as_ref().map_or(Value::Null, Node::to_value))
                    .collect(),
            ),
            Node::Object(map) => {
                let mut out = Map::new();
                for (key, value) in map.iter() {
                    out.insert(key.clone(), value.to_value());
                }
                Value::Object(out)
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for slot in items.iter() {
                    match slot {
                        Some(node) => seq.serialize_element(node)?,
                        None => seq.serialize_element(&())?,
                    }
                }
                seq.end()
            }
            Node::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}
