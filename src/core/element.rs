//! Element module - Parsed template nodes
//!
//! Documents come from the template parser as JSON: a list of nodes tagged by
//! `"type"`, where elements carry their attributes under `"attribs"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute mapping of an element
pub type Attributes = BTreeMap<String, AttrValue>;

/// Attribute value as handed over by the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
    /// Objects, arrays and null
    Structured(serde_json::Value),
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        AttrValue::Flag(flag)
    }
}

/// A parsed template tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,

    #[serde(rename = "attribs", default)]
    pub attributes: Attributes,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Tag(Element),
    Text { data: String },
    Comment { data: String },
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Tag(element)
    }
}
