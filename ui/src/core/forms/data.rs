//! The flat record a form collects.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::schema::{FieldKind, FormSchema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// A chosen upload. Only metadata is kept; the name is what gets posted.
    File { name: String, size: u64 },
}

impl FieldValue {
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::File => FieldValue::File {
                name: String::new(),
                size: 0,
            },
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::File { name, .. } => name.trim().is_empty(),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormData {
    /// Every field of `schema`, empty.
    pub fn for_schema(schema: &FormSchema) -> Self {
        let values = schema
            .fields()
            .map(|field| (field.name, FieldValue::empty_for(field.kind)))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Set a known field. Unknown names are ignored and reported with `false`.
    pub fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        self.set(name, FieldValue::Text(text.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for FormData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value.as_text().trim())?;
        }
        map.end()
    }
}
