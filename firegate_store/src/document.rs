//! Value model for documents crossing the store boundary.

use serde_json::{Map, Value};

/// Field map of a single document: string keys to JSON-representable values.
pub type Fields = Map<String, Value>;

/// Conjunction of equality predicates. Every (field, value) entry must match
/// for a document to pass; an empty filter passes everything.
pub type Filter = Map<String, Value>;

/// A document fetched from or destined for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store- or caller-assigned identifier.
    pub id: String,
    /// The document body. No schema is enforced.
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Merge the id into the field map, producing the mapping shape tools
    /// hand back to clients. An existing "id" field is overwritten.
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}
