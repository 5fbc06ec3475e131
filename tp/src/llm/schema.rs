//! Provider-neutral response schema
//!
//! The itinerary shape is declared once as a `SchemaNode` tree and converted
//! to whichever dialect the provider expects: Gemini's `responseSchema`
//! (OpenAPI subset, uppercase type names) or plain JSON Schema for
//! OpenAI-compatible structured output.

use serde_json::{Map, Value, json};

/// One node of a response schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String {
        description: Option<String>,
    },
    Integer {
        description: Option<String>,
    },
    Array {
        description: Option<String>,
        items: Box<SchemaNode>,
    },
    /// Properties keep declaration order; every property is required
    Object {
        description: Option<String>,
        properties: Vec<(String, SchemaNode)>,
    },
}

impl SchemaNode {
    pub fn string(description: impl Into<String>) -> Self {
        Self::String {
            description: Some(description.into()),
        }
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self::Integer {
            description: Some(description.into()),
        }
    }

    pub fn array(description: impl Into<String>, items: SchemaNode) -> Self {
        Self::Array {
            description: Some(description.into()),
            items: Box::new(items),
        }
    }

    /// Object with no description
    pub fn object(properties: Vec<(&str, SchemaNode)>) -> Self {
        Self::Object {
            description: None,
            properties: properties.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Self::String { description }
            | Self::Integer { description }
            | Self::Array { description, .. }
            | Self::Object { description, .. } => description.as_deref(),
        }
    }

    /// Names of the required properties, if this is an object
    pub fn required(&self) -> Vec<&str> {
        match self {
            Self::Object { properties, .. } => properties.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Convert to Gemini's `responseSchema` format
    pub fn to_gemini_schema(&self) -> Value {
        let mut out = Map::new();
        match self {
            Self::String { .. } => {
                out.insert("type".into(), json!("STRING"));
            }
            Self::Integer { .. } => {
                out.insert("type".into(), json!("INTEGER"));
            }
            Self::Array { items, .. } => {
                out.insert("type".into(), json!("ARRAY"));
                out.insert("items".into(), items.to_gemini_schema());
            }
            Self::Object { properties, .. } => {
                out.insert("type".into(), json!("OBJECT"));
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_gemini_schema()))
                    .collect();
                out.insert("properties".into(), Value::Object(props));
                out.insert("required".into(), json!(self.required()));
                out.insert("propertyOrdering".into(), json!(self.required()));
            }
        }
        if let Some(d) = self.description() {
            out.insert("description".into(), json!(d));
        }
        Value::Object(out)
    }

    /// Convert to strict JSON Schema (no extra properties allowed)
    pub fn to_json_schema(&self) -> Value {
        let mut out = Map::new();
        match self {
            Self::String { .. } => {
                out.insert("type".into(), json!("string"));
            }
            Self::Integer { .. } => {
                out.insert("type".into(), json!("integer"));
            }
            Self::Array { items, .. } => {
                out.insert("type".into(), json!("array"));
                out.insert("items".into(), items.to_json_schema());
            }
            Self::Object { properties, .. } => {
                out.insert("type".into(), json!("object"));
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_schema()))
                    .collect();
                out.insert("properties".into(), Value::Object(props));
                out.insert("required".into(), json!(self.required()));
                out.insert("additionalProperties".into(), json!(false));
            }
        }
        if let Some(d) = self.description() {
            out.insert("description".into(), json!(d));
        }
        Value::Object(out)
    }
}
