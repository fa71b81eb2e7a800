use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Ordered field table of a `properties` block. Declaration order in the
/// mapping file is the order fields appear in generated documents.
pub type Properties = IndexMap<String, FieldSpec>;

/// A search-engine field type tag.
///
/// Unknown tags parse into [`FieldType::Other`] so that fallback behavior is
/// a lookup decision, not a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Keyword,
    Text,
    Date,
    Integer,
    Long,
    Float,
    Boolean,
    Ip,
    Email,
    Object,
    Nested,
    Other(String),
}

impl FieldType {
    /// The tag exactly as it appears in mapping files.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Keyword => "keyword",
            Self::Text => "text",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Ip => "ip",
            Self::Email => "email",
            Self::Object => "object",
            Self::Nested => "nested",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this type holds sub-fields rather than a scalar value.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object | Self::Nested)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "keyword" => Self::Keyword,
            "text" => Self::Text,
            "date" => Self::Date,
            "integer" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            "ip" => Self::Ip,
            "email" => Self::Email,
            "object" => Self::Object,
            "nested" => Self::Nested,
            _ => Self::Other(tag),
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Other(tag) => tag,
            other => other.as_tag().to_string(),
        }
    }
}

/// One field entry in a `properties` block: an optional type tag plus
/// optional sub-fields. Extra mapping parameters (analyzers, formats) are
/// accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl FieldSpec {
    /// A scalar field with the given type tag.
    pub fn scalar(tag: &str) -> Self {
        Self {
            field_type: Some(FieldType::from(tag.to_string())),
            properties: None,
        }
    }

    /// An `object` field with the given sub-fields.
    pub fn object(properties: Properties) -> Self {
        Self {
            field_type: Some(FieldType::Object),
            properties: Some(properties),
        }
    }

    /// A `nested` field with the given sub-fields.
    pub fn nested(properties: Properties) -> Self {
        Self {
            field_type: Some(FieldType::Nested),
            properties: Some(properties),
        }
    }

    /// The effective type of this field. A missing tag resolves to `object`
    /// when sub-fields are present and to `text` otherwise.
    pub fn resolved_type(&self) -> FieldType {
        match (&self.field_type, &self.properties) {
            (Some(tag), _) => tag.clone(),
            (None, Some(_)) => FieldType::Object,
            (None, None) => FieldType::Text,
        }
    }

    /// Sub-fields, when this entry declares any.
    pub fn children(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }
}

/// A parsed index mapping.
///
/// Keeps the raw JSON body verbatim (index creation sends it back to the
/// search engine unchanged) alongside the typed `mappings.properties` tree
/// the synthesizer walks. A mapping without that subtree is valid and has no
/// fields.
#[derive(Debug, Clone)]
pub struct IndexMapping {
    body: Value,
    properties: Properties,
}

impl IndexMapping {
    /// Build a mapping from an already-parsed JSON body.
    pub fn from_value(body: Value) -> Result<Self> {
        if !body.is_object() {
            return Err(Error::InvalidMapping(
                "mapping root must be a JSON object".to_string(),
            ));
        }
        let properties = match body.pointer("/mappings/properties") {
            Some(node) => serde_json::from_value(node.clone())?,
            None => Properties::new(),
        };
        Ok(Self { body, properties })
    }

    /// Parse a mapping from JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(text)?;
        Self::from_value(body)
    }

    /// The full mapping body as read from the file.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The typed top-level field table.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}
