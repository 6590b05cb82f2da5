use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI data type tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// OpenAPI data format refining a [`SchemaType`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    Int32,
    Int64,
    Float,
    Double,
    #[serde(rename = "date-time")]
    DateTime,
    Byte,
    Uuid,
}

/// An OpenAPI Schema Object as produced by the converter.
///
/// Exactly one shape discriminant is populated, consistent with `type`:
/// `properties` for objects, `items` for arrays, `additionalProperties`
/// for dictionaries. Vendor extensions serialize inline as sibling keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SchemaFormat>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Property schemas in declaration order of the source type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,

    #[serde(flatten)]
    pub extensions: IndexMap<String, serde_json::Value>,
}

impl Schema {
    /// Create a bare schema of the given type.
    pub fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
            nullable: false,
            items: None,
            properties: IndexMap::new(),
            additional_properties: None,
            extensions: IndexMap::new(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
