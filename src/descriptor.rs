use crate::error::ConversionError;
use crate::schema::{SchemaFormat, SchemaType};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reflective description of a host type, tagged by `kind` in JSON.
///
/// Descriptor trees own their children, so they are finite and acyclic by
/// construction. Shapes the converter does not recognize fall back to a
/// plain `object` schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    Int32,
    Int64,
    Float,
    Double,
    Boolean,
    String,
    Char,
    DateTime,
    ByteArray,
    Uuid,

    /// The host's untyped JSON object alias.
    JsonObject,

    /// The host's untyped JSON token alias.
    JsonToken,

    /// Nullable wrapper around an underlying type.
    Nullable {
        #[serde(default)]
        of: Option<Box<TypeDescriptor>>,
    },

    /// Generic key-to-value mapping. The key type is carried for
    /// completeness but never consulted; OpenAPI dictionaries are
    /// string-keyed.
    Dictionary {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<Box<TypeDescriptor>>,
        #[serde(default)]
        value: Option<Box<TypeDescriptor>>,
    },

    /// Native array or single-argument sequence. A missing element type
    /// models the untyped/raw list.
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        element: Option<Box<TypeDescriptor>>,
    },

    /// Composite type with member properties in declaration order.
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        properties: Vec<PropertyDescriptor>,
    },
}

impl TypeDescriptor {
    /// Map the descriptor to its OpenAPI data type. Unrecognized shapes,
    /// composites included, map to `object`.
    pub fn data_type(&self) -> SchemaType {
        match self {
            Self::Int32 | Self::Int64 => SchemaType::Integer,
            Self::Float | Self::Double => SchemaType::Number,
            Self::Boolean => SchemaType::Boolean,
            Self::String | Self::Char | Self::DateTime | Self::ByteArray | Self::Uuid => {
                SchemaType::String
            }
            _ => SchemaType::Object,
        }
    }

    /// Map the descriptor to its OpenAPI data format, if it has one.
    pub fn data_format(&self) -> Option<SchemaFormat> {
        match self {
            Self::Int32 => Some(SchemaFormat::Int32),
            Self::Int64 => Some(SchemaFormat::Int64),
            Self::Float => Some(SchemaFormat::Float),
            Self::Double => Some(SchemaFormat::Double),
            Self::DateTime => Some(SchemaFormat::DateTime),
            Self::ByteArray => Some(SchemaFormat::Byte),
            Self::Uuid => Some(SchemaFormat::Uuid),
            _ => None,
        }
    }

    /// Whether the descriptor is a simple/primitive type.
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Int32
                | Self::Int64
                | Self::Float
                | Self::Double
                | Self::Boolean
                | Self::String
                | Self::Char
                | Self::DateTime
                | Self::ByteArray
                | Self::Uuid
        )
    }

    /// Whether the descriptor is one of the untyped JSON pass-through
    /// aliases.
    pub fn is_json_passthrough(&self) -> bool {
        matches!(self, Self::JsonObject | Self::JsonToken)
    }
}

/// A member property of a composite type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,

    /// Declared type of the property. `None` models a null descriptor and
    /// fails conversion with `InvalidArgument`.
    #[serde(rename = "type", default)]
    pub type_: Option<TypeDescriptor>,

    /// Explicit serialization-name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,

    /// Skip this property when serializing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore: bool,

    /// Own-declared visibility, not inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl PropertyDescriptor {
    /// The name the property serializes under: the explicit override if
    /// present, else the member's own name.
    pub fn effective_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Closed set of visibility tags surfaced through the `x-ms-visibility`
/// vendor extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Important,
    Advanced,
    Internal,
}

impl Visibility {
    /// Canonical external string for the tag.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Important => "important",
            Self::Advanced => "advanced",
            Self::Internal => "internal",
        }
    }
}

impl FromStr for Visibility {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_case(Case::Flat).as_str() {
            "important" => Ok(Self::Important),
            "advanced" => Ok(Self::Advanced),
            "internal" => Ok(Self::Internal),
            other => Err(ConversionError::ParseError(format!(
                "unknown visibility `{}`",
                other
            ))),
        }
    }
}
