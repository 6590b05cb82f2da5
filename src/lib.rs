pub mod converter;
pub mod descriptor;
pub mod error;
pub mod schema;

pub use converter::SchemaConverter;
pub use descriptor::{PropertyDescriptor, TypeDescriptor, Visibility};
pub use error::{ConversionError, Result};
pub use schema::{Schema, SchemaFormat, SchemaType};

/// Convert a type descriptor JSON document to an OpenAPI schema JSON string
pub fn convert_descriptor(input: &str) -> Result<String> {
    let descriptor: Option<TypeDescriptor> = serde_json::from_str(input)
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;

    let converter = SchemaConverter::new();
    let schema = converter.convert(descriptor.as_ref())?;

    serde_json::to_string_pretty(&schema).map_err(|e| ConversionError::Serialization(e.to_string()))
}

/// Convert a type descriptor JSON document, stamping a visibility tag on the
/// root schema
pub fn convert_descriptor_with_visibility(input: &str, visibility: Visibility) -> Result<String> {
    let descriptor: Option<TypeDescriptor> = serde_json::from_str(input)
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;

    let converter = SchemaConverter::new();
    let schema = converter.convert_with_visibility(descriptor.as_ref(), Some(visibility))?;

    serde_json::to_string_pretty(&schema).map_err(|e| ConversionError::Serialization(e.to_string()))
}
