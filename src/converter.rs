use crate::descriptor::{TypeDescriptor, Visibility};
use crate::error::{ConversionError, Result};
use crate::schema::{Schema, SchemaType};

/// Vendor extension key carrying the visibility tag.
const VISIBILITY_EXTENSION: &str = "x-ms-visibility";

/// Converts type descriptors into OpenAPI schema trees.
///
/// Runs recursively to build the entire object shape: through nullable
/// wrappers, dictionary value types, array element types and composite
/// object property types. Only properties without the ignore flag are
/// taken. Every call allocates a fresh output tree; the converter itself
/// carries no state.
pub struct SchemaConverter;

impl SchemaConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a type descriptor without a visibility annotation.
    ///
    /// `None` models a null descriptor and fails with
    /// [`ConversionError::InvalidArgument`].
    pub fn convert(&self, descriptor: Option<&TypeDescriptor>) -> Result<Schema> {
        self.convert_node(descriptor, None)
    }

    /// Convert a type descriptor, stamping the given visibility on the
    /// resulting schema when one is supplied.
    pub fn convert_with_visibility(
        &self,
        descriptor: Option<&TypeDescriptor>,
        visibility: Option<Visibility>,
    ) -> Result<Schema> {
        self.convert_node(descriptor, visibility)
    }

    fn convert_node(
        &self,
        descriptor: Option<&TypeDescriptor>,
        visibility: Option<Visibility>,
    ) -> Result<Schema> {
        // Null check comes first and short-circuits every branch below.
        let descriptor = descriptor.ok_or(ConversionError::InvalidArgument)?;

        // Untyped JSON pass-through aliases collapse to a bare object
        // schema. A supplied visibility is not stamped on it.
        if descriptor.is_json_passthrough() {
            return Ok(Schema::of(SchemaType::Object));
        }

        // Visibility never crosses a nullable wrapper, so a tag attached
        // to a nullable property is lost.
        if let TypeDescriptor::Nullable { of } = descriptor {
            let mut schema = self.convert_node(of.as_deref(), None)?;
            schema.nullable = true;
            return Ok(schema);
        }

        let mut schema = Schema::of(descriptor.data_type());
        schema.format = descriptor.data_format();

        // Stamped before the shape branches so it survives whichever one
        // runs next.
        if let Some(visibility) = visibility {
            schema.extensions.insert(
                VISIBILITY_EXTENSION.to_string(),
                serde_json::Value::String(visibility.display_name().to_string()),
            );
        }

        if descriptor.is_simple() {
            return Ok(schema);
        }

        match descriptor {
            TypeDescriptor::Dictionary { value, .. } => {
                schema.additional_properties =
                    Some(Box::new(self.convert_node(value.as_deref(), None)?));
            }
            TypeDescriptor::Array { element } => {
                schema.schema_type = SchemaType::Array;
                schema.items = Some(Box::new(match element.as_deref() {
                    Some(element) => self.convert_node(Some(element), None)?,
                    // Untyped/raw list.
                    None => Schema::of(SchemaType::Object),
                }));
            }
            TypeDescriptor::Object { properties, .. } => {
                for property in properties.iter().filter(|property| !property.ignore) {
                    let property_schema =
                        self.convert_node(property.type_.as_ref(), property.visibility)?;
                    schema
                        .properties
                        .insert(property.effective_name().to_string(), property_schema);
                }
            }
            // Simple types and wrappers returned above.
            _ => {}
        }

        Ok(schema)
    }
}

impl Default for SchemaConverter {
    fn default() -> Self {
        Self::new()
    }
}
