#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts ORM field descriptions into OpenAPI property schemas.
//! Handles scalars, enums and relations.

use crate::model::{FieldDescriptor, FieldKind, ScalarType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Prefix of every local component reference.
pub const COMPONENT_REF_PREFIX: &str = "#/components/schemas/";

/// Represents the simplified JSON types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    /// A string type.
    String,
    /// An integer type.
    Integer,
    /// A floating point number.
    Number,
    /// A boolean type.
    Boolean,
    /// A free-form object.
    Object,
}

impl JsonType {
    /// The OpenAPI `type` keyword value.
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
        }
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JsonType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Schema emitted for a single model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySchema {
    /// `{ "type": ..., "format": ... }`
    Primitive {
        /// The primary JSON type.
        type_: JsonType,
        /// Optional format specifier (e.g. "date-time").
        format: Option<String>,
    },
    /// `{ "type": "string", "enum": [...] }`
    Enum {
        /// Allowed values, possibly empty.
        values: Vec<String>,
    },
    /// `{ "$ref": "#/components/schemas/<target>" }`
    Ref {
        /// Referenced model name.
        target: String,
    },
}

impl PropertySchema {
    /// The full `$ref` pointer for `Ref` schemas.
    pub fn ref_location(&self) -> Option<String> {
        match self {
            Self::Ref { target } => Some(format!("{}{}", COMPONENT_REF_PREFIX, target)),
            _ => None,
        }
    }
}

impl Serialize for PropertySchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Primitive { type_, format } => {
                let len = if format.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("type", type_)?;
                if let Some(format) = format {
                    map.serialize_entry("format", format)?;
                }
                map.end()
            }
            Self::Enum { values } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &JsonType::String)?;
                map.serialize_entry("enum", values)?;
                map.end()
            }
            Self::Ref { target } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$ref", &format!("{}{}", COMPONENT_REF_PREFIX, target))?;
                map.end()
            }
        }
    }
}

/// Trait for converting field descriptions to property schemas.
///
/// Mapping is total: every field yields exactly one schema.
pub trait TypeMapper {
    /// Maps a field (e.g. `id: Int`) to a property schema.
    fn map(&self, field: &FieldDescriptor) -> PropertySchema;
}

/// The standard ORM-to-OpenAPI implementation of `TypeMapper`.
///
/// Precedence: enum kind, then relation kind, then the scalar table.
/// Scalars outside the table fall back to `string`.
pub struct OrmToJsonMapper;

impl TypeMapper for OrmToJsonMapper {
    fn map(&self, field: &FieldDescriptor) -> PropertySchema {
        match &field.kind {
            FieldKind::Enum(values) => PropertySchema::Enum {
                values: values.clone(),
            },
            FieldKind::Relation => PropertySchema::Ref {
                target: field.type_name.clone(),
            },
            FieldKind::Scalar => map_scalar(&field.scalar_type()),
        }
    }
}

/// Maps a scalar through the fixed type table.
pub fn map_scalar(scalar: &ScalarType) -> PropertySchema {
    match scalar {
        ScalarType::String => simple(JsonType::String),
        ScalarType::Int => simple(JsonType::Integer),
        ScalarType::Float => simple(JsonType::Number),
        ScalarType::Boolean => simple(JsonType::Boolean),
        ScalarType::DateTime => formatted(JsonType::String, "date-time"),
        ScalarType::Json => simple(JsonType::Object),
        // Fallback: unknown scalar names are emitted as plain strings
        ScalarType::Other(_) => simple(JsonType::String),
    }
}

// Helpers for cleaner construction
fn simple(t: JsonType) -> PropertySchema {
    PropertySchema::Primitive {
        type_: t,
        format: None,
    }
}

fn formatted(t: JsonType, fmt: &str) -> PropertySchema {
    PropertySchema::Primitive {
        type_: t,
        format: Some(fmt.to_string()),
    }
}
