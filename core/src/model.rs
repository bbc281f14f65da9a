//! # Data Models
//!
//! Intermediate Representation (IR) of the ORM data model handed over by a
//! [`ModelSource`](crate::source::ModelSource).

use std::fmt::Display;

/// Scalar column types known to the type table.
///
/// Parsing is total: any name outside the table is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    /// `String`.
    String,
    /// `Int`.
    Int,
    /// `Float`.
    Float,
    /// `Boolean`.
    Boolean,
    /// `DateTime`.
    DateTime,
    /// `Json`.
    Json,
    /// Any other declared scalar name (e.g. `BigInt`, `Decimal`, `Bytes`).
    Other(String),
}

impl ScalarType {
    /// Resolves a declared type name against the type table.
    pub fn parse(name: &str) -> Self {
        match name {
            "String" => Self::String,
            "Int" => Self::Int,
            "Float" => Self::Float,
            "Boolean" => Self::Boolean,
            "DateTime" => Self::DateTime,
            "Json" => Self::Json,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::DateTime => write!(f, "DateTime"),
            Self::Json => write!(f, "Json"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// What a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A primitive column; the declared type names a [`ScalarType`].
    Scalar,
    /// An enum column with its allowed values (empty when unknown).
    Enum(Vec<String>),
    /// A relation; the declared type names another model.
    Relation,
}

/// A single field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The name of the field.
    pub name: String,
    /// The declared type name (scalar name, enum name or model name).
    pub type_name: String,
    /// Kind tag.
    pub kind: FieldKind,
    /// Whether the field is required.
    pub is_required: bool,
}

impl FieldDescriptor {
    /// Creates a scalar field.
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>, is_required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::Scalar,
            is_required,
        }
    }

    /// Creates an enum field carrying its values.
    pub fn enumeration(
        name: impl Into<String>,
        type_name: impl Into<String>,
        values: Vec<String>,
        is_required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::Enum(values),
            is_required,
        }
    }

    /// Creates a relation field pointing at `target` model.
    pub fn relation(name: impl Into<String>, target: impl Into<String>, is_required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: target.into(),
            kind: FieldKind::Relation,
            is_required,
        }
    }

    /// Scalar type of the field, meaningful for `FieldKind::Scalar` only.
    pub fn scalar_type(&self) -> ScalarType {
        ScalarType::parse(&self.type_name)
    }
}

/// A model (table) with its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model name, used as the component schema key.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    /// Creates a model from its name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
