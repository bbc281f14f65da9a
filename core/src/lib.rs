#![deny(missing_docs)]

//! # Swagger Gen Core
//!
//! Turns an ORM's data model into an OpenAPI 3.0 document with one component
//! schema per model, and writes it to `<dir>/swagger.json`.

/// Shared error types.
pub mod error;

/// Model and field descriptions (IR).
pub mod model;

/// The introspection contract.
pub mod source;

/// DMMF JSON introspection source.
pub mod dmmf;

/// Type mapping logic (ORM field -> OpenAPI property).
pub mod type_mapping;

/// Component schema generation.
pub mod schema_generator;

/// Generation options and defaults.
pub mod options;

/// OpenAPI envelope assembly.
pub mod document;

/// `swagger.json` persistence.
pub mod writer;

/// End-to-end generator.
pub mod generator;

pub use dmmf::DmmfSource;
pub use document::{assemble_document, OpenApiDocument, OPENAPI_VERSION};
pub use error::{AppError, AppResult};
pub use generator::{SwaggerGenerator, DEFAULT_OUTPUT_DIR};
pub use model::{FieldDescriptor, FieldKind, ModelDescriptor, ScalarType};
pub use options::{GeneratorOptions, ResolvedOptions, Server, DEFAULTS};
pub use schema_generator::{
    find_dangling_refs, generate_component_schemas, ComponentSchema, ComponentSchemaMap,
    DanglingRef,
};
pub use source::ModelSource;
pub use type_mapping::{JsonType, OrmToJsonMapper, PropertySchema, TypeMapper};
pub use writer::{write_document, WriteOutcome, SWAGGER_FILE_NAME};
