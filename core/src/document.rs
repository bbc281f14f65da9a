#![deny(missing_docs)]

//! # OpenAPI Document Assembly
//!
//! Wraps a component-schema map in the minimal OpenAPI 3.0 envelope.
//! Field order of the structs below is the key order of the written file.

use crate::options::{ResolvedOptions, Server};
use crate::schema_generator::ComponentSchemaMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// The `openapi` version string emitted at the document root.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Minimal OpenAPI Info metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenApiInfo {
    /// The title of the API.
    pub title: String,
    /// The version of the API document.
    pub version: String,
    /// Description of the API.
    pub description: String,
}

/// The `components` object; only `schemas` is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenApiComponents {
    /// Component schemas keyed by model name.
    pub schemas: ComponentSchemaMap,
}

/// A complete document: `openapi`, `info`, `servers`, `paths`, `components`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApiDocument {
    /// Always [`OPENAPI_VERSION`].
    pub openapi: &'static str,
    /// Document metadata.
    pub info: OpenApiInfo,
    /// Servers, possibly empty.
    pub servers: Vec<Server>,
    /// Always the empty object.
    pub paths: Map<String, Value>,
    /// Reusable schemas.
    pub components: OpenApiComponents,
}

impl OpenApiDocument {
    /// Serializes with 2-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Assembles the envelope around `schemas`.
pub fn assemble_document(schemas: ComponentSchemaMap, options: &ResolvedOptions) -> OpenApiDocument {
    OpenApiDocument {
        openapi: OPENAPI_VERSION,
        info: OpenApiInfo {
            title: options.title.clone(),
            version: options.version.clone(),
            description: options.description.clone(),
        },
        servers: options.servers.clone(),
        paths: Map::new(),
        components: OpenApiComponents { schemas },
    }
}
