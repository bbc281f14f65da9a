#![deny(missing_docs)]

//! # Schema Generator
//!
//! Utilities for converting ORM model descriptions into OpenAPI component schemas.
//! Every model becomes an `object` schema whose `properties` follow field
//! declaration order and whose `required` list names the required fields in
//! that same order.

use crate::error::{AppError, AppResult};
use crate::model::{FieldKind, ModelDescriptor};
use crate::source::ModelSource;
use crate::type_mapping::{JsonType, OrmToJsonMapper, PropertySchema, TypeMapper};
use indexmap::IndexMap;
use serde::Serialize;

/// Component schemas keyed by model name, in model order.
pub type ComponentSchemaMap = IndexMap<String, ComponentSchema>;

/// Object schema generated for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSchema {
    /// Always `object`.
    #[serde(rename = "type")]
    pub type_: JsonType,
    /// Property schemas in field declaration order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required fields in declaration order. Emitted even when empty.
    pub required: Vec<String>,
}

impl ComponentSchema {
    fn empty() -> Self {
        Self {
            type_: JsonType::Object,
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }
}

/// A relation whose target has no component schema in the generated map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    /// Model owning the field.
    pub model: String,
    /// Relation field name.
    pub field: String,
    /// Referenced model name.
    pub target: String,
}

/// Generates the component schema for a single model using `mapper`.
pub fn generate_model_schema(model: &ModelDescriptor, mapper: &impl TypeMapper) -> ComponentSchema {
    let mut schema = ComponentSchema::empty();

    for field in &model.fields {
        // A repeated field name replaces the earlier entry in place
        schema
            .properties
            .insert(field.name.clone(), mapper.map(field));

        let listed = schema.required.contains(&field.name);
        if field.is_required && !listed {
            schema.required.push(field.name.clone());
        } else if !field.is_required && listed {
            schema.required.retain(|name| name != &field.name);
        }
    }

    schema
}

/// Generates component schemas for all models with the given mapper.
///
/// Pure transform; later models with a duplicate name replace earlier ones.
pub fn generate_component_schemas_with(
    models: &[ModelDescriptor],
    mapper: &impl TypeMapper,
) -> ComponentSchemaMap {
    models
        .iter()
        .map(|model| {
            tracing::debug!(model = %model.name, fields = model.fields.len(), "mapping model");
            (model.name.clone(), generate_model_schema(model, mapper))
        })
        .collect()
}

/// Generates component schemas for all models with [`OrmToJsonMapper`].
pub fn generate_component_schemas(models: &[ModelDescriptor]) -> ComponentSchemaMap {
    generate_component_schemas_with(models, &OrmToJsonMapper)
}

/// Pulls the models out of `source` and maps them.
///
/// Any introspection failure is logged and reported as
/// [`AppError::SchemaGeneration`] with the original error as its cause.
/// No partial map is returned. Relations pointing outside the map are kept
/// and logged as warnings.
pub fn generate_schemas_from_source<S: ModelSource + ?Sized>(
    source: &S,
) -> AppResult<ComponentSchemaMap> {
    let models = source.models().map_err(|e| {
        tracing::error!(error = %e, "error generating schemas");
        AppError::schema_generation(e)
    })?;

    let schemas = generate_component_schemas(&models);
    for dangling in find_dangling_refs(&models, &schemas) {
        tracing::warn!(
            model = %dangling.model,
            field = %dangling.field,
            target = %dangling.target,
            "relation references a model without a component schema"
        );
    }

    Ok(schemas)
}

/// Lists relation fields whose target model is missing from `models`.
///
/// Dangling references are legal output; this only reports them.
pub fn find_dangling_refs(models: &[ModelDescriptor], schemas: &ComponentSchemaMap) -> Vec<DanglingRef> {
    models
        .iter()
        .flat_map(|model| {
            model
                .fields
                .iter()
                .filter(|field| field.kind == FieldKind::Relation)
                .filter(|field| !schemas.contains_key(&field.type_name))
                .map(|field| DanglingRef {
                    model: model.name.clone(),
                    field: field.name.clone(),
                    target: field.type_name.clone(),
                })
        })
        .collect()
}
