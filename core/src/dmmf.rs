//! # DMMF Source
//!
//! Reads the ORM's Data Model Meta Format (the JSON dump of `datamodel.models`
//! and `datamodel.enums`) into [`ModelDescriptor`]s.
//!
//! Parsing happens once at construction, so a missing or malformed dump is
//! reported as a configuration error before any generation starts.

use crate::error::{AppError, AppResult};
use crate::model::{FieldDescriptor, FieldKind, ModelDescriptor};
use crate::source::ModelSource;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Intermediate deserialization layer for the `datamodel` object.
#[derive(Debug, Deserialize)]
struct ShimDatamodel {
    models: Vec<ShimModel>,
    #[serde(default)]
    enums: Vec<ShimEnum>,
}

#[derive(Debug, Deserialize)]
struct ShimModel {
    name: String,
    #[serde(default)]
    fields: Vec<ShimField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShimField {
    name: String,
    kind: ShimFieldKind,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    is_required: bool,
    #[serde(default)]
    enum_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ShimFieldKind {
    Scalar,
    Enum,
    Object,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct ShimEnum {
    name: String,
    #[serde(default)]
    values: Vec<ShimEnumValue>,
}

/// Enum values appear either as `{ "name": "ADMIN" }` or as bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShimEnumValue {
    Named { name: String },
    Bare(String),
}

impl ShimEnumValue {
    fn into_name(self) -> String {
        match self {
            Self::Named { name } | Self::Bare(name) => name,
        }
    }
}

/// A [`ModelSource`] backed by a DMMF JSON document.
#[derive(Debug, Clone)]
pub struct DmmfSource {
    models: Vec<ModelDescriptor>,
}

impl DmmfSource {
    /// Loads a DMMF dump from disk.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read DMMF file {:?}: {}", path, e))
        })?;
        Self::from_json_str(&content)
    }

    /// Parses a DMMF document.
    ///
    /// Accepts the full dump (`{ "datamodel": { ... } }`) or the bare datamodel object.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let mut root: Value = serde_json::from_str(content)
            .map_err(|e| AppError::Configuration(format!("Failed to parse DMMF JSON: {}", e)))?;

        let datamodel = root
            .get_mut("datamodel")
            .map(Value::take)
            .unwrap_or(root);

        let shim: ShimDatamodel = serde_json::from_value(datamodel)
            .map_err(|e| AppError::Configuration(format!("Invalid DMMF datamodel: {}", e)))?;

        Ok(Self {
            models: convert_datamodel(shim),
        })
    }
}

impl ModelSource for DmmfSource {
    fn models(&self) -> AppResult<Vec<ModelDescriptor>> {
        Ok(self.models.clone())
    }
}

fn convert_datamodel(shim: ShimDatamodel) -> Vec<ModelDescriptor> {
    let enums: HashMap<String, Vec<String>> = shim
        .enums
        .into_iter()
        .map(|e| {
            let values = e.values.into_iter().map(ShimEnumValue::into_name).collect();
            (e.name, values)
        })
        .collect();

    shim.models
        .into_iter()
        .map(|model| {
            let fields = model
                .fields
                .into_iter()
                .map(|field| convert_field(field, &enums))
                .collect();
            ModelDescriptor::new(model.name, fields)
        })
        .collect()
}

fn convert_field(field: ShimField, enums: &HashMap<String, Vec<String>>) -> FieldDescriptor {
    let kind = match field.kind {
        ShimFieldKind::Enum => {
            // Inline values win over the top-level enum declaration
            let values = field
                .enum_values
                .or_else(|| enums.get(&field.type_name).cloned())
                .unwrap_or_default();
            FieldKind::Enum(values)
        }
        ShimFieldKind::Object => FieldKind::Relation,
        ShimFieldKind::Scalar | ShimFieldKind::Unsupported => FieldKind::Scalar,
    };

    FieldDescriptor {
        name: field.name,
        type_name: field.type_name,
        kind,
        is_required: field.is_required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DMMF: &str = r#"{
        "datamodel": {
            "models": [
                {
                    "name": "User",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true },
                        { "name": "role", "kind": "enum", "type": "Role", "isRequired": true },
                        { "name": "posts", "kind": "object", "type": "Post", "isRequired": true, "isList": true }
                    ]
                },
                {
                    "name": "Post",
                    "fields": [
                        { "name": "status", "kind": "enum", "type": "Status", "isRequired": false, "enumValues": ["DRAFT"] },
                        { "name": "geo", "kind": "unsupported", "type": "geometry", "isRequired": false }
                    ]
                }
            ],
            "enums": [
                { "name": "Role", "values": [{ "name": "ADMIN", "dbName": null }, { "name": "USER" }] },
                { "name": "Status", "values": ["DRAFT", "PUBLISHED"] }
            ]
        }
    }"#;

    #[test]
    fn test_parse_full_dump() {
        let source = DmmfSource::from_json_str(DMMF).unwrap();
        let models = source.models().unwrap();

        assert_eq!(models.len(), 2);
        let user = &models[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.fields[0], FieldDescriptor::scalar("id", "Int", true));
        assert_eq!(user.fields[2].kind, FieldKind::Relation);
        assert_eq!(user.fields[2].type_name, "Post");
    }

    #[test]
    fn test_enum_values_resolved_from_declarations() {
        let models = DmmfSource::from_json_str(DMMF).unwrap().models().unwrap();
        assert_eq!(
            models[0].fields[1].kind,
            FieldKind::Enum(vec!["ADMIN".into(), "USER".into()])
        );
    }

    #[test]
    fn test_inline_enum_values_take_precedence() {
        let models = DmmfSource::from_json_str(DMMF).unwrap().models().unwrap();
        assert_eq!(models[1].fields[0].kind, FieldKind::Enum(vec!["DRAFT".into()]));
    }

    #[test]
    fn test_unsupported_kind_is_scalar() {
        let models = DmmfSource::from_json_str(DMMF).unwrap().models().unwrap();
        assert_eq!(models[1].fields[1].kind, FieldKind::Scalar);
        assert!(!models[1].fields[1].is_required);
    }

    #[test]
    fn test_bare_datamodel_and_unknown_enum() {
        let json = r#"{ "models": [ { "name": "A", "fields": [
            { "name": "e", "kind": "enum", "type": "Missing", "isRequired": true }
        ] } ] }"#;
        let models = DmmfSource::from_json_str(json).unwrap().models().unwrap();
        assert_eq!(models[0].fields[0].kind, FieldKind::Enum(vec![]));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = DmmfSource::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_missing_models_is_configuration_error() {
        let err = DmmfSource::from_json_str(r#"{ "datamodel": { "enums": [] } }"#).unwrap_err();
        match err {
            AppError::Configuration(msg) => assert!(msg.contains("models")),
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DMMF.as_bytes()).unwrap();

        let source = DmmfSource::from_path(file.path()).unwrap();
        assert_eq!(source.models().unwrap().len(), 2);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = DmmfSource::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
