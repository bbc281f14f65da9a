#![deny(missing_docs)]

//! # Generator Options
//!
//! Partial configuration (`GeneratorOptions`) merged over the constant
//! [`DEFAULTS`] to produce the concrete [`ResolvedOptions`] a generation run uses.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Server metadata for OpenAPI `servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL (may be relative).
    pub url: String,
    /// Optional description for the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Server {
    /// Creates a new server with the required URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    /// Sets the server description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fallback values for every option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefaults {
    /// Default `info.title`.
    pub title: &'static str,
    /// Default `info.version`.
    pub version: &'static str,
    /// Default `info.description`.
    pub description: &'static str,
    /// Default overwrite policy.
    pub overwrite: bool,
}

/// The defaults applied to omitted options. `servers` defaults to empty.
pub const DEFAULTS: OptionDefaults = OptionDefaults {
    title: "API Documentation",
    version: "1.0.0",
    description: "Generated API documentation",
    overwrite: true,
};

/// Partial configuration for a generation run.
///
/// Every field is optional; omitted fields take their value from [`DEFAULTS`]
/// in [`GeneratorOptions::resolve`]. Deserializes from a camelCase JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Title of the API documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Version of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Description of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Servers to list in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Whether an existing `swagger.json` may be replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl GeneratorOptions {
    /// Loads options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read options file {:?}: {}", path, e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Configuration(format!("Invalid options file {:?}: {}", path, e)))
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the API version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a server.
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.get_or_insert_with(Vec::new).push(server);
        self
    }

    /// Sets the overwrite policy.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Layers `over` on top of `self`: fields set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            title: over.title.or(self.title),
            version: over.version.or(self.version),
            description: over.description.or(self.description),
            servers: over.servers.or(self.servers),
            overwrite: over.overwrite.or(self.overwrite),
        }
    }

    /// Fills every omitted field from [`DEFAULTS`].
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            title: self.title.unwrap_or_else(|| DEFAULTS.title.to_string()),
            version: self.version.unwrap_or_else(|| DEFAULTS.version.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULTS.description.to_string()),
            servers: self.servers.unwrap_or_default(),
            overwrite: self.overwrite.unwrap_or(DEFAULTS.overwrite),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// `info.title`.
    pub title: String,
    /// `info.version`.
    pub version: String,
    /// `info.description`.
    pub description: String,
    /// `servers`.
    pub servers: Vec<Server>,
    /// Overwrite policy.
    pub overwrite: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        GeneratorOptions::default().resolve()
    }
}
