//! Read-merge-write of the persisted swagger document.
//!
//! Every merge reads the whole document, replaces one section of
//! `swaggerDefinition` wholesale and writes the whole document back to the same
//! path. Nothing is held between the read and the write: two merges racing on
//! one document leave whichever write finished last.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::{DocumentInfo, SwaggifyConfig};
use crate::error::{SwaggifyError, SwaggifyResult};
use crate::paths::PathDefinitions;
use crate::registry::Registry;
use crate::schema::SchemaDefinitions;

/// Top-level key holding the swagger definition inside the document.
pub const SWAGGER_DEFINITION_KEY: &str = "swaggerDefinition";

/// The section of `swaggerDefinition` a merge replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSection {
    Definitions,
    Paths,
}

impl DocumentSection {
    pub fn key(&self) -> &'static str {
        match self {
            DocumentSection::Definitions => "definitions",
            DocumentSection::Paths => "paths",
        }
    }
}

impl fmt::Display for DocumentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Replaces `swaggerDefinition.<section>` in a raw document and re-serializes it.
///
/// The rest of the document is kept as it was, key order included. Output is
/// pretty-printed with two-space indentation and no trailing newline.
pub fn replace_section(raw: &[u8], section: DocumentSection, value: Value) -> SwaggifyResult<String> {
    let mut document: Value = serde_json::from_slice(raw).map_err(SwaggifyError::MalformedDocument)?;

    let swagger_definition = document
        .get_mut(SWAGGER_DEFINITION_KEY)
        .and_then(Value::as_object_mut)
        .ok_or(SwaggifyError::MissingSwaggerDefinition)?;
    swagger_definition.insert(section.key().to_string(), value);

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Replaces the `definitions` section of a raw document.
pub fn update_schema(raw: &[u8], definitions: &SchemaDefinitions) -> SwaggifyResult<String> {
    replace_section(raw, DocumentSection::Definitions, serde_json::to_value(definitions)?)
}

/// Replaces the `paths` section of a raw document.
pub fn update_api_definition(raw: &[u8], paths: &PathDefinitions) -> SwaggifyResult<String> {
    replace_section(raw, DocumentSection::Paths, serde_json::to_value(paths)?)
}

/// A document with empty `definitions` and `paths`, ready to be merged into.
pub fn skeleton_document(info: &DocumentInfo) -> Value {
    let mut info_object = Map::new();
    info_object.insert("title".to_string(), Value::String(info.title.clone()));
    info_object.insert("version".to_string(), Value::String(info.version.clone()));
    if let Some(description) = &info.description {
        info_object.insert("description".to_string(), Value::String(description.clone()));
    }

    json!({
        SWAGGER_DEFINITION_KEY: {
            "swagger": "2.0",
            "info": info_object,
            "definitions": {},
            "paths": {},
        }
    })
}

/// Merges generated sections into the swagger document at a fixed path.
#[derive(Debug, Clone)]
pub struct SchemaMerger {
    document_path: PathBuf,
}

impl SchemaMerger {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
        }
    }

    pub fn from_config(config: &SwaggifyConfig) -> Self {
        Self::new(config.swagger_definition_file.clone())
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Replaces `swaggerDefinition.definitions` with `definitions`.
    pub async fn merge_definitions(&self, definitions: &SchemaDefinitions) -> SwaggifyResult<()> {
        self.swaggify(DocumentSection::Definitions, definitions).await
    }

    /// Replaces `swaggerDefinition.paths` with `paths`.
    pub async fn merge_paths(&self, paths: &PathDefinitions) -> SwaggifyResult<()> {
        self.swaggify(DocumentSection::Paths, paths).await
    }

    /// Writes every registered model, then every registered endpoint.
    ///
    /// A section with no registrations is left untouched.
    pub async fn merge_registry(&self, registry: &Registry) -> SwaggifyResult<()> {
        if !registry.schemas().is_empty() {
            self.merge_definitions(&registry.to_swagger_schema()).await?;
        }
        if !registry.paths().is_empty() {
            self.merge_paths(&registry.to_swagger_api_definition()).await?;
        }
        Ok(())
    }

    /// Creates a new document at the merger's path. Fails if one already exists.
    pub async fn write_skeleton(&self, info: &DocumentInfo) -> SwaggifyResult<()> {
        let path = &self.document_path;
        let exists = tokio::fs::try_exists(path).await.map_err(|source| SwaggifyError::Read {
            path: path.clone(),
            source,
        })?;
        if exists {
            return Err(SwaggifyError::DocumentExists(path.clone()));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SwaggifyError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let contents = serde_json::to_string_pretty(&skeleton_document(info))?;
        self.write_document(contents).await?;
        info!(path:% = path.display(); "Created swagger document");
        Ok(())
    }

    async fn swaggify<T: Serialize>(&self, section: DocumentSection, value: &T) -> SwaggifyResult<()> {
        let value = serde_json::to_value(value)?;
        let raw = tokio::fs::read(&self.document_path).await.map_err(|source| {
            error!(path:% = self.document_path.display(), error:% = source; "Failed to read swagger document");
            SwaggifyError::Read {
                path: self.document_path.clone(),
                source,
            }
        })?;

        let updated = replace_section(&raw, section, value)?;
        self.write_document(updated).await?;

        info!(path:% = self.document_path.display(), section:% = section; "Updated swagger document");
        Ok(())
    }

    async fn write_document(&self, contents: String) -> SwaggifyResult<()> {
        tokio::fs::write(&self.document_path, contents).await.map_err(|source| {
            error!(path:% = self.document_path.display(), error:% = source; "Failed to write swagger document");
            SwaggifyError::Write {
                path: self.document_path.clone(),
                source,
            }
        })
    }
}
