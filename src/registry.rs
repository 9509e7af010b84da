//! Collected model and endpoint registrations.
//!
//! A [`Registry`] is the owned replacement for process-wide registration state:
//! callers register models and endpoints on it, then fold everything into the
//! `definitions` and `paths` mappings the merger writes.

use log::debug;

use crate::paths::{ApiPathDefinition, PathDefinitions, PathItem};
use crate::schema::{ModelSchema, SchemaDefinitions, SchemaEntry, TypeShape, extract_shape, gen_schema_def};

/// A registered model and the schema entry generated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMetadata {
    pub name: String,
    pub definition: SchemaEntry,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: Vec<SchemaMetadata>,
    paths: Vec<ApiPathDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_model<T: ModelSchema>(&mut self) -> &mut Self {
        self.register_shape(extract_shape::<T>(None))
    }

    pub fn register_model_as<T: ModelSchema>(&mut self, name: &str) -> &mut Self {
        self.register_shape(extract_shape::<T>(Some(name)))
    }

    pub fn register_shape(&mut self, shape: TypeShape) -> &mut Self {
        debug!(model = shape.name.as_str(), fields = shape.fields.len(); "Registering model");
        let definition = gen_schema_def(&shape);
        self.schemas.push(SchemaMetadata {
            name: shape.name,
            definition,
        });
        self
    }

    pub fn register_path(&mut self, definition: ApiPathDefinition) -> &mut Self {
        debug!(
            path = definition.path_string.as_str(),
            method:% = definition.method;
            "Registering API path"
        );
        self.paths.push(definition);
        self
    }

    pub fn schemas(&self) -> &[SchemaMetadata] {
        &self.schemas
    }

    pub fn paths(&self) -> &[ApiPathDefinition] {
        &self.paths
    }

    /// Folds every registered model into a `definitions` mapping.
    ///
    /// Re-registering a name replaces the earlier entry but keeps its position.
    pub fn to_swagger_schema(&self) -> SchemaDefinitions {
        let mut definitions = SchemaDefinitions::new();
        for item in &self.schemas {
            definitions.insert(item.name.clone(), item.definition.clone());
        }
        definitions
    }

    /// Folds every registered endpoint into a `paths` mapping.
    ///
    /// Each registration replaces the whole item for its path, so only the last
    /// method registered for a path survives.
    pub fn to_swagger_api_definition(&self) -> PathDefinitions {
        let mut paths = PathDefinitions::new();
        for item in &self.paths {
            let mut path_item = PathItem::new();
            path_item.insert(item.method, item.operation());
            paths.insert(item.path_string.clone(), path_item);
        }
        paths
    }
}
