//! Model shapes and the swagger schema fragments built from them.
//!
//! A model is described by a [`TypeShape`]: its display name and an ordered list
//! of `(field name, primitive tag)` pairs. Shapes come from the
//! [`extractor`] and are turned into a [`SchemaEntry`] by [`fragment`], ready to
//! be merged into a document's `definitions` section.
//!
//! # Key Types
//!
//! - [`PrimitiveTag`] - The runtime type tag of a field (`string`, `number`, `boolean`, `object`)
//! - [`FieldDescriptor`] - One field of a model
//! - [`TypeShape`] - The extracted shape of a model
//! - [`SchemaEntry`] - The `{ type: "object", properties }` object written per model
//! - [`SchemaDefinitions`] - The full `definitions` mapping

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod extractor;
pub mod fragment;
pub mod tag;

pub use extractor::{ModelSchema, extract_shape, field_of, pin_type};
pub use fragment::gen_schema_def;
pub use tag::{PrimitiveTag, TypeTag};

/// A single named field and its primitive tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: PrimitiveTag,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, tag: PrimitiveTag) -> Self {
        Self { name: name.into(), tag }
    }
}

/// The instance shape of a model as produced by extraction.
///
/// Fields are stored in extraction order, which is the reverse of the order in
/// which the model declares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShape {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeShape {
    /// Builds a shape from fields listed in declaration order.
    pub fn from_declared(name: impl Into<String>, mut fields: Vec<FieldDescriptor>) -> Self {
        fields.reverse();
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// The `{ "type": <tag> }` object describing one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub tag: PrimitiveTag,
}

/// Schema of one model, as stored under `swaggerDefinition.definitions.<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: IndexMap<String, PropertySchema>,
}

impl SchemaEntry {
    pub fn object(properties: IndexMap<String, PropertySchema>) -> Self {
        Self {
            kind: "object".to_string(),
            properties,
        }
    }
}

/// Type name to schema entry, in registration order.
pub type SchemaDefinitions = IndexMap<String, SchemaEntry>;

/// A model as written by hand (CLI input): fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDeclaration {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl From<ModelDeclaration> for TypeShape {
    fn from(declaration: ModelDeclaration) -> Self {
        TypeShape::from_declared(declaration.name, declaration.fields)
    }
}
