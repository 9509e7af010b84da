use indexmap::IndexMap;

use crate::schema::{PropertySchema, SchemaEntry, TypeShape};

/// Builds the swagger schema entry for an extracted shape.
///
/// Each field is placed in front of the properties collected so far. Shapes
/// arrive in reverse declaration order, so the emitted `properties` follow the
/// model's declaration order. If a name repeats, the first occurrence in the
/// shape keeps both its value and the front position.
pub fn gen_schema_def(shape: &TypeShape) -> SchemaEntry {
    let mut properties: IndexMap<String, PropertySchema> = IndexMap::new();

    for field in &shape.fields {
        let mut prepended = IndexMap::with_capacity(properties.len() + 1);
        prepended.insert(field.name.clone(), PropertySchema { tag: field.tag });
        prepended.extend(properties);
        properties = prepended;
    }

    SchemaEntry::object(properties)
}
