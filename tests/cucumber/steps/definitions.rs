// Definition Merge Step Definitions
//
// Steps that register models and check the merged definitions section.

use cucumber::{gherkin::Step, given, then, when};
use swaggify::schema::{FieldDescriptor, PrimitiveTag, TypeShape};

use super::common::SwaggifyWorld;

fn parse_tag(tag: &str) -> PrimitiveTag {
    serde_json::from_value(serde_json::Value::String(tag.to_string()))
        .unwrap_or_else(|_| panic!("Unknown type tag: {tag}"))
}

// =============================
// Model Registration Steps
// =============================

#[given(regex = r#"^a model "([^"]*)" with fields:$"#)]
async fn model_with_fields(world: &mut SwaggifyWorld, step: &Step, name: String) {
    let table = step.table.as_ref().expect("Model fields table is missing");
    let fields = table
        .rows
        .iter()
        .skip(1)
        .map(|row| FieldDescriptor::new(row[0].clone(), parse_tag(&row[1])))
        .collect();

    world.registry.register_shape(TypeShape::from_declared(name, fields));
}

#[when("I merge the registered definitions")]
async fn merge_definitions(world: &mut SwaggifyWorld) {
    let definitions = world.registry.to_swagger_schema();
    world.last_result = Some(world.merger().merge_definitions(&definitions).await);
}

#[when("I merge the registered definitions twice")]
async fn merge_definitions_twice(world: &mut SwaggifyWorld) {
    let definitions = world.registry.to_swagger_schema();
    for _ in 0..2 {
        world
            .merger()
            .merge_definitions(&definitions)
            .await
            .expect("Merge failed");
        let snapshot = std::fs::read(&world.document_path).expect("Failed to read swagger document");
        world.snapshots.push(snapshot);
    }
}

// =============================
// Definition Assertions
// =============================

#[then(regex = r#"^definition "([^"]*)" has properties "([^"]*)"$"#)]
async fn definition_has_properties(world: &mut SwaggifyWorld, name: String, expected: String) {
    let document = world.read_document();
    let properties = document["swaggerDefinition"]["definitions"][&name]["properties"]
        .as_object()
        .unwrap_or_else(|| panic!("Definition {name} has no properties"));

    let actual: Vec<String> = properties
        .iter()
        .map(|(field, schema)| format!("{}:{}", field, schema["type"].as_str().unwrap_or_default()))
        .collect();
    let expected: Vec<String> = expected.split(',').map(|pair| pair.trim().to_string()).collect();
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the document has no definition "([^"]*)"$"#)]
async fn definition_absent(world: &mut SwaggifyWorld, name: String) {
    let document = world.read_document();
    assert!(
        document["swaggerDefinition"]["definitions"].get(&name).is_none(),
        "Definition {name} is still present"
    );
}

#[then("both writes are byte-identical")]
async fn writes_identical(world: &mut SwaggifyWorld) {
    assert_eq!(world.snapshots.len(), 2);
    assert_eq!(world.snapshots[0], world.snapshots[1]);
}
