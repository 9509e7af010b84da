// Path Merge Step Definitions
//
// Steps that register endpoints and check the merged paths section.

use cucumber::{given, then, when};
use serde_json::json;
use swaggify::{ApiPathDefinition, HttpMethod, OperationMeta};

use super::common::SwaggifyWorld;

#[given(regex = r#"^an endpoint "([^"]*)" "([^"]*)" with operation id "([^"]*)" tagged "([^"]*)"$"#)]
async fn endpoint(world: &mut SwaggifyWorld, method: String, path: String, operation_id: String, tag: String) {
    let method: HttpMethod = serde_json::from_value(json!(method)).expect("Unknown HTTP method");
    world.registry.register_path(
        ApiPathDefinition::new(path, method)
            .with_tags([tag])
            .with_meta(OperationMeta {
                operation_id: Some(operation_id),
                produces: Some(vec!["application/json".to_string()]),
                ..Default::default()
            }),
    );
}

#[when("I merge the registered paths")]
async fn merge_paths(world: &mut SwaggifyWorld) {
    let paths = world.registry.to_swagger_api_definition();
    world.last_result = Some(world.merger().merge_paths(&paths).await);
}

#[then(regex = r#"^path "([^"]*)" has a "([^"]*)" operation with operation id "([^"]*)" tagged "([^"]*)"$"#)]
async fn path_has_operation(world: &mut SwaggifyWorld, path: String, method: String, operation_id: String, tag: String) {
    let document = world.read_document();
    assert_eq!(
        document["swaggerDefinition"]["paths"][&path][&method],
        json!({
            "tags": [tag],
            "operationId": operation_id,
            "produces": ["application/json"]
        })
    );
}

#[then(regex = r#"^path "([^"]*)" has only a "([^"]*)" operation$"#)]
async fn path_has_only(world: &mut SwaggifyWorld, path: String, method: String) {
    let document = world.read_document();
    let item = document["swaggerDefinition"]["paths"][&path]
        .as_object()
        .unwrap_or_else(|| panic!("Path {path} is missing"));
    let methods: Vec<&String> = item.keys().collect();
    assert_eq!(methods, vec![&method]);
}
