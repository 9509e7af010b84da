// Common World Definition and Utilities for Cucumber BDD Tests
//
// This module contains the shared state object (SwaggifyWorld) and the steps
// that set up or inspect the swagger document on disk.

use std::path::PathBuf;

use cucumber::{World, given, then};
use serde_json::{Value, json};
use swaggify::{Registry, SchemaMerger, SwaggifyError};
use tempfile::TempDir;

// =============================
// World Definition
// =============================

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct SwaggifyWorld {
    pub _temp_dir: TempDir,
    pub document_path: PathBuf,
    pub registry: Registry,
    pub last_result: Option<Result<(), SwaggifyError>>,
    pub snapshots: Vec<Vec<u8>>,
}

impl SwaggifyWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let document_path = temp_dir.path().join("swagger").join("swagger.json");
        Self {
            _temp_dir: temp_dir,
            document_path,
            registry: Registry::new(),
            last_result: None,
            snapshots: Vec::new(),
        }
    }

    pub fn merger(&self) -> SchemaMerger {
        SchemaMerger::new(&self.document_path)
    }

    pub fn write_document(&self, definitions: Value) {
        let document = json!({
            "swaggerDefinition": {
                "info": { "title": "Phone book", "version": "1.0.0" },
                "definitions": definitions,
                "paths": {}
            }
        });
        let parent = self.document_path.parent().expect("Document path has no parent");
        std::fs::create_dir_all(parent).expect("Failed to create document directory");
        std::fs::write(&self.document_path, serde_json::to_string_pretty(&document).unwrap())
            .expect("Failed to write swagger document");
    }

    pub fn read_document(&self) -> Value {
        let raw = std::fs::read_to_string(&self.document_path).expect("Failed to read swagger document");
        serde_json::from_str(&raw).expect("Swagger document is not valid JSON")
    }
}

// =============================
// Document Setup Steps
// =============================

#[given("a swagger document with no definitions")]
async fn empty_document(world: &mut SwaggifyWorld) {
    world.write_document(json!({}));
}

#[given(regex = r#"^a swagger document with a definition "([^"]*)"$"#)]
async fn document_with_definition(world: &mut SwaggifyWorld, name: String) {
    world.write_document(json!({ name: { "type": "object", "properties": {} } }));
}

#[given("no swagger document exists")]
async fn no_document(world: &mut SwaggifyWorld) {
    assert!(!world.document_path.exists());
}

// =============================
// Outcome Steps
// =============================

#[then("the merge succeeds")]
async fn merge_succeeds(world: &mut SwaggifyWorld) {
    match world.last_result.as_ref().expect("No merge was run") {
        Ok(()) => {},
        Err(e) => panic!("Merge failed: {e}"),
    }
}

#[then("the merge fails with a read error")]
async fn merge_fails_with_read_error(world: &mut SwaggifyWorld) {
    let result = world.last_result.as_ref().expect("No merge was run");
    assert!(
        matches!(result, Err(SwaggifyError::Read { .. })),
        "Expected a read error, got {result:?}"
    );
}

#[then("no swagger document exists")]
async fn document_still_missing(world: &mut SwaggifyWorld) {
    assert!(!world.document_path.exists(), "Swagger document was created");
}

#[then("the document keeps its info block")]
async fn info_is_kept(world: &mut SwaggifyWorld) {
    let document = world.read_document();
    assert_eq!(
        document["swaggerDefinition"]["info"],
        json!({ "title": "Phone book", "version": "1.0.0" })
    );
}
