use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::{
    ApiPathDefinition, Registry, SchemaMerger,
    config::{ConfigOverrides, DEFAULT_CONFIG_FILE},
    schema::ModelDeclaration,
};

#[derive(Parser)]
#[command(name = "swaggify")]
#[command(about = "Merge model schemas and API paths into a swagger document", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Path to the configuration file", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the swagger document (overrides the configuration file)"
    )]
    pub document: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty swagger document and a default configuration file
    Init {
        #[arg(short, long, help = "Title written to the document's info block")]
        title: Option<String>,
        #[arg(short = 'V', long = "api-version", help = "Version written to the document's info block")]
        version: Option<String>,
    },
    /// Replace the document's definitions with the models listed in a JSON file
    MergeDefinitions {
        #[arg(
            short,
            long,
            help = "JSON array of models: [{\"name\": ..., \"fields\": [{\"name\": ..., \"type\": ...}]}]"
        )]
        input: PathBuf,
    },
    /// Replace the document's paths with the endpoints listed in a JSON file
    MergePaths {
        #[arg(
            short,
            long,
            help = "JSON array of endpoints: [{\"pathString\": ..., \"method\": ..., \"tags\": [...], \"meta\": {...}}]"
        )]
        input: PathBuf,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        let (title, version) = match &self.command {
            Commands::Init { title, version } => (title.clone(), version.clone()),
            _ => (None, None),
        };
        ConfigOverrides {
            swagger_definition_file: self.document.clone(),
            title,
            version,
        }
    }
}

/// Reads a JSON input file given on the command line.
pub async fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read input file {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("Invalid input file {}", path.display()))
}

/// Registers the model declarations in `input` and merges them as `definitions`.
///
/// Returns the number of definitions written.
pub async fn merge_definitions_file(merger: &SchemaMerger, input: &Path) -> anyhow::Result<usize> {
    let models: Vec<ModelDeclaration> = read_input(input).await?;
    let mut registry = Registry::new();
    for model in models {
        registry.register_shape(model.into());
    }
    let definitions = registry.to_swagger_schema();
    merger.merge_definitions(&definitions).await?;
    Ok(definitions.len())
}

/// Registers the endpoints in `input` and merges them as `paths`.
///
/// Returns the number of paths written.
pub async fn merge_paths_file(merger: &SchemaMerger, input: &Path) -> anyhow::Result<usize> {
    let definitions: Vec<ApiPathDefinition> = read_input(input).await?;
    let mut registry = Registry::new();
    for definition in definitions {
        registry.register_path(definition);
    }
    let paths = registry.to_swagger_api_definition();
    merger.merge_paths(&paths).await?;
    Ok(paths.len())
}
