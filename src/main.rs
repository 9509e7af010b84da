use anyhow::Context;
use clap::Parser;
use log::info;
use swaggify::{
    SchemaMerger,
    cli::{Cli, Commands, merge_definitions_file, merge_paths_file},
    config::{get_default_config, load_configuration, write_config_to},
    log::init_logging,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logging()?;
    let cli = Cli::parse();

    let mut config = load_configuration(&cli.config)?;
    config.apply_overrides(&cli.overrides());
    let merger = SchemaMerger::from_config(&config);

    match cli.command {
        Commands::Init { .. } => {
            merger.write_skeleton(&config.info).await?;
            if !cli.config.exists() {
                write_config_to(&cli.config, get_default_config()).context("Could not create default config")?;
                info!(path:% = cli.config.display(); "Created new configuration file");
            }
            println!("Created {}", merger.document_path().display());
        },
        Commands::MergeDefinitions { input } => {
            let count = merge_definitions_file(&merger, &input).await?;
            println!("Merged {count} definition(s) into {}", merger.document_path().display());
        },
        Commands::MergePaths { input } => {
            let count = merge_paths_file(&merger, &input).await?;
            println!("Merged {count} path(s) into {}", merger.document_path().display());
        },
    }

    Ok(())
}

