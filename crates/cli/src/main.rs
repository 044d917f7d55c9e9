use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use krane_core::manager::{BuildManager, BuildManagerConfig};
use krane_extension_api_link::ApiLinkExtension;
use krane_extension_protocol::BuildExtension;

mod commands;

/// Krane - A build configuration tool
#[derive(Parser)]
#[command(name = "krane")]
#[command(about = "A build configuration tool for multi-project workspaces")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects with their applied plugins and extensions
    List,
    /// Show the project dependency graph
    Graph,
    /// Show the dependency declarations recorded during configuration
    Dependencies,
}

/// Extensions compiled into the krane binary.
fn built_in_extensions() -> Vec<Box<dyn BuildExtension>> {
    vec![Box::new(ApiLinkExtension)]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The configuration pass runs during initialization; a failing pass
    // aborts before any command executes.
    let manager = BuildManager::new(
        BuildManagerConfig {
            workspace_root: cli.workspace,
        },
        built_in_extensions(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to configure workspace: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List => commands::list::execute(&manager),
        Commands::Graph => commands::graph::execute(&manager),
        Commands::Dependencies => commands::dependencies::execute(&manager),
    }
}
