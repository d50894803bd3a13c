//! Buildboard CLI tool.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "buildboard")]
#[command(about = "Buildboard build-results CLI", long_about = None)]
struct Cli {
    /// API server URL
    #[arg(long, env = "BUILDBOARD_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a project's latest build, or a specific one
    Status {
        /// Project name
        project: String,
        /// Build label (defaults to the latest build)
        #[arg(long)]
        build: Option<String>,
    },
    /// List all projects with their latest build
    Projects,
    /// Validate a server configuration file
    Validate {
        /// Path to the configuration file
        #[arg(default_value = "buildboard.kdl")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { project, build } => {
            commands::status(&cli.api_url, &project, build.as_deref()).await?;
        }
        Commands::Projects => {
            commands::projects(&cli.api_url).await?;
        }
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
    }

    Ok(())
}
