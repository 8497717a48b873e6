use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use taxdocgen::{standard_requests, FixtureGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "taxdocgen",
    about = "Synthetic PDF tax-document fixtures for extraction testing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the standard fixture set
    Generate {
        /// Output directory for the rendered PDFs
        #[arg(short, long, default_value = "docs")]
        output: PathBuf,

        /// Also write the manifest as JSON to this path
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// List the fixture set without rendering anything
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output, manifest } => {
            let generator = FixtureGenerator::new(&output);
            let entries = generator.generate(&standard_requests())?;

            if let Some(path) = manifest {
                fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
                println!("Manifest written to {}", path.display());
            }
        }

        Commands::List => {
            for request in standard_requests() {
                println!(
                    "{:<26} {:<9} {}",
                    request.filename(),
                    request.form.label(),
                    if request.counterparty.is_empty() {
                        "(blank template)"
                    } else {
                        request.counterparty.as_str()
                    }
                );
            }
        }
    }

    Ok(())
}
