use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "autocord")]
#[command(about = "Autocord CLI - build modals, read interaction events, upsert sheet rows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a modal payload from a JSON definition
    Modal {
        /// Path to the modal definition
        definition: PathBuf,
    },
    /// Print a submitted text input value from a modal-submit event
    ModalValue {
        /// Path to the event JSON
        event: PathBuf,
        /// custom_id of the text input
        custom_id: String,
    },
    /// Print an option value from a command event
    #[command(name = "option")]
    CommandOption {
        /// Path to the event JSON
        event: PathBuf,
        /// Option name
        name: String,
    },
    /// Update matching rows, or insert one when nothing matches
    Upsert {
        /// A1-notation range
        #[arg(long)]
        range: String,
        /// Range bounds, e.g. FIRST_EMPTY_ROW or FULL_RANGE
        #[arg(long)]
        bounds: Option<String>,
        /// Filter as JSON
        #[arg(long = "where")]
        filter: String,
        /// Column values as a JSON object
        #[arg(long)]
        fields: String,
        /// Config file (defaults to ~/.config/autocord/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let found = match cli.command {
        Commands::Modal { definition } => {
            commands::modal::build(&definition)?;
            true
        }
        Commands::ModalValue { event, custom_id } => {
            commands::event::modal_value(&event, &custom_id)?
        }
        Commands::CommandOption { event, name } => commands::event::option(&event, &name)?,
        Commands::Upsert {
            range,
            bounds,
            filter,
            fields,
            config,
        } => {
            commands::upsert::run(range, bounds, &filter, &fields, config.as_deref()).await?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
