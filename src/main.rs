use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trippicker::config::TrippickerPaths;
use trippicker::services::RegistrationService;
use trippicker::storage::JsonStageStore;
use trippicker::tui;

#[derive(Parser)]
#[command(
    name = "trippicker",
    version,
    about = "Terminal onboarding wizard for the Trippicker courier brokerage",
    long_about = "Trippicker onboarding for logistics companies: register your \
                  company, stage the registration for the documents step, and \
                  get your fleet on the road."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "TRIPPICKER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive onboarding wizard (default)
    #[command(alias = "ui")]
    Wizard,

    /// Show current configuration and paths
    Config,

    /// Print the staged registration, if any
    Staged,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrippickerPaths::with_base_dir(dir),
        None => TrippickerPaths::new()?,
    };

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => {
            paths.ensure_directories()?;
            let mut store = JsonStageStore::open(paths.stage_file())?;
            tui::run_wizard(&mut store)?;
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Stage file:     {}", paths.stage_file().display());
        }
        Commands::Staged => {
            let mut store = JsonStageStore::open(paths.stage_file())?;
            let service = RegistrationService::new(&mut store);
            match service.staged()? {
                Some(snapshot) => {
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                None => {
                    println!("No registration has been staged yet.");
                }
            }
        }
    }

    Ok(())
}
