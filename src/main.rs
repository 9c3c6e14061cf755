//! hearth - A PIN-gated smart-display dashboard for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use hearth_app::config::IconMode;
use hearth_core::prelude::*;

/// hearth - A PIN-gated smart-display dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "hearth")]
#[command(about = "A PIN-gated smart-display dashboard for the terminal", long_about = None)]
struct Args {
    /// Directory containing hearth.toml (defaults to the working directory)
    #[arg(value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Force plain ASCII icons
    #[arg(long)]
    ascii: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to file, since the TUI owns stdout
    hearth_core::logging::init()?;

    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = hearth_app::load_settings(&config_dir);
    if args.ascii {
        settings.ui.icons = IconMode::Ascii;
    }

    let result = hearth_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}
