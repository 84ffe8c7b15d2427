//! splitbill - split bills with friends from the terminal
//!
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use splitbill::cli::commands::{Cli, Commands};
use splitbill::cli::{config, friends, load_config};
use splitbill::error::Result;
use splitbill::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        // No subcommand - launch TUI mode
        None => {
            let config = load_config(config_path)?;
            let mut app = App::new(&config);
            app.run().await
        }
        Some(Commands::Friends { json }) => {
            let config = load_config(config_path)?;
            friends::handle_friends(&config, json)
        }
        Some(Commands::Config(args)) => config::handle_config(args.command, config_path),
    }
}
