use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagewire_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagewire")]
#[command(author, version, about = "Drive an animated landing page from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in the terminal UI
    Run,
    /// Step the page on a simulated clock and print its events
    Simulate {
        /// Stop after this much page time
        #[arg(long, default_value_t = 20_000)]
        until_ms: u64,
        /// Frame length
        #[arg(long, default_value_t = 16)]
        step_ms: u64,
        /// Click a tab: GROUP:INDEX@MS, GROUP is a name or position
        #[arg(long = "click", value_name = "GROUP:INDEX@MS")]
        clicks: Vec<String>,
        /// Scroll the page: DELTA@MS
        #[arg(long = "scroll", value_name = "DELTA@MS", allow_hyphen_values = true)]
        scrolls: Vec<String>,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Run the page in real time without a UI and stream its events as JSON
    Watch {
        /// Stop after this long; runs until Ctrl+C otherwise
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Validate the configuration and print the page layout
    Check,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init never reads the file it is about to write
    if let Some(Commands::Init { force }) = cli.command {
        return commands::init::run(cli.config.as_deref(), force);
    }

    let config = load_config(cli.config.as_ref())?;

    // The terminal UI owns the screen, so it only logs when asked to
    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) if interactive => "off".to_string(),
        Err(_) => config.general.log_level.clone(),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(&config),
        Some(Commands::Simulate {
            until_ms,
            step_ms,
            clicks,
            scrolls,
            json,
        }) => commands::simulate::run(&config, until_ms, step_ms, &clicks, &scrolls, json),
        Some(Commands::Watch { duration_ms }) => commands::watch::run(config, duration_ms).await,
        Some(Commands::Check) => commands::check::run(&config),
        Some(Commands::Init { .. }) => Ok(()),
    }
}
