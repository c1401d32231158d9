use anyhow::{Context, Result};
use clap::Parser;
use popcorn::{
    AverageMode, OmdbClient, ProviderConfig,
    config::{DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    interactive_ratatui::{InteractiveApp, TerminalTitle},
    logging,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "popcorn",
    version,
    about = "Search movies and keep a rated list of the ones you watched",
    long_about = None
)]
struct Cli {
    /// Query to search for on startup
    query: Option<String>,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    api_key: String,

    /// Base URL of the OMDb endpoint
    #[arg(long, env = "OMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// How unparseable ratings and runtimes count toward the averages
    #[arg(long, value_enum, default_value_t = AverageMode::TreatAsZero)]
    average_mode: AverageMode,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, env = "POPCORN_LOG")]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    let config = ProviderConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    info!(base_url = %config.base_url, "starting popcorn");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let provider = OmdbClient::new(config).context("Failed to build OMDb client")?;

    let mut app = InteractiveApp::new(
        Arc::new(provider),
        runtime.handle().clone(),
        cli.average_mode,
        TerminalTitle,
    );
    app.run(cli.query)
}
