//! OSF Fetcher CLI application
//!
//! Downloads the original and expansion study datasets from OSF and
//! extracts them into a local `./env` environment.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use osf_fetcher::cli::{handle_setup, Cli};
use osf_fetcher::config::Config;
use osf_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    init_logging(&cli);

    info!("OSF Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    // Resolve options once; components never read the environment themselves
    let config = Config::resolve(&cli);
    handle_setup(config).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("osf_fetcher={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.verbose)
        .init();
}
