//! Order Browser CLI
//!
//! Command-line interface for browsing orders and their items

use clap::Parser;
use order_browser::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with rendered cards
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        // User-facing failures were already rendered by the view
        if !e.is_user_facing() {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
