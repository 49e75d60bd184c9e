//! keymapdoc - ZMK keymap layer diagram updater
//!
//! Rewrites the box-drawing diagram comment above each layer's bindings so
//! that it shows the keys the layer actually binds.

use clap::Parser;
use keymapdoc::cli::UpdateArgs;
use keymapdoc::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Regenerate the layer diagrams in a ZMK keymap file
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    update: UpdateArgs,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.update.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.update.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
