// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - commit message linter

use clap::Parser;
use cmlint::cli::{run, Cli};
use cmlint::LintError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI; lint failures exit 1, anything else 2
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match e {
            LintError::Validation(_) => 1,
            _ => 2,
        };
        std::process::exit(code);
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("cmlint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
