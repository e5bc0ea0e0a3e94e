//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `siteguard` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Rendering the report
//!
//! All checks are implemented in the library crate.

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use siteguard::config::{Opt, OutputFormat};
use siteguard::initialization::{init_crypto_provider, init_logger_with};
use siteguard::output::{render_json, render_plain};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env file, e.g. for RUST_LOG
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    init_crypto_provider();

    if let Err(e) = opt.validate() {
        eprintln!("siteguard error: {e:#}");
        process::exit(2);
    }

    let report = siteguard::assess(&opt.target).await;

    let rendered = match opt.output {
        OutputFormat::Plain => {
            let color = !opt.no_color && std::io::stdout().is_terminal();
            render_plain(&report, color)
        }
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{rendered}");

    if let Some(min_score) = opt.min_score {
        if report.final_score_out_of_ten < min_score {
            eprintln!(
                "siteguard: score {:.1}/10 is below the required {min_score:.1}",
                report.final_score_out_of_ten
            );
            process::exit(1);
        }
    }

    Ok(())
}
