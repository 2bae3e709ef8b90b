mod error;
mod generate;
mod model;
mod projection;
mod sample;

use anyhow::Result;
use clap::Parser;
use generate::{Outcome, generate_output};
use model::{DEFAULT_INPUT, DEFAULT_OUTPUT, PREFERRED_COLUMNS};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Copy a few columns of an event CSV, or write a sample file when the input is unusable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Columns to keep, in output order
    #[arg(short, long, value_delimiter = ',', default_values_t = PREFERRED_COLUMNS.map(String::from).to_vec())]
    columns: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr, stdout only carries the status line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    match generate_output(&args.input, &args.output, &args.columns) {
        Ok(Outcome::Projected { columns, rows }) => {
            info!(?columns, rows, "projected {}", args.input.display());
            println!("Wrote output from input to {}", args.output.display());
        }
        Ok(Outcome::Sample { reason }) => {
            if let Some(reason) = reason {
                warn!("cannot use {}: {}", args.input.display(), reason);
            }
            println!("Wrote sample output to {}", args.output.display());
        }
        Err(e) => {
            error!("{:#}", e);
            println!("Failed to write output to {}", args.output.display());
        }
    }
    Ok(())
}
