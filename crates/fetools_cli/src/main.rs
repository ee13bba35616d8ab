//! fetools - front-end CSS generators
//!
//! Generates fluid typography `clamp()` scales, gradients, layered shadows
//! and glass panels from small stored states. Each tool keeps its state in
//! one JSON file under the storage directory, so flags saved with `--save`
//! carry over to later runs.

mod commands;
mod config;

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use commands::{Command, Context};
use config::{FetoolsConfig, CONFIG_FILE};
use fetools_store::FileStore;

/// Generate fluid typography, gradient, shadow and glass CSS
#[derive(Parser, Debug)]
#[command(name = "fetools")]
#[command(about = "Generate fluid typography, gradient, shadow and glass CSS")]
#[command(version)]
struct Cli {
    /// Config file, or a directory containing fetools.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding saved tool state (overrides storage.dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Root font size for px to rem conversion (overrides output.rem_base)
    #[arg(long, global = true)]
    rem_base: Option<f64>,

    /// Log computed decisions to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("Config file not found: {}", path.display())
        }
        Some(path) => FetoolsConfig::load(path)?,
        None => FetoolsConfig::load(Path::new(CONFIG_FILE))?,
    };

    let rem_base = cli.rem_base.unwrap_or(config.output.rem_base);
    if rem_base.is_nan() || rem_base <= 0.0 {
        anyhow::bail!("--rem-base must be positive, got {}", rem_base);
    }

    let store = FileStore::new(cli.store.clone().unwrap_or(config.storage.dir));
    tracing::debug!("Using state directory {}", store.dir().display());

    let ctx = Context {
        store: &store,
        rem_base,
        variable_name: config.output.variable_name,
    };

    let output = commands::run(&ctx, &cli.command)?;
    println!("{}", output);
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` raises the default `warn` level.
fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
