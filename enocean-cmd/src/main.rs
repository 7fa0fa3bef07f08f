mod analyze;
mod info;
mod input;
mod learn;
mod profiles;

use std::io::stderr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enocean::Registry;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON list of devices to teach before decoding.
    ///
    /// Each entry is an object with "id", "eep" and optional "name" and
    /// "manufacturer" members, e.g., {"id": "04 01 31 95", "eep": "A5-02-05"}.
    #[arg(short, long, global = true, value_name = "path")]
    devices: Option<PathBuf>,

    /// Fail if any entry in the device list is invalid, rather than skipping it.
    #[arg(long, global = true, action)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode telegrams and show their content and byte layout.
    Analyze {
        #[command(flatten)]
        input: input::InputArgs,

        /// Output format. The json format writes one document per line.
        #[arg(short, long, default_value = "text")]
        format: info::Format,
    },
    /// Show the devices announcing themselves with teach-in telegrams.
    Learn {
        #[command(flatten)]
        input: input::InputArgs,
    },
    /// Show a summary of the telegrams in an input.
    Info {
        #[command(flatten)]
        input: input::InputArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: info::Format,
    },
    /// List the profiles (EEPs) that have a payload decoder.
    Profiles {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: info::Format,
    },
}

fn load_registry(devices: Option<&PathBuf>, strict: bool) -> Result<Arc<Registry>> {
    let registry = match devices {
        Some(path) => {
            let registry = Registry::with_file(path, strict)
                .with_context(|| format!("loading devices from {path:?}"))?;
            info!("loaded {} devices from {path:?}", registry.len());
            registry
        }
        None => Registry::default(),
    };
    Ok(Arc::new(registry))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("ENOCEAN_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Analyze { input, format } => {
            let registry = load_registry(cli.devices.as_ref(), cli.strict)?;
            analyze::analyze(input, registry, format)
        }
        Commands::Learn { input } => {
            let registry = load_registry(cli.devices.as_ref(), cli.strict)?;
            learn::learn(input, registry)
        }
        Commands::Info { input, format } => {
            let registry = load_registry(cli.devices.as_ref(), cli.strict)?;
            info::info(input, registry, format)
        }
        Commands::Profiles { format } => profiles::profiles(format),
    }
}
