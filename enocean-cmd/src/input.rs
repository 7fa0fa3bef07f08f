use std::fs::File;
use std::io::{stdin, BufRead, BufReader, ErrorKind, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use enocean::{Monitor, Registry, Telegram};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum InputFormat {
    Hex,
    Binary,
}

impl clap::ValueEnum for InputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Hex, Self::Binary]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Hex => Some(clap::builder::PossibleValue::new("hex")),
            Self::Binary => Some(clap::builder::PossibleValue::new("binary")),
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// How the input is encoded.
    ///
    /// With hex every non-empty line is one chunk of hex bytes, whitespace is
    /// ignored and lines starting with # are skipped. With binary the raw serial
    /// bytes are read in chunks of --chunk-size.
    #[arg(short = 'I', long, default_value = "hex")]
    pub input_format: InputFormat,

    /// Bytes per chunk for binary input.
    #[arg(long, default_value_t = 64, value_name = "n")]
    pub chunk_size: usize,

    /// Captured serial data. Reads stdin if not provided.
    pub input: Option<PathBuf>,
}

impl InputArgs {
    fn open(&self) -> Result<Box<dyn Read>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("opening input {path:?}"))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(stdin())),
        }
    }
}

/// Decode the input, calling `f` for every telegram in stream order. Returns
/// the number of telegrams decoded.
pub fn for_each_telegram<F>(args: &InputArgs, registry: Arc<Registry>, mut f: F) -> Result<usize>
where
    F: FnMut(&Telegram) -> Result<()>,
{
    let mut monitor = Monitor::new(registry);
    let mut reader = args.open()?;
    let mut count = 0;

    match args.input_format {
        InputFormat::Hex => {
            for (idx, line) in BufReader::new(reader).lines().enumerate() {
                let line = line.context("reading input")?;
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let telegrams = monitor
                    .emulate_incoming_telegram(line)
                    .with_context(|| format!("line {}", idx + 1))?;
                for telegram in &telegrams {
                    f(telegram)?;
                }
                count += telegrams.len();
            }
        }
        InputFormat::Binary => {
            let mut buf = vec![0u8; args.chunk_size.max(1)];
            loop {
                let n = match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err).context("reading input"),
                };
                let telegrams = monitor.push(&buf[..n]);
                for telegram in &telegrams {
                    f(telegram)?;
                }
                count += telegrams.len();
            }
        }
    }
    debug!("decoded {count} telegrams");
    Ok(count)
}
