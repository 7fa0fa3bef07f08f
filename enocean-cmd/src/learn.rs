use std::io::{stdout, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use enocean::{Category, Registry, Telegram};

use crate::analyze::pad_right;
use crate::input::{for_each_telegram, InputArgs};

const COLUMNS: [(&str, usize); 3] = [("Module ID", 12), ("EEP", 8), ("Manufacturer", 40)];

fn write_row<W: Write>(w: &mut W, values: [&str; 3]) -> std::io::Result<()> {
    let cells: Vec<String> = COLUMNS
        .iter()
        .zip(values)
        .map(|((_, width), v)| pad_right(v, *width))
        .collect();
    writeln!(w, "{}", cells.join("|"))
}

fn write_header<W: Write>(w: &mut W) -> std::io::Result<()> {
    write_row(w, COLUMNS.map(|(name, _)| name))?;
    let dashes: Vec<String> = COLUMNS.iter().map(|(_, width)| "-".repeat(*width)).collect();
    writeln!(w, "{}", dashes.join("+"))
}

fn write_learned<W: Write>(w: &mut W, telegram: &Telegram) -> std::io::Result<()> {
    let message = &telegram.message;
    let device = message.device.clone().unwrap_or_default();
    let manufacturer = message
        .payload
        .manufacturer_desc
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(&device.manufacturer);
    write_row(w, [&device.id, &message.eep, manufacturer])
}

pub fn learn(input: &InputArgs, registry: Arc<Registry>) -> Result<()> {
    let mut out = BufWriter::new(stdout().lock());
    write_header(&mut out).context("writing to stdout")?;
    for_each_telegram(input, registry, |telegram| {
        if telegram.category() == Category::Learn {
            write_learned(&mut out, telegram).context("writing to stdout")?;
        }
        Ok(())
    })?;
    out.flush().context("writing to stdout")
}
