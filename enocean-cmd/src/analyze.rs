use std::io::{stdout, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use enocean::{Field, Registry, Telegram};

use crate::info::Format;
use crate::input::{for_each_telegram, InputArgs};

const SUMMARY_WIDTH: usize = 31;
const HEX_WIDTH: usize = 11;

/// Pad `s` with spaces to `width` characters, shortening it with `..` if it is
/// too long.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len > width {
        let mut short: String = s.chars().take(width.saturating_sub(2)).collect();
        short.push_str("..");
        short
    } else {
        format!("{s:<width$}")
    }
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() {
        "Unknown"
    } else {
        s
    }
}

fn write_summary<W: Write>(w: &mut W, telegram: &Telegram) -> std::io::Result<()> {
    let m = &telegram.message;
    let device = m.device.clone().unwrap_or_default();
    let learn = m.learn().to_string();
    let known = m.known.to_string();
    let category = telegram.category().to_string();
    let hex = telegram.hex.join(" ");
    let rows = [
        ("- HEX", hex.as_str()),
        ("- Packet Type", m.packet_type_desc.as_str()),
        ("- Device Name", or_unknown(&device.name)),
        ("- Device ID", or_unknown(&device.id)),
        ("- Manufacturer", or_unknown(&device.manufacturer)),
        ("- EEP", or_unknown(&m.eep)),
        ("- RORG", or_unknown(&m.eep_desc.rorg_desc)),
        ("- FUNC", or_unknown(&m.eep_desc.func_desc)),
        ("- TYPE", or_unknown(&m.eep_desc.type_desc)),
        ("- Data", or_unknown(&m.payload.desc)),
        ("- Learn", learn.as_str()),
        ("- Known", known.as_str()),
        ("- Category", category.as_str()),
        ("- RSSI", m.dbm_desc.as_deref().unwrap_or("Unknown")),
        ("- CRC", if m.crc { "valid" } else { "invalid" }),
    ];
    for (name, value) in rows {
        writeln!(w, "{}|{value}", pad_right(name, SUMMARY_WIDTH))?;
    }
    Ok(())
}

fn write_structure<W: Write>(w: &mut W, fields: &[Field], depth: usize) -> std::io::Result<()> {
    let indent = "  ".repeat(depth);
    for field in fields {
        writeln!(
            w,
            "{}|{}|{}",
            pad_right(&format!("{indent}- {}", field.field), SUMMARY_WIDTH),
            pad_right(&field.hex.join(" "), HEX_WIDTH),
            field.desc.as_deref().unwrap_or_default(),
        )?;
        write_structure(w, &field.structure, depth + 1)?;
    }
    Ok(())
}

fn write_text<W: Write>(w: &mut W, telegram: &Telegram) -> std::io::Result<()> {
    writeln!(w, "{}", "=".repeat(79))?;
    writeln!(w, "[Summary]")?;
    write_summary(w, telegram)?;
    writeln!(w, "{}", "-".repeat(79))?;
    writeln!(w, "[Telegram]")?;
    write_structure(w, &telegram.structure, 0)
}

pub fn analyze(input: &InputArgs, registry: Arc<Registry>, format: &Format) -> Result<()> {
    let mut out = BufWriter::new(stdout().lock());
    for_each_telegram(input, registry, |telegram| {
        match format {
            Format::Text => write_text(&mut out, telegram).context("writing to stdout")?,
            Format::Json => {
                serde_json::to_writer(&mut out, telegram).context("serializing to json")?;
                writeln!(out).context("writing to stdout")?;
            }
        }
        Ok(())
    })?;
    out.flush().context("writing to stdout")
}
