use std::io::{stdout, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use enocean::{Registry, Summary};
use handlebars::handlebars_helper;
use serde::Serialize;

use crate::input::{for_each_telegram, InputArgs};

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Info {
    input: String,
    devices: usize,
    summary: Summary,
}

fn summarize(input: &InputArgs, registry: Arc<Registry>) -> Result<Info> {
    let devices = registry.len();
    let mut summary = Summary::default();
    for_each_telegram(input, registry, |telegram| {
        summary.add(telegram);
        Ok(())
    })?;
    Ok(Info {
        input: input
            .input
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.to_string_lossy().to_string()),
        devices,
        summary,
    })
}

pub fn info(input: &InputArgs, registry: Arc<Registry>, format: &Format) -> Result<()> {
    let info = summarize(input, registry)?;

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(stdout(), &info).context("serializing to json")
        }
        Format::Text => {
            let data = render_text(&info).context("serializing info")?;
            stdout()
                .write_all(data.as_bytes())
                .context("writing to stdout")
        }
    }
}

fn render_text(info: &Info) -> Result<String> {
    handlebars_helper!(right_pad: |num: u64, v: Json| {
        let v = match v {
            serde_json::Value::String(s) => s.to_owned(),
            serde_json::Value::Null => String::new(),
            _ => v.to_string()
        };
        let width = usize::try_from(num).unwrap_or_default();
        format!("{v:<width$}")
    });
    let mut hb = handlebars::Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);
    hb.register_helper("rpad", Box::new(right_pad));
    hb.register_template_string("info", TEXT_TEMPLATE)
        .context("compiling template")?;

    hb.render("info", &info).context("rendering text")
}

const TEXT_TEMPLATE: &str = r"{{ input }}
===============================================================================
Devices:      {{ devices }}
Telegrams:    {{ summary.count }}
Bytes:        {{ summary.bytes }}
CRC failures: {{ summary.crc_failures }}
Categories:   {{ #each summary.categories }}{{ @key }}={{ this }}{{ #if @last }}{{ else }}, {{ /if }}{{ /each }}
EEPs:
{{ #each summary.eeps }}  {{ rpad 10 @key }}{{ this }}
{{ /each }}Originators:
{{ #each summary.originators }}  {{ rpad 19 @key }}count={{ count }} learn={{ learn }} crc_failures={{ crc_failures }} eep={{ eep }}
{{ /each }}";

#[cfg(test)]
mod tests {
    use enocean::{Monitor, Registry};

    use super::*;

    #[test]
    fn text() {
        let mut monitor = Monitor::new(Arc::new(Registry::default()));
        let mut summary = Summary::default();
        for hex in [
            "55 00 07 00 01 11 d5 09 04 00 8f e0 00 50",
            "55 00 0a 00 01 80 a5 08 28 0b 80 04 01 31 95 00 84",
        ] {
            for telegram in monitor.emulate_incoming_telegram(hex).unwrap() {
                summary.add(&telegram);
            }
        }
        let info = Info {
            input: "capture.hex".to_string(),
            devices: 0,
            summary,
        };

        let text = render_text(&info).unwrap();
        assert!(text.starts_with("capture.hex\n"), "{text}");
        assert!(text.contains("Telegrams:    2\n"), "{text}");
        assert!(text.contains("Categories:   learn=1, unknown=1\n"), "{text}");
        assert!(
            text.contains("  04 00 8F E0        count=1 learn=0"),
            "{text}"
        );
    }
}
