use std::io::{stdout, Write};

use anyhow::{Context, Result};
use enocean::desc::describe_eep;
use enocean::eep::Profile;
use serde::Serialize;

use crate::info::Format;

#[derive(Debug, Clone, Serialize)]
struct ProfileInfo {
    eep: String,
    payload_len: usize,
    rorg_desc: String,
    func_desc: String,
    type_desc: String,
}

fn profile_infos() -> Vec<ProfileInfo> {
    Profile::ALL
        .iter()
        .map(|p| {
            let eep = p.id();
            let desc = describe_eep(&eep);
            ProfileInfo {
                eep,
                payload_len: p.payload_len(),
                rorg_desc: desc.rorg_desc,
                func_desc: desc.func_desc,
                type_desc: desc.type_desc,
            }
        })
        .collect()
}

fn render_text(infos: &[ProfileInfo]) -> String {
    let mut text = String::new();
    for info in infos {
        text.push_str(&format!(
            "{} {:>2}  {} / {} / {}\n",
            info.eep, info.payload_len, info.rorg_desc, info.func_desc, info.type_desc
        ));
    }
    text
}

pub fn profiles(format: &Format) -> Result<()> {
    let infos = profile_infos();
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(stdout(), &infos).context("serializing to json")
        }
        Format::Text => stdout()
            .write_all(render_text(&infos).as_bytes())
            .context("writing to stdout"),
    }
}
