use crate::{
    cli::value::OutputFormat,
    command::{Command, commons::read_png},
};
use anyhow::Context;
use clap::Parser;
use libpngmeta::{Metadata, PhysicalResolution, read_metadata};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ReadCommand {
    #[arg(long, value_enum, default_value_t = OutputFormat::default(), help = "Output format")]
    pub(crate) format: OutputFormat,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for ReadCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        read_file_metadata(self)
    }
}

fn read_file_metadata(args: ReadCommand) -> anyhow::Result<()> {
    let bytes = read_png(&args.file)?;
    let metadata = read_metadata(&bytes)
        .with_context(|| format!("failed to read metadata of {}", args.file.display()))?;
    let out = match args.format {
        OutputFormat::Text => format_text(&metadata),
        OutputFormat::Json => serde_json::to_string_pretty(&MetadataJson::from(&metadata))?,
    };
    println!("{out}");
    Ok(())
}

fn format_text(metadata: &Metadata) -> String {
    let mut lines = metadata
        .text
        .iter()
        .map(|(keyword, text)| format!("{keyword}: {}", text.escape_debug()))
        .collect::<Vec<_>>();
    if let Some(phys) = metadata.phys {
        let dpi = phys
            .dpi()
            .map(|(x, y)| format!(" ({x:.0}x{y:.0} dpi)"))
            .unwrap_or_default();
        lines.push(format!("pHYs: {}x{} per {}{dpi}", phys.x, phys.y, phys.unit));
    }
    let chunks = metadata
        .chunks
        .keys()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    lines.push(format!("chunks: {}", chunks.join(" ")));
    lines.join("\n")
}

#[derive(Serialize)]
struct TextJson<'a> {
    keyword: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct PhysJson {
    x: u32,
    y: u32,
    unit: String,
}

impl From<PhysicalResolution> for PhysJson {
    #[inline]
    fn from(value: PhysicalResolution) -> Self {
        Self {
            x: value.x,
            y: value.y,
            unit: value.unit.to_string(),
        }
    }
}

#[derive(Serialize)]
struct MetadataJson<'a> {
    text: Vec<TextJson<'a>>,
    phys: Option<PhysJson>,
    chunks: Vec<String>,
}

impl<'a> From<&'a Metadata> for MetadataJson<'a> {
    #[inline]
    fn from(value: &'a Metadata) -> Self {
        Self {
            text: value
                .text
                .iter()
                .map(|(keyword, text)| TextJson { keyword, text })
                .collect(),
            phys: value.phys.map(Into::into),
            chunks: value.chunks.keys().map(ToString::to_string).collect(),
        }
    }
}
