use crate::command::{Command, commons::read_png};
use anyhow::Context;
use clap::Parser;
use libpngmeta::{Chunk, ChunkType, MIN_CHUNK_BYTES_SIZE, PNG_HEADER, RawChunk, text_decode};
use std::path::PathBuf;
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

const BODY_PREVIEW_BYTES: usize = 32;

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ChunksCommand {
    #[arg(short, long, help = "Display chunk body")]
    pub(crate) long: bool,
    #[arg(short = 'H', long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for ChunksCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        list_chunks(self)
    }
}

fn list_chunks(args: ChunksCommand) -> anyhow::Result<()> {
    let bytes = read_png(&args.file)?;
    let chunks = libpngmeta::extract(&bytes)
        .with_context(|| format!("failed to read chunks of {}", args.file.display()))?;
    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset", "CRC"]
                .into_iter()
                .chain(args.long.then_some("Body")),
        )
    }
    let mut offset = PNG_HEADER.len();
    for (idx, chunk) in chunks.iter().enumerate() {
        builder.push_record(
            [
                (idx + 1).to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{offset:#06x}"),
                format!("{:08x}", chunk.crc()),
            ]
            .into_iter()
            .chain(args.long.then(|| body(chunk))),
        );
        offset += chunk.length() as usize + MIN_CHUNK_BYTES_SIZE;
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    println!("{table}");
    Ok(())
}

fn body(chunk: &RawChunk) -> String {
    if chunk.ty() == ChunkType::tEXt {
        if let Ok((keyword, text)) = text_decode(chunk.data()) {
            return format!("{keyword}={}", text.escape_debug());
        }
    }
    let data = chunk.data();
    let mut hex = data
        .iter()
        .take(BODY_PREVIEW_BYTES)
        .map(|b| format!("{b:02x}"))
        .collect::<String>();
    if data.len() > BODY_PREVIEW_BYTES {
        hex.push_str("...");
    }
    hex
}
