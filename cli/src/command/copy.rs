use crate::command::{
    Command,
    commons::{OutputArgs, read_png, update_png},
};
use anyhow::Context;
use clap::Parser;
use libpngmeta::{MetadataUpdate, read_metadata};
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct CopyCommand {
    #[arg(long, help = "Remove every chunk of the target except IHDR, IDAT and IEND first")]
    pub(crate) clear: bool,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
    #[arg(help = "Image to copy metadata from")]
    pub(crate) source: PathBuf,
    #[arg(help = "Image to copy metadata into")]
    pub(crate) target: PathBuf,
}

impl Command for CopyCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        copy_metadata(self)
    }
}

fn copy_metadata(args: CopyCommand) -> anyhow::Result<()> {
    let bytes = read_png(&args.source)?;
    let metadata = read_metadata(&bytes)
        .with_context(|| format!("failed to read metadata of {}", args.source.display()))?;
    log::debug!(
        "Copying {} text entries from {}",
        metadata.text.len(),
        args.source.display()
    );
    let update = MetadataUpdate::from(metadata)
        .into_builder()
        .clear(args.clear)
        .build();
    update_png(&args.target, args.output.destination(&args.target), &update)
}
