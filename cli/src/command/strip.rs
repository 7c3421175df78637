use crate::command::{
    Command,
    commons::{OutputArgs, update_png},
};
use clap::Parser;
use libpngmeta::MetadataUpdate;
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct StripCommand {
    #[command(flatten)]
    pub(crate) output: OutputArgs,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl Command for StripCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        strip_metadata(self)
    }
}

fn strip_metadata(args: StripCommand) -> anyhow::Result<()> {
    let update = MetadataUpdate::builder().clear(true).build();
    update_png(&args.file, args.output.destination(&args.file), &update)
}
