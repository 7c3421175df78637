use crate::{
    cli::value::{PhysArg, TextEntry},
    command::{
        Command,
        commons::{OutputArgs, update_png},
    },
};
use anyhow::Context;
use clap::Parser;
use libpngmeta::{MetadataUpdate, PhysicalResolution};
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct WriteCommand {
    #[arg(
        long = "text",
        value_name = "KEYWORD=TEXT",
        help = "Add a tEXt entry, may be given several times"
    )]
    pub(crate) text: Vec<TextEntry>,
    #[arg(
        long,
        value_name = "X,Y[,UNIT]",
        help = "Set the pixels per unit (UNIT: undefined, meters, inches; default meters)"
    )]
    pub(crate) phys: Option<PhysArg>,
    #[arg(
        long,
        value_name = "DPI",
        conflicts_with = "phys",
        help = "Set the resolution in dots per inch"
    )]
    pub(crate) dpi: Option<u32>,
    #[arg(long, help = "Remove every chunk except IHDR, IDAT and IEND first")]
    pub(crate) clear: bool,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
    #[arg()]
    pub(crate) file: PathBuf,
}

impl WriteCommand {
    fn update(&self) -> anyhow::Result<MetadataUpdate> {
        let phys = match (self.phys, self.dpi) {
            (Some(phys), _) => Some(phys.0),
            (None, Some(dpi)) => Some(
                PhysicalResolution::from_dpi(dpi)
                    .with_context(|| format!("--dpi {dpi} is too large for a pHYs chunk"))?,
            ),
            (None, None) => None,
        };
        Ok(MetadataUpdate::builder()
            .clear(self.clear)
            .texts(self.text.iter().map(|e| (e.keyword.as_str(), e.text.as_str())))
            .phys(phys)
            .build())
    }
}

impl Command for WriteCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        write_file_metadata(self)
    }
}

fn write_file_metadata(args: WriteCommand) -> anyhow::Result<()> {
    let update = args.update()?;
    if !update.is_clear() && update.text().is_empty() && update.phys().is_none() {
        log::warn!("Nothing to write, the image is rewritten unchanged");
    }
    for (keyword, text) in update.text() {
        log::debug!("Setting {keyword:?} to {text:?}");
    }
    update_png(&args.file, args.output.destination(&args.file), &update)
}
