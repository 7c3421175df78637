pub(crate) mod value;

use crate::command::{
    self, chunks::ChunksCommand, copy::CopyCommand, read::ReadCommand, strip::StripCommand,
    write::WriteCommand,
};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::io;
use value::LogLevel;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(name = "pngmeta", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
}

impl Cli {
    /// Installs the global logger writing to stderr.
    pub fn init_logger(&self) -> Result<(), log::SetLoggerError> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}: {}",
                    record.level().as_str().to_ascii_lowercase(),
                    message
                ))
            })
            .level(self.verbosity.level_filter())
            .chain(io::stderr())
            .apply()
    }

    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        command::entry(self)
    }
}

#[derive(Args, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) struct VerbosityArgs {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::default(),
        help = "Log level"
    )]
    log_level: LogLevel,
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Make some output more quiet"
    )]
    quiet: bool,
    #[arg(short, long, global = true, help = "Make some output more verbose")]
    verbose: bool,
}

impl VerbosityArgs {
    #[inline]
    pub(crate) const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            self.log_level.as_level_filter()
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "List chunks of an image")]
    Chunks(ChunksCommand),
    #[command(about = "Print text entries, physical resolution and chunk types of an image")]
    Read(ReadCommand),
    #[command(about = "Add or replace metadata of an image")]
    Write(WriteCommand),
    #[command(about = "Remove every chunk except IHDR, IDAT and IEND")]
    Strip(StripCommand),
    #[command(about = "Copy text entries and physical resolution from one image to another")]
    Copy(CopyCommand),
}
