pub(crate) mod chunks;
mod commons;
pub(crate) mod copy;
pub(crate) mod read;
pub(crate) mod strip;
pub(crate) mod write;

use crate::cli::{Cli, Commands};

pub fn entry(cli: Cli) -> anyhow::Result<()> {
    match cli.commands {
        Commands::Chunks(cmd) => cmd.execute(),
        Commands::Read(cmd) => cmd.execute(),
        Commands::Write(cmd) => cmd.execute(),
        Commands::Strip(cmd) => cmd.execute(),
        Commands::Copy(cmd) => cmd.execute(),
    }
}

pub(crate) trait Command {
    fn execute(self) -> anyhow::Result<()>;
}
