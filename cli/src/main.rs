use clap::Parser;
use pngmeta_cli::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.init_logger()?;
    cli.execute()
}
