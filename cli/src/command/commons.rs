use anyhow::Context;
use clap::Args;
use libpngmeta::{MetadataUpdate, write_metadata};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct OutputArgs {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write the result to this file instead of overwriting the input"
    )]
    pub(crate) output: Option<PathBuf>,
}

impl OutputArgs {
    #[inline]
    pub(crate) fn destination<'a>(&'a self, input: &'a Path) -> &'a Path {
        self.output.as_deref().unwrap_or(input)
    }
}

pub(crate) fn read_png(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Applies `update` to the image at `input` and writes the result to `output`.
pub(crate) fn update_png(input: &Path, output: &Path, update: &MetadataUpdate) -> anyhow::Result<()> {
    let bytes = read_png(input)?;
    let bytes = write_metadata(&bytes, update)
        .with_context(|| format!("failed to update {}", input.display()))?;
    write_replacing(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

/// Writes `bytes` to a temporary sibling of `path` and moves it into place,
/// so an existing file at `path` is left intact when writing fails.
pub(crate) fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|it| !it.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            log::debug!("Failed to remove {}: {e}", tmp.display());
        }
    }
    result
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
