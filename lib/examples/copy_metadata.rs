use libpngmeta::{MetadataUpdate, read_metadata, write_metadata};
use std::{env, fs, io};

/// Copy the text entries and physical resolution of one image into another
fn copy_metadata(src: &[u8], dst: &[u8]) -> io::Result<Vec<u8>> {
    let metadata = read_metadata(src)?;
    Ok(write_metadata(dst, &MetadataUpdate::from(metadata))?)
}

fn main() -> io::Result<()> {
    let mut args = env::args_os().skip(1);
    let (Some(src), Some(dst)) = (args.next(), args.next()) else {
        eprintln!("usage: copy_metadata <SRC> <DST>");
        return Ok(());
    };
    let out = copy_metadata(&fs::read(src)?, &fs::read(&dst)?)?;
    fs::write(dst, out)
}
