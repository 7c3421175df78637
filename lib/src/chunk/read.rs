use crate::{
    chunk::{ChunkType, RawChunk, crc::Crc32},
    error::Error,
    header::check_header,
};
use std::mem;

/// Reads one chunk from the front of `bytes`, returning it and the rest.
///
/// `first` marks the first chunk after the signature, which must be `IHDR`.
/// An `IEND` chunk is returned with an empty payload and nothing after its
/// type is consumed.
pub(crate) fn read_chunk_from_slice(
    bytes: &[u8],
    first: bool,
) -> Result<(RawChunk, &[u8]), Error> {
    // read chunk length
    let (length, r) = bytes
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or(Error::TruncatedFile)?;
    let length = u32::from_be_bytes(*length);

    // read a chunk type
    let (ty, r) = r
        .split_first_chunk::<{ mem::size_of::<ChunkType>() }>()
        .ok_or(Error::TruncatedFile)?;
    let ty = ChunkType::from(*ty);

    if first && ty != ChunkType::IHDR {
        return Err(Error::MissingIhdr);
    }
    if ty == ChunkType::IEND {
        return Ok((RawChunk::new(ty, Vec::new()), &[]));
    }

    // read chunk data
    let (data, r) = r
        .split_at_checked(length as usize)
        .ok_or(Error::TruncatedFile)?;

    // read crc sum
    let (crc, r) = r
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or(Error::TruncatedFile)?;
    let expected = u32::from_be_bytes(*crc);

    let mut crc_hasher = Crc32::new();
    crc_hasher.update(ty.as_bytes());
    crc_hasher.update(data);
    let actual = crc_hasher.finalize();
    if expected != actual {
        return Err(Error::ChecksumMismatch {
            ty,
            expected,
            actual,
        });
    }
    Ok((RawChunk::new(ty, data.to_vec()), r))
}

/// Extracts the ordered list of chunks from a PNG byte stream.
///
/// The signature, the leading `IHDR` chunk, every checksum and the presence
/// of a terminating `IEND` chunk are all verified. Every payload is copied out
/// of `bytes`.
///
/// # Errors
/// Returns an error if the bytes are not a well-formed PNG chunk stream.
///
/// # Examples
/// ```
/// use libpngmeta::{Chunk, ChunkType, RawChunk, encode, extract};
///
/// let bytes = encode([
///     RawChunk::new(ChunkType::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]),
///     RawChunk::new(ChunkType::IEND, Vec::new()),
/// ]);
/// let chunks = extract(&bytes)?;
/// assert_eq!(chunks.first().map(|c| c.ty()), Some(ChunkType::IHDR));
/// assert_eq!(chunks.last().map(|c| c.ty()), Some(ChunkType::IEND));
/// # Ok::<(), libpngmeta::Error>(())
/// ```
pub fn extract(bytes: &[u8]) -> Result<Vec<RawChunk>, Error> {
    let mut r = check_header(bytes)?;
    let mut chunks = Vec::new();
    while !r.is_empty() {
        let (chunk, rest) = read_chunk_from_slice(r, chunks.is_empty())?;
        log::trace!("Read chunk {} ({} bytes)", chunk.ty, chunk.data.len());
        let end = chunk.ty == ChunkType::IEND;
        chunks.push(chunk);
        if end {
            return Ok(chunks);
        }
        r = rest;
    }
    Err(Error::TruncatedFile)
}
