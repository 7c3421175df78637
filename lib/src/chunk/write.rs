use crate::{
    PNG_HEADER,
    chunk::{Chunk, ChunkExt},
};
use std::io::{self, Write};

pub(crate) struct ChunkWriter<W> {
    w: W,
}

impl<W> ChunkWriter<W> {
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.w
    }
}

impl<W> From<W> for ChunkWriter<W>
where
    W: Write,
{
    fn from(writer: W) -> Self {
        Self { w: writer }
    }
}

impl<W: Write> ChunkWriter<W> {
    pub(crate) fn write_header(&mut self) -> io::Result<usize> {
        self.w.write_all(PNG_HEADER)?;
        Ok(PNG_HEADER.len())
    }

    pub(crate) fn write_chunk<C: Chunk>(&mut self, chunk: C) -> io::Result<usize> {
        chunk.write_chunk_in(&mut self.w)
    }
}

/// Serializes `chunks` into a PNG byte stream.
///
/// The signature is written first, then every chunk in order with its length
/// and a freshly computed checksum. The sequence is not validated: the caller
/// is responsible for handing in `IHDR` first and `IEND` last.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, RawChunk, encode};
///
/// let bytes = encode([RawChunk::new(ChunkType::IEND, Vec::new())]);
/// assert_eq!(
///     bytes,
///     b"\x89PNG\r\n\x1A\n\0\0\0\0IEND\xAE\x42\x60\x82"
/// );
/// ```
pub fn encode<I>(chunks: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Chunk,
{
    let mut vec = PNG_HEADER.to_vec();
    for chunk in chunks {
        chunk.extend_bytes(&mut vec);
    }
    vec
}

/// Serializes `chunks` into `writer`, returning the number of bytes written.
///
/// Produces the same bytes as [`encode`].
///
/// # Errors
/// Returns an error if writing to `writer` fails.
pub fn encode_to<I, W>(chunks: I, writer: W) -> io::Result<usize>
where
    I: IntoIterator,
    I::Item: Chunk,
    W: Write,
{
    let mut writer = ChunkWriter::from(writer);
    let mut written = writer.write_header()?;
    for chunk in chunks {
        written += writer.write_chunk(chunk)?;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChunkType, RawChunk};

    #[test]
    fn write_iend_chunk() {
        let mut chunk_writer = ChunkWriter::from(Vec::new());
        assert_eq!(
            chunk_writer
                .write_chunk((ChunkType::IEND, b"".as_slice()))
                .unwrap(),
            12
        );
        assert_eq!(
            chunk_writer.into_inner(),
            [0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130]
        );
    }

    #[test]
    fn write_text_chunk() {
        let mut chunk_writer = ChunkWriter::from(Vec::new());
        assert_eq!(
            chunk_writer
                .write_chunk((ChunkType::tEXt, "Title\0x".as_bytes()))
                .unwrap(),
            19,
        );
        assert_eq!(
            chunk_writer.into_inner(),
            [
                0, 0, 0, 7, 116, 69, 88, 116, 84, 105, 116, 108, 101, 0, 120, 0x29, 0x7E, 0x4D,
                0x3A
            ]
        );
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(Vec::<RawChunk>::new()), PNG_HEADER);
    }

    #[test]
    fn encode_to_matches_encode() {
        let chunks = vec![
            RawChunk::new(ChunkType::IHDR, vec![0; 13]),
            RawChunk::new(ChunkType::tEXt, b"k\0v".to_vec()),
            RawChunk::new(ChunkType::IEND, Vec::new()),
        ];
        let mut out = Vec::new();
        let written = encode_to(&chunks, &mut out).unwrap();
        assert_eq!(written, out.len());
        assert_eq!(out, encode(&chunks));
    }

    #[test]
    fn encode_does_not_validate() {
        let chunks = [RawChunk::new(ChunkType::IDAT, vec![1])];
        assert_eq!(encode(chunks).len(), PNG_HEADER.len() + 13);
    }
}
