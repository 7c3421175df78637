use super::{ChunkType, Crc32};

/// A trait representing a chunk in a PNG image.
///
/// A chunk is the basic unit of data storage in a PNG image. Each chunk consists of:
/// - A length field (4 bytes)
/// - A chunk type (4 bytes)
/// - The chunk data (variable length)
/// - A CRC32 checksum over the chunk type and data (4 bytes)
///
/// Only the type and the data are stored; the length and the checksum are
/// always derived from them.
///
/// # Examples
/// ```no_run
/// use libpngmeta::{Chunk, ChunkType, RawChunk};
///
/// fn process_chunk<C: Chunk>(chunk: &C) {
///     println!("Chunk type: {}", chunk.ty());
///     println!("Data length: {}", chunk.length());
///     println!("CRC32: {:08x}", chunk.crc());
/// }
/// ```
pub trait Chunk {
    /// Returns the length of the chunk data in bytes.
    #[inline]
    fn length(&self) -> u32 {
        self.data().len() as u32
    }

    /// Returns the type of the chunk.
    fn ty(&self) -> ChunkType;

    /// Returns the data of the chunk.
    fn data(&self) -> &[u8];

    /// Returns the CRC32 checksum of the chunk type and data.
    #[inline]
    fn crc(&self) -> u32 {
        let mut crc = Crc32::new();
        crc.update(self.ty().as_bytes());
        crc.update(self.data());
        crc.finalize()
    }
}
