mod crc;
mod read;
mod traits;
mod types;
mod write;

use self::crc::Crc32;
pub use self::{
    read::extract,
    traits::*,
    types::*,
    write::{encode, encode_to},
};
use std::{
    io::{self, Write},
    mem,
    ops::Deref,
};

/// Minimum required size of bytes to represent [`Chunk`].
/// length:4 + chunk type:4 + data:0 + crc:4
pub const MIN_CHUNK_BYTES_SIZE: usize =
    mem::size_of::<u32>() + mem::size_of::<ChunkType>() + mem::size_of::<u32>();

pub(crate) trait ChunkExt: Chunk {
    /// byte size of chunk
    #[inline]
    fn bytes_len(&self) -> usize {
        MIN_CHUNK_BYTES_SIZE + self.data().len()
    }

    #[inline]
    fn write_chunk_in<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(&self.length().to_be_bytes())?;
        writer.write_all(self.ty().as_bytes())?;
        writer.write_all(self.data())?;
        writer.write_all(&self.crc().to_be_bytes())?;
        Ok(self.bytes_len())
    }

    /// Append the serialized form of this chunk to `vec`.
    #[inline]
    fn extend_bytes(&self, vec: &mut Vec<u8>) {
        vec.reserve(self.bytes_len());
        vec.extend_from_slice(&self.length().to_be_bytes());
        vec.extend_from_slice(self.ty().as_bytes());
        vec.extend_from_slice(self.data());
        vec.extend_from_slice(&self.crc().to_be_bytes());
    }

    /// Convert the provided `Chunk` instance into a `Vec<u8>`.
    #[cfg(test)]
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(self.bytes_len());
        self.extend_bytes(&mut vec);
        vec
    }
}

impl<T> ChunkExt for T where T: Chunk {}

/// Represents a raw chunk with an owned payload.
///
/// The length and checksum are not stored, so the payload can be replaced
/// freely and the chunk is still encoded correctly.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RawChunk {
    pub(crate) ty: ChunkType,
    pub(crate) data: Vec<u8>,
}

impl RawChunk {
    /// Create a new [`RawChunk`] from given [`ChunkType`] and bytes.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{Chunk, ChunkType, RawChunk};
    ///
    /// let chunk = RawChunk::new(ChunkType::IEND, Vec::new());
    ///
    /// assert_eq!(chunk.length(), 0);
    /// assert_eq!(chunk.ty(), ChunkType::IEND);
    /// assert!(chunk.data().is_empty());
    /// assert_eq!(chunk.crc(), 0xAE426082);
    /// ```
    #[inline]
    pub fn new<T: Into<Vec<u8>>>(ty: ChunkType, data: T) -> Self {
        Self {
            ty,
            data: data.into(),
        }
    }

    /// Returns a mutable reference to the chunk data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Consumes the chunk, returning its data.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Chunk for RawChunk {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl<T: Deref<Target = [u8]>> Chunk for (ChunkType, T) {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.0
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.1
    }
}

impl<T: Chunk> Chunk for &T {
    #[inline]
    fn ty(&self) -> ChunkType {
        (*self).ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes() {
        let data = vec![0x00, 0x00, 0x0B, 0x13, 0x00, 0x00, 0x0B, 0x13, 0x01];
        let chunk = RawChunk::new(ChunkType::pHYs, data);

        let bytes = chunk.to_bytes();

        assert_eq!(
            bytes,
            vec![
                0x00, 0x00, 0x00, 0x09, // chunk length (9)
                0x70, 0x48, 0x59, 0x73, // chunk type ("pHYs")
                0x00, 0x00, 0x0B, 0x13, // pixels per unit, x axis
                0x00, 0x00, 0x0B, 0x13, // pixels per unit, y axis
                0x01, // unit specifier
                0x00, 0x9A, 0x9C, 0x18, // CRC32 (calculated from chunk type and data)
            ]
        );
    }

    #[test]
    fn crc_follows_data_mut() {
        let mut chunk = RawChunk::new(ChunkType::tEXt, b"Title\0y".to_vec());
        let before = chunk.crc();
        chunk.data_mut().pop();
        chunk.data_mut().push(b'x');
        assert_ne!(chunk.crc(), before);
        assert_eq!(chunk.crc(), 0x297E4D3A);
        assert_eq!(chunk.bytes_len(), 19);
    }

    #[test]
    fn tuple_chunk_matches_raw_chunk() {
        let raw = RawChunk::new(ChunkType::IDAT, vec![1, 2, 3]);
        let tuple = (ChunkType::IDAT, vec![1u8, 2, 3]);
        assert_eq!(raw.to_bytes(), tuple.to_bytes());
    }

    #[test]
    fn into_data() {
        let chunk = RawChunk::new(ChunkType::from(*b"zTXt"), vec![1, 2, 3]);
        assert_eq!(chunk.ty().as_bytes(), b"zTXt");
        assert_eq!(chunk.into_data(), [1, 2, 3]);
    }
}
