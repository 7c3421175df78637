mod phys;
mod update;

pub use self::{phys::*, update::*};
use crate::{
    Chunk, ChunkType, RawChunk, encode, error::Error, extract,
    text::{text_decode_chunk, text_encode},
};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Metadata read from a PNG image.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Metadata {
    /// Keyword/text pairs of every `tEXt` chunk, in the order keywords first
    /// appear. The last text of a repeated keyword wins.
    pub text: IndexMap<String, String>,
    /// Physical resolution from the `pHYs` chunk. With several `pHYs` chunks,
    /// the last one wins.
    pub phys: Option<PhysicalResolution>,
    /// Every other chunk type present in the image.
    pub chunks: BTreeMap<ChunkType, bool>,
}

impl Metadata {
    /// Returns `true` if a chunk of type `ty` other than `tEXt` or `pHYs`
    /// was found.
    #[inline]
    pub fn contains_chunk(&self, ty: ChunkType) -> bool {
        self.chunks.get(&ty).copied().unwrap_or_default()
    }

    fn from_chunks<I>(chunks: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Chunk,
    {
        let mut metadata = Self::default();
        for chunk in chunks {
            match chunk.ty() {
                ChunkType::tEXt => {
                    let (keyword, text) = text_decode_chunk(&chunk)?;
                    metadata.text.insert(keyword, text);
                }
                ChunkType::pHYs => {
                    metadata.phys = Some(PhysicalResolution::try_from_bytes(chunk.data())?);
                }
                ty => {
                    metadata.chunks.insert(ty, true);
                }
            }
        }
        Ok(metadata)
    }
}

/// Reads the metadata of a PNG image.
///
/// # Errors
/// Returns an error if `bytes` is not a well-formed PNG chunk stream, or if a
/// `tEXt` or `pHYs` chunk is malformed.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, MetadataUpdate, RawChunk, encode, read_metadata, write_metadata};
///
/// let png = encode([
///     RawChunk::new(ChunkType::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]),
///     RawChunk::new(ChunkType::IEND, Vec::new()),
/// ]);
/// let update = MetadataUpdate::builder().text("Title", "x").build();
/// let metadata = read_metadata(&write_metadata(&png, &update)?)?;
/// assert_eq!(metadata.text["Title"], "x");
/// assert!(metadata.contains_chunk(ChunkType::IHDR));
/// # Ok::<(), libpngmeta::Error>(())
/// ```
#[inline]
pub fn read_metadata(bytes: &[u8]) -> Result<Metadata, Error> {
    Metadata::from_chunks(extract(bytes)?)
}

/// Applies `update` to `chunks` in place.
///
/// 1. With [`MetadataUpdateBuilder::clear`] set, every chunk except `IHDR`,
///    `IDAT` and `IEND` is removed. The first chunk is never inspected, as it
///    is the `IHDR` chunk of any extracted image.
/// 2. Every text entry is encoded into a `tEXt` chunk and inserted in front of
///    the last chunk (`IEND`).
/// 3. The physical resolution replaces the data of the first `pHYs` chunk, or
///    is inserted as a new chunk right after the first chunk.
///
/// # Errors
/// Returns an error if a text entry cannot be encoded. `chunks` may then hold
/// the chunks inserted before the failing entry.
pub fn insert_metadata(chunks: &mut Vec<RawChunk>, update: &MetadataUpdate) -> Result<(), Error> {
    if update.clear {
        for i in (1..chunks.len()).rev() {
            if !chunks[i].ty.is_image_chunk() {
                let removed = chunks.remove(i);
                log::debug!("Removed {} chunk", removed.ty);
            }
        }
    }

    for (keyword, text) in &update.text {
        let chunk = text_encode(keyword, text)?;
        let at = chunks.len().saturating_sub(1);
        chunks.insert(at, chunk);
        log::debug!("Inserted tEXt chunk {keyword:?}");
    }

    if let Some(phys) = update.phys {
        let data = phys.to_bytes().to_vec();
        match chunks.iter_mut().find(|c| c.ty == ChunkType::pHYs) {
            Some(chunk) => {
                log::debug!("Replaced pHYs chunk with {phys:?}");
                chunk.data = data;
            }
            None => {
                let at = chunks.len().min(1);
                chunks.insert(at, RawChunk::new(ChunkType::pHYs, data));
                log::debug!("Inserted pHYs chunk {phys:?}");
            }
        }
    }
    Ok(())
}

/// Applies `update` to a PNG image and returns the new image bytes.
///
/// Chunks other than the ones touched by `update` are carried over byte for
/// byte.
///
/// # Errors
/// Returns an error if `bytes` is not a well-formed PNG chunk stream or if a
/// text entry cannot be encoded.
#[inline]
pub fn write_metadata(bytes: &[u8], update: &MetadataUpdate) -> Result<Vec<u8>, Error> {
    let mut chunks = extract(bytes)?;
    insert_metadata(&mut chunks, update)?;
    Ok(encode(&chunks))
}
