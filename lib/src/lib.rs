//! A library for reading and writing PNG metadata
//!
//! This library extracts the chunk structure of a PNG image, interprets the
//! chunks that carry metadata (`tEXt` keyword/text pairs and the `pHYs`
//! physical resolution) and writes them back without touching pixel data.
//! Every chunk read is checked against its CRC32, and every chunk written gets
//! a freshly computed one.
//!
//! # Examples
//! ```
//! use libpngmeta::{ChunkType, MetadataUpdate, PhysicalResolution, RawChunk, encode, read_metadata, write_metadata};
//!
//! let png = encode([
//!     RawChunk::new(ChunkType::IHDR, vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]),
//!     RawChunk::new(ChunkType::IEND, Vec::new()),
//! ]);
//! let update = MetadataUpdate::builder()
//!     .text("Title", "Sunset")
//!     .phys(PhysicalResolution::from_dpi(72))
//!     .build();
//! let png = write_metadata(&png, &update)?;
//!
//! let metadata = read_metadata(&png)?;
//! assert_eq!(metadata.text["Title"], "Sunset");
//! assert_eq!(metadata.phys, PhysicalResolution::from_dpi(72));
//! # Ok::<(), libpngmeta::Error>(())
//! ```
pub(crate) mod chunk;
pub(crate) mod error;
pub(crate) mod header;
pub(crate) mod metadata;
pub mod prelude;
pub(crate) mod text;

pub use chunk::*;
pub use error::*;
pub use header::PNG_HEADER;
pub use metadata::*;
pub use text::*;
