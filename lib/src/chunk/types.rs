use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A 4-byte chunk type code.
///
/// The case of each letter encodes chunk properties (critical, public, ...),
/// but the type is otherwise treated as an opaque name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image trailer
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    // -- Ancillary chunks --
    /// Textual data
    #[allow(non_upper_case_globals)]
    pub const tEXt: ChunkType = ChunkType(*b"tEXt");
    /// Physical pixel dimensions
    #[allow(non_upper_case_globals)]
    pub const pHYs: ChunkType = ChunkType(*b"pHYs");

    /// Returns the raw bytes of this chunk type.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Returns `true` for the chunk types that make up the image itself
    /// (`IHDR`, `IDAT` and `IEND`).
    #[inline]
    pub fn is_image_chunk(&self) -> bool {
        *self == Self::IHDR || *self == Self::IDAT || *self == Self::IEND
    }
}

impl Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            Display::fmt(&b.escape_ascii(), f)?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`ChunkType`] from a string fails.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ChunkTypeError {
    /// The string is not exactly 4 bytes long.
    InvalidLength(usize),
}

impl Display for ChunkTypeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "chunk type must be 4 bytes long, but got {len} bytes")
            }
        }
    }
}

impl Error for ChunkTypeError {}

impl FromStr for ChunkType {
    type Err = ChunkTypeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| ChunkTypeError::InvalidLength(bytes.len()))
    }
}

impl From<[u8; 4]> for ChunkType {
    #[inline]
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ChunkType::tEXt.to_string(), "tEXt");
        assert_eq!(ChunkType(*b"a\0b\n").to_string(), "a\\x00b\\n");
    }

    #[test]
    fn parse() {
        assert_eq!("pHYs".parse::<ChunkType>(), Ok(ChunkType::pHYs));
        assert_eq!(
            "IHD".parse::<ChunkType>(),
            Err(ChunkTypeError::InvalidLength(3))
        );
        assert_eq!(
            "IHDRR".parse::<ChunkType>(),
            Err(ChunkTypeError::InvalidLength(5))
        );
    }

    #[test]
    fn from_bytes() {
        let ty = ChunkType::from(*b"gAMA");
        assert_eq!(ty.as_bytes(), b"gAMA");
        assert_eq!(ty, "gAMA".parse().unwrap());
    }

    #[test]
    fn image_chunk() {
        assert!(ChunkType::IHDR.is_image_chunk());
        assert!(ChunkType::IDAT.is_image_chunk());
        assert!(ChunkType::IEND.is_image_chunk());
        assert!(!ChunkType::tEXt.is_image_chunk());
        assert!(!ChunkType(*b"gAMA").is_image_chunk());
    }
}
