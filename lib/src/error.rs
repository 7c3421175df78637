use crate::ChunkType;
use std::{
    fmt::{self, Display, Formatter},
    io,
};

/// Reason the 8-byte PNG signature was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum HeaderError {
    /// The bytes are not a PNG signature.
    Signature,
    /// Only the CR/LF bytes of the signature differ, which usually means the
    /// file went through a DOS/Unix line ending conversion.
    LineEndingConversion,
}

impl Display for HeaderError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature => f.write_str("invalid PNG file header"),
            Self::LineEndingConversion => f.write_str(
                "invalid PNG file header: possibly caused by DOS-Unix line ending conversion",
            ),
        }
    }
}

/// Errors raised while reading or writing PNG metadata.
///
/// Every error aborts the whole operation; no partial chunk list or metadata
/// is returned alongside it.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidHeader(HeaderError),
    #[error("IHDR chunk missing, it must be the first chunk")]
    MissingIhdr,
    #[error("PNG file ended prematurely: no IEND chunk was found")]
    TruncatedFile,
    #[error("CRC values for {ty} chunk do not match (stored {expected:#010x}, computed {actual:#010x})")]
    ChecksumMismatch {
        ty: ChunkType,
        expected: u32,
        actual: u32,
    },
    #[error("invalid character in text chunk, only non-NULL Latin-1 characters are permitted")]
    InvalidCharacter,
    #[error("keyword must be shorter than 80 bytes, but got {0} bytes")]
    KeywordTooLong(usize),
    #[error("keyword must not be empty")]
    EmptyKeyword,
    #[error("pHYs chunk must hold 9 bytes, but got {0} bytes")]
    InvalidPhysicalResolution(usize),
}

impl Error {
    /// Returns `true` when the error was caused by malformed input bytes
    /// rather than by a value handed in for writing.
    #[inline]
    pub fn is_corrupted(&self) -> bool {
        matches!(
            self,
            Self::InvalidHeader(_)
                | Self::MissingIhdr
                | Self::TruncatedFile
                | Self::ChecksumMismatch { .. }
                | Self::InvalidPhysicalResolution(_)
        )
    }
}

impl From<Error> for io::Error {
    #[inline]
    fn from(value: Error) -> Self {
        let kind = if value.is_corrupted() {
            io::ErrorKind::InvalidData
        } else {
            io::ErrorKind::InvalidInput
        };
        io::Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_message_names_chunk() {
        let e = Error::ChecksumMismatch {
            ty: ChunkType::IHDR,
            expected: 0x1234,
            actual: 0xABCD,
        };
        assert_eq!(
            e.to_string(),
            "CRC values for IHDR chunk do not match (stored 0x00001234, computed 0x0000abcd)"
        );
    }

    #[test]
    fn into_io_error() {
        let e = io::Error::from(Error::TruncatedFile);
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        let e = io::Error::from(Error::KeywordTooLong(80));
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
    }
}
