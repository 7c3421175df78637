use crate::error::{Error, HeaderError};

/// The magic number of Portable Network Graphics
pub const PNG_HEADER: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

/// Checks the leading signature of `bytes` and returns the remaining bytes.
///
/// Bytes are compared in order and the first mismatch decides the error: a
/// mismatch at one of the CR/LF positions (4, 5 and 7) is reported as a
/// likely line ending conversion.
pub(crate) fn check_header(bytes: &[u8]) -> Result<&[u8], Error> {
    for (i, (actual, expected)) in bytes.iter().zip(PNG_HEADER).enumerate() {
        if actual != expected {
            return Err(Error::InvalidHeader(match i {
                4 | 5 | 7 => HeaderError::LineEndingConversion,
                _ => HeaderError::Signature,
            }));
        }
    }
    bytes
        .get(PNG_HEADER.len()..)
        .ok_or(Error::InvalidHeader(HeaderError::Signature))
}
