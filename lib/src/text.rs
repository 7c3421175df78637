//! Latin-1 `tEXt` payload codec.
//!
//! A `tEXt` payload is a keyword of 1 to 79 bytes, a single NULL separator and
//! the text. Both strings are Latin-1, so every character maps to exactly one
//! byte with the same value.
use crate::{Chunk, ChunkType, RawChunk, error::Error};

/// Maximum length of a keyword in bytes.
pub const MAX_KEYWORD_LEN: usize = 79;

const SEPARATOR: u8 = 0;

#[inline]
fn is_latin1(s: &str) -> bool {
    s.chars().all(|c| u32::from(c) <= 0xFF)
}

#[inline]
fn push_latin1(buf: &mut Vec<u8>, s: &str) {
    // `is_latin1` has been checked, every char fits in a byte.
    buf.extend(s.chars().map(|c| u32::from(c) as u8));
}

/// Encodes a keyword/text pair into a `tEXt` chunk.
///
/// The keyword must be 1 to 79 bytes. Rejecting an empty keyword is stricter
/// than encoders that only enforce the upper bound, so a pair such encoders
/// accept with `""` as keyword fails here with [`Error::EmptyKeyword`]. The
/// Latin-1 check runs before any length check, so `("€", "")` fails with
/// [`Error::InvalidCharacter`].
///
/// # Errors
/// - [`Error::InvalidCharacter`] if either string holds a character outside
///   Latin-1 or a NULL character.
/// - [`Error::KeywordTooLong`] if the keyword is 80 bytes or longer.
/// - [`Error::EmptyKeyword`] if the keyword is empty.
///
/// # Examples
/// ```
/// use libpngmeta::{Chunk, ChunkType, text_encode};
///
/// let chunk = text_encode("Title", "café")?;
/// assert_eq!(chunk.ty(), ChunkType::tEXt);
/// assert_eq!(chunk.data(), b"Title\0caf\xE9");
/// # Ok::<(), libpngmeta::Error>(())
/// ```
#[inline]
pub fn text_encode(keyword: &str, text: &str) -> Result<RawChunk, Error> {
    text_encode_with_type(keyword, text, ChunkType::tEXt)
}

/// Encodes a keyword/text pair into a chunk of type `ty`.
///
/// Same as [`text_encode`] for chunk types sharing the `tEXt` layout.
///
/// # Errors
/// See [`text_encode`].
pub fn text_encode_with_type(
    keyword: &str,
    text: &str,
    ty: ChunkType,
) -> Result<RawChunk, Error> {
    if !is_latin1(keyword) || !is_latin1(text) {
        return Err(Error::InvalidCharacter);
    }
    let keyword_len = keyword.chars().count();
    if keyword_len > MAX_KEYWORD_LEN {
        return Err(Error::KeywordTooLong(keyword_len));
    }
    if keyword_len == 0 {
        return Err(Error::EmptyKeyword);
    }
    if keyword.contains('\0') || text.contains('\0') {
        return Err(Error::InvalidCharacter);
    }
    let mut data = Vec::with_capacity(keyword_len + 1 + text.len());
    push_latin1(&mut data, keyword);
    data.push(SEPARATOR);
    push_latin1(&mut data, text);
    Ok(RawChunk::new(ty, data))
}

/// Decodes a `tEXt` payload into its keyword and text.
///
/// Bytes before the first NULL form the keyword, the remaining bytes form the
/// text. A payload without any NULL decodes into a keyword and an empty text.
///
/// # Errors
/// Returns [`Error::InvalidCharacter`] if the text holds a NULL character.
///
/// # Examples
/// ```
/// use libpngmeta::text_decode;
///
/// let (keyword, text) = text_decode(b"Title\0caf\xE9")?;
/// assert_eq!(keyword, "Title");
/// assert_eq!(text, "café");
/// # Ok::<(), libpngmeta::Error>(())
/// ```
pub fn text_decode(data: &[u8]) -> Result<(String, String), Error> {
    let (keyword, text) = match data.iter().position(|b| *b == SEPARATOR) {
        Some(idx) => (&data[..idx], &data[idx + 1..]),
        None => (data, &[][..]),
    };
    if text.contains(&SEPARATOR) {
        return Err(Error::InvalidCharacter);
    }
    let latin1 = |bytes: &[u8]| bytes.iter().map(|b| char::from(*b)).collect::<String>();
    Ok((latin1(keyword), latin1(text)))
}

/// Decodes the payload of `chunk` into its keyword and text.
///
/// The chunk type is not checked.
///
/// # Errors
/// See [`text_decode`].
#[inline]
pub fn text_decode_chunk<C: Chunk>(chunk: C) -> Result<(String, String), Error> {
    text_decode(chunk.data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_layout() {
        let chunk = text_encode("Software", "pngmeta").unwrap();
        assert_eq!(chunk.ty(), ChunkType::tEXt);
        assert_eq!(chunk.data(), b"Software\0pngmeta");
        assert_eq!(chunk.length(), 16);
    }

    #[test]
    fn encode_with_type() {
        let ty = ChunkType(*b"teXt");
        let chunk = text_encode_with_type("k", "v", ty).unwrap();
        assert_eq!(chunk.ty(), ty);
        assert_eq!(chunk.data(), b"k\0v");
    }

    #[test]
    fn encode_empty_text() {
        let chunk = text_encode("Comment", "").unwrap();
        assert_eq!(chunk.data(), b"Comment\0");
    }

    #[test]
    fn encode_latin1_as_single_bytes() {
        let chunk = text_encode("Author", "Ünïcödé ÿ").unwrap();
        assert_eq!(chunk.data(), b"Author\0\xDCn\xEFc\xF6d\xE9 \xFF");
    }

    #[test]
    fn keyword_too_long() {
        assert_eq!(
            text_encode(&"x".repeat(80), "v"),
            Err(Error::KeywordTooLong(80))
        );
        assert!(text_encode(&"x".repeat(79), "v").is_ok());
    }

    #[test]
    fn keyword_length_counts_latin1_bytes() {
        assert!(text_encode(&"é".repeat(79), "v").is_ok());
        assert_eq!(
            text_encode(&"é".repeat(80), "v"),
            Err(Error::KeywordTooLong(80))
        );
    }

    #[test]
    fn empty_keyword() {
        assert_eq!(text_encode("", "v"), Err(Error::EmptyKeyword));
    }

    #[test]
    fn null_character() {
        assert_eq!(text_encode("k\u{0}", "v"), Err(Error::InvalidCharacter));
        assert_eq!(text_encode("k", "v\u{0}v"), Err(Error::InvalidCharacter));
    }

    #[test]
    fn non_latin1() {
        assert_eq!(text_encode("k", "日本"), Err(Error::InvalidCharacter));
        assert_eq!(text_encode("€", "v"), Err(Error::InvalidCharacter));
        assert_eq!(text_encode("€", ""), Err(Error::InvalidCharacter));
    }

    #[test]
    fn decode_without_separator() {
        assert_eq!(
            text_decode(b"Title").unwrap(),
            ("Title".to_string(), String::new())
        );
    }

    #[test]
    fn decode_second_null() {
        assert_eq!(text_decode(b"k\0v\0w"), Err(Error::InvalidCharacter));
    }

    #[test]
    fn decode_chunk() {
        let chunk = RawChunk::new(ChunkType::tEXt, b"Title\0x".to_vec());
        assert_eq!(
            text_decode_chunk(&chunk).unwrap(),
            ("Title".to_string(), "x".to_string())
        );
    }

    #[test]
    fn round_trip() {
        let pairs = [
            ("Title", "A picture"),
            ("Comment", ""),
            ("Description", "line 1\nline 2\r\n\ttabbed"),
            ("Copyright", "© 2024 ½ ¾"),
            ("k", "\u{1}\u{7F}\u{80}\u{FF}"),
        ];
        for (keyword, text) in pairs {
            let chunk = text_encode(keyword, text).unwrap();
            assert_eq!(
                text_decode_chunk(chunk).unwrap(),
                (keyword.to_string(), text.to_string())
            );
        }
    }
}
