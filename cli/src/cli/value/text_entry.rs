use std::str::FromStr;

/// A `KEYWORD=TEXT` pair given on the command line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct TextEntry {
    pub(crate) keyword: String,
    pub(crate) text: String,
}

impl FromStr for TextEntry {
    type Err = TextEntryParseError;

    /// Splits at the first `=`, so the text itself may contain `=`.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, text) = s
            .split_once('=')
            .ok_or(TextEntryParseError::MissingSeparator)?;
        if keyword.is_empty() {
            return Err(TextEntryParseError::EmptyKeyword);
        }
        Ok(Self {
            keyword: keyword.into(),
            text: text.into(),
        })
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub(crate) enum TextEntryParseError {
    #[error("text entry must be in the form KEYWORD=TEXT")]
    MissingSeparator,
    #[error("keyword must not be empty")]
    EmptyKeyword,
}
