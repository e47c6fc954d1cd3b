use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::error::{RankingError, Result};
use crate::vectorizer::map_documents;

/// Half-open byte range of one token inside its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    pub offset: u32,
    pub len: u32,
}

impl TokenSpan {
    pub fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.len as usize
    }

    /// Slice the token out of `text`
    /// None if the span does not fit the text
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range())
    }
}

/// Output of a single tokenization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// token spans in order of appearance
    pub spans: Vec<TokenSpan>,
    /// scan position where tokenization stopped
    /// equals the text length unless a terminator was hit
    pub cursor: usize,
}

/// Character class policy of the tokenizer
///
/// Whitespace and every byte outside `'A'..='z'` is skipped. This also skips
/// digits, most punctuation and all non-ASCII bytes, while `[ \ ] ^ _ \``
/// sit inside the range and stay part of a token.
#[inline]
pub fn is_skippable(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte < b'A' || byte > b'z'
}

#[inline]
fn at_terminator(rest: &[u8], terminator: &[u8]) -> bool {
    !terminator.is_empty() && rest.starts_with(terminator)
}

/// Tokenize `text` into a fresh span list
///
/// # Arguments
/// * `text` - source text
/// * `terminator` - scanning stops where this text starts, empty for none
pub fn tokenize(text: &str, terminator: &str) -> Result<Tokenized> {
    let mut spans = Vec::new();
    let cursor = tokenize_into(text, terminator, &mut spans)?;
    Ok(Tokenized { spans, cursor })
}

/// Tokenize `text`, appending spans to `spans`
///
/// Returns the scan position after the last token. On allocation failure the
/// call fails and `spans` keeps whatever was appended before.
pub fn tokenize_into(text: &str, terminator: &str, spans: &mut Vec<TokenSpan>) -> Result<usize> {
    let bytes = text.as_bytes();
    if u32::try_from(bytes.len()).is_err() {
        return Err(RankingError::TextTooLong { len: bytes.len() });
    }
    let terminator = terminator.as_bytes();

    let mut start = 0usize;
    while start < bytes.len() {
        while start < bytes.len() && is_skippable(bytes[start]) && !at_terminator(&bytes[start..], terminator) {
            start += 1;
        }
        if at_terminator(&bytes[start..], terminator) {
            debug!(position = start, "terminator reached");
            break;
        }
        let mut end = start;
        while end < bytes.len() && !is_skippable(bytes[end]) && !at_terminator(&bytes[end..], terminator) {
            end += 1;
        }
        if start < end {
            spans.try_reserve(1).map_err(|e| {
                error!("failed to store token span: {}", e);
                e
            })?;
            // text length was checked against u32 above
            let span = TokenSpan::new(start as u32, (end - start) as u32);
            trace!(token = &text[span.range()], start, end, "token");
            spans.push(span);
        }
        start = end;
    }
    Ok(start)
}

/// Tokenize every document of a batch
///
/// Stops at the first failing document and reports its index.
pub fn tokenize_batch<S>(documents: &[S], terminator: &str) -> Result<Vec<Vec<TokenSpan>>>
where
    S: AsRef<str>,
{
    map_documents(documents, |index, document| {
        let mut spans = Vec::new();
        tokenize_into(document, terminator, &mut spans)?;
        debug!(index, tokens = spans.len(), "tokenized document");
        Ok(spans)
    })
}

/// Slice every span out of `text`
pub fn token_views<'a>(text: &'a str, spans: &[TokenSpan]) -> Result<Vec<&'a str>> {
    spans.iter().map(|span| view(text, span)).collect()
}

#[inline]
pub(crate) fn view<'a>(text: &'a str, span: &TokenSpan) -> Result<&'a str> {
    span.slice(text).ok_or(RankingError::InvalidSpan {
        offset: span.offset,
        len: span.len,
        text_len: text.len(),
    })
}
