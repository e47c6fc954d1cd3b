//! Error types for the ranking engine.
//!
//! Missing vocabulary and "no match" are not errors; they surface as dropped
//! terms and `None` respectively.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;

#[derive(Error, Debug)]
pub enum RankingError {
    /// Growing the span buffer failed
    #[error("allocation failed while collecting token spans: {0}")]
    Allocation(#[from] TryReserveError),

    /// Span offsets are 32 bit, longer buffers cannot be addressed
    #[error("text of {len} bytes exceeds the addressable span range")]
    TextTooLong { len: usize },

    /// A span does not describe a valid slice of its text
    #[error("span [{offset}, +{len}) is outside a text of {text_len} bytes")]
    InvalidSpan { offset: u32, len: u32, text_len: usize },

    /// Parallel batch inputs disagree in length
    #[error("{documents} documents but {spans} span lists")]
    BatchLength { documents: usize, spans: usize },

    /// A document of a batch failed; the rest of the batch was not processed
    #[error("document {index} failed: {source}")]
    Document {
        index: usize,
        #[source]
        source: Box<RankingError>,
    },
}

impl RankingError {
    /// Negative status code of this error.
    ///
    /// Batch failures encode the failing document as `-(index + 1)`,
    /// everything else is `-1`.
    pub fn code(&self) -> i32 {
        match self {
            RankingError::Document { index, .. } => {
                i32::try_from(*index).map_or(i32::MIN, |index| -(index.saturating_add(1)))
            }
            _ => -1,
        }
    }

    /// Index of the failing document for batch errors
    pub fn document_index(&self) -> Option<usize> {
        match self {
            RankingError::Document { index, .. } => Some(*index),
            _ => None,
        }
    }
}
