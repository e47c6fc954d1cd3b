use tracing::debug;

use crate::error::{RankingError, Result};
use crate::vectorizer::token::{view, TokenSpan};
use crate::vectorizer::{map_documents, TermWeight, TermWeightLimits, TermWeights};

/// TermFrequency struct
/// Normalized term frequencies of one document.
/// Every term count is divided by the document's token count, so the weights
/// sum to 1.0. Keys borrow from the document text.
///
/// # Examples
/// ```
/// use tf_idf_ranker::vectorizer::term::term_frequency_from_views;
/// let tf = term_frequency_from_views(&["apple", "banana", "apple", "orange"]);
///
/// assert_eq!(tf.weight("apple"), 0.5);
/// assert_eq!(tf.limits().max.term, "apple");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency<'a> {
    weights: TermWeights<'a>,
    limits: TermWeightLimits<'a>,
    token_count: usize,
}

impl<'a> TermFrequency<'a> {
    /// Count and normalize a token stream
    fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut weights = TermWeights::new();
        let mut token_count = 0usize;
        for token in tokens {
            *weights.entry(token).or_insert(0.0) += 1.0;
            token_count += 1;
        }

        // no entries when token_count is zero, so nothing is divided by it
        let total = token_count as f64;
        let mut limits = TermWeightLimits::default();
        for (&term, weight) in weights.iter_mut() {
            *weight /= total;
            limits.observe(TermWeight::new(term, *weight));
        }
        debug!(
            tokens = token_count,
            terms = weights.len(),
            min_term = limits.min.term,
            min_weight = limits.min.weight,
            max_term = limits.max.term,
            max_weight = limits.max.weight,
            "term frequency"
        );

        Self { weights, limits, token_count }
    }

    pub fn weights(&self) -> &TermWeights<'a> {
        &self.weights
    }

    pub fn into_weights(self) -> TermWeights<'a> {
        self.weights
    }

    pub fn limits(&self) -> &TermWeightLimits<'a> {
        &self.limits
    }

    /// Number of tokens the frequencies were normalized by
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of distinct terms
    pub fn term_num(&self) -> usize {
        self.weights.len()
    }

    /// Frequency of `term`, 0.0 when absent
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Distinct terms in first occurrence order
    pub fn term_set(&self) -> Vec<&'a str> {
        self.weights.keys().copied().collect()
    }
}

/// Term frequencies of the tokens `spans` select from `text`
pub fn term_frequency<'a>(text: &'a str, spans: &[TokenSpan]) -> Result<TermFrequency<'a>> {
    let views = spans.iter().map(|span| view(text, span)).collect::<Result<Vec<_>>>()?;
    Ok(TermFrequency::from_tokens(views))
}

/// Same as [`term_frequency`], also handing back the token views
///
/// `views` is cleared and refilled with one slice per span.
pub fn term_frequency_with_views<'a>(
    text: &'a str,
    spans: &[TokenSpan],
    views: &mut Vec<&'a str>,
) -> Result<TermFrequency<'a>> {
    views.clear();
    views.reserve(spans.len());
    for span in spans {
        views.push(view(text, span)?);
    }
    Ok(TermFrequency::from_tokens(views.iter().copied()))
}

/// Term frequencies of pre-sliced token views
pub fn term_frequency_from_views<'a>(views: &[&'a str]) -> TermFrequency<'a> {
    TermFrequency::from_tokens(views.iter().copied())
}

/// Term frequencies and token views for every document of a batch
///
/// Output is indexed like `documents`; `spans` must be parallel to it.
/// A failing document is reported with its index.
pub fn term_frequency_batch<'a, S>(
    documents: &'a [S],
    spans: &[Vec<TokenSpan>],
) -> Result<Vec<(TermFrequency<'a>, Vec<&'a str>)>>
where
    S: AsRef<str>,
{
    if documents.len() != spans.len() {
        return Err(RankingError::BatchLength { documents: documents.len(), spans: spans.len() });
    }
    map_documents(documents, |index, document| {
        let mut views = Vec::new();
        let tf = term_frequency_with_views(document, &spans[index], &mut views)?;
        Ok((tf, views))
    })
}
