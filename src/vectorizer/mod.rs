pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::RankingConfig;
use crate::error::{RankingError, Result};
use crate::vectorizer::{
    corpus::CorpusStats,
    term::{term_frequency_batch, TermFrequency},
    tfidf::{weight_terms_with, DefaultTFIDFEngine, TFIDFEngine},
    token::{tokenize_batch, TokenSpan},
};

/// Term -> weight map keyed by slices of the source text.
/// Holds raw frequencies, IDF scores or TF-IDF weights depending on the stage
/// that produced it. Insertion ordered, so accumulations over it are
/// reproducible.
pub type TermWeights<'a> = IndexMap<&'a str, f64>;

/// Term -> number of documents containing it
pub type DocumentFrequency<'a> = IndexMap<&'a str, u32>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TermWeight<'a> {
    pub term: &'a str,
    pub weight: f64,
}

impl<'a> TermWeight<'a> {
    pub fn new(term: &'a str, weight: f64) -> Self {
        Self { term, weight }
    }

    /// Still the `("", 0.0)` placeholder
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.term.is_empty() && self.weight == 0.0
    }
}

/// Lowest and highest weighted term seen while building one frequency map
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TermWeightLimits<'a> {
    pub min: TermWeight<'a>,
    pub max: TermWeight<'a>,
}

impl<'a> TermWeightLimits<'a> {
    /// Fold one weighted term into the extremes.
    /// Min is taken on a strictly smaller weight or while still unset,
    /// max only on a strictly larger weight.
    #[inline]
    pub fn observe(&mut self, candidate: TermWeight<'a>) {
        if candidate.weight < self.min.weight || self.min.is_sentinel() {
            self.min = candidate;
        }
        if candidate.weight > self.max.weight {
            self.max = candidate;
        }
    }
}

/// Apply `f` to every document of a batch in order
///
/// Stops at the first failure and wraps it as [`RankingError::Document`] with
/// the failing index; later documents are not visited.
pub(crate) fn map_documents<'a, S, T, F>(documents: &'a [S], mut f: F) -> Result<Vec<T>>
where
    S: AsRef<str>,
    F: FnMut(usize, &'a str) -> Result<T>,
{
    let mut mapped = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let document = document.as_ref();
        match f(index, document) {
            Ok(value) => mapped.push(value),
            Err(source) => {
                error!(index, document, "failed to process document: {}", source);
                return Err(RankingError::Document { index, source: Box::new(source) });
            }
        }
    }
    Ok(mapped)
}

/// TF-IDF Vectorizer
/// A loaded document collection: token spans, term frequencies, corpus IDF
/// and one TF-IDF vector per document, all borrowing from the documents.
///
/// Built once per batch by [`TFIDFVectorizer::load`]; the stages run in a
/// fixed order and never recompute each other.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<'a, E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    /// documents in load order
    pub documents: Vec<&'a str>,
    /// token spans per document
    pub spans: Vec<Vec<TokenSpan>>,
    /// term frequencies per document
    pub frequencies: Vec<TermFrequency<'a>>,
    /// document frequencies and IDF of the whole collection
    pub stats: CorpusStats<'a>,
    /// TF-IDF vector per document
    pub weighted: Vec<TermWeights<'a>>,
    pub config: RankingConfig,
    _marker: PhantomData<E>,
}

impl<'a, E> TFIDFVectorizer<'a, E>
where
    E: TFIDFEngine,
{
    /// Tokenize, count, build the IDF and weight every document
    pub fn load<S>(documents: &'a [S], config: RankingConfig) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let spans = tokenize_batch(documents, &config.terminator)?;
        let (frequencies, views): (Vec<_>, Vec<_>) = term_frequency_batch(documents, &spans)?.into_iter().unzip();
        let documents: Vec<&'a str> = documents.iter().map(|d| d.as_ref()).collect();

        let stats = CorpusStats::build::<E, _>(&views);
        let weighted: Vec<TermWeights<'a>> = frequencies
            .iter()
            .map(|tf| weight_terms_with::<E>(tf.weights(), stats.idf()))
            .collect();
        debug!(
            documents = documents.len(),
            vocabulary = stats.vocab_size(),
            "corpus loaded"
        );

        Ok(Self {
            documents,
            spans,
            frequencies,
            stats,
            weighted,
            config,
            _marker: PhantomData,
        })
    }

    pub fn idf(&self) -> &TermWeights<'a> {
        self.stats.idf()
    }

    pub fn occurrences(&self) -> &DocumentFrequency<'a> {
        self.stats.occurrences()
    }

    pub fn weighted(&self) -> &[TermWeights<'a>] {
        &self.weighted
    }

    /// Frequency extremes of document `index`
    pub fn limits(&self, index: usize) -> Option<&TermWeightLimits<'a>> {
        self.frequencies.get(index).map(|tf| tf.limits())
    }

    pub fn document(&self, index: usize) -> Option<&'a str> {
        self.documents.get(index).copied()
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Split into the corpus IDF and the per-document TF-IDF vectors
    pub fn into_weights(self) -> (TermWeights<'a>, Vec<TermWeights<'a>>) {
        (self.stats.into_idf(), self.weighted)
    }
}

/// Load a collection with the default engine and return
/// `(idf, per-document TF-IDF)`.
pub fn load_corpus<'a, S>(documents: &'a [S], config: &RankingConfig) -> Result<(TermWeights<'a>, Vec<TermWeights<'a>>)>
where
    S: AsRef<str>,
{
    TFIDFVectorizer::<DefaultTFIDFEngine>::load(documents, config.clone()).map(TFIDFVectorizer::into_weights)
}
