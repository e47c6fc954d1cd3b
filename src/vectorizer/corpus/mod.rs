use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::vectorizer::{
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    DocumentFrequency, TermWeights,
};

/// keep document count, document frequencies and IDF scores of one batch
///
/// Only terms seen in at least one document of the batch have entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusStats<'a> {
    /// term -> IDF score
    idf: TermWeights<'a>,
    /// term -> number of documents containing it
    occurrences: DocumentFrequency<'a>,
    /// documents in the batch
    document_count: usize,
}

impl<'a> CorpusStats<'a> {
    /// Count document frequencies and derive IDF scores with engine `E`
    ///
    /// # Arguments
    /// * `documents` - token views of every document; repeats inside one
    ///   document count once
    pub fn build<E, V>(documents: &[V]) -> Self
    where
        E: TFIDFEngine,
        V: AsRef<[&'a str]>,
    {
        let mut occurrences = DocumentFrequency::new();
        let mut unique_terms: IndexSet<&'a str> = IndexSet::new();
        for document in documents {
            unique_terms.clear();
            unique_terms.extend(document.as_ref().iter().copied());
            for &term in &unique_terms {
                let count = occurrences.entry(term).or_insert(0);
                *count += 1;
                trace!(term, documents = *count, "document term");
            }
        }

        let document_count = documents.len();
        let idf: TermWeights<'a> = occurrences
            .iter()
            .map(|(&term, &count)| (term, E::idf(document_count, count)))
            .collect();
        debug!(documents = document_count, vocabulary = idf.len(), "inverse document frequency");

        Self { idf, occurrences, document_count }
    }

    pub fn idf(&self) -> &TermWeights<'a> {
        &self.idf
    }

    pub fn into_idf(self) -> TermWeights<'a> {
        self.idf
    }

    pub fn occurrences(&self) -> &DocumentFrequency<'a> {
        &self.occurrences
    }

    /// Get the number of documents in the batch
    pub fn doc_num(&self) -> usize {
        self.document_count
    }

    /// Get the number of documents containing `term`
    pub fn term_count(&self, term: &str) -> u32 {
        self.occurrences.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }

    /// Terms in first occurrence order
    pub fn terms(&self) -> Vec<&'a str> {
        self.idf.keys().copied().collect()
    }
}

/// Document frequencies and IDF scores of a batch with the default engine
///
/// Returns `(idf, occurrences)`.
pub fn inverse_document_frequency<'a, V>(documents: &[V]) -> (TermWeights<'a>, DocumentFrequency<'a>)
where
    V: AsRef<[&'a str]>,
{
    let stats = CorpusStats::build::<DefaultTFIDFEngine, V>(documents);
    (stats.idf, stats.occurrences)
}
