use tracing::trace;

use crate::vectorizer::TermWeights;

/// Scoring formulas behind the IDF and TF-IDF stages
pub trait TFIDFEngine {
    /// IDF of a term found in `document_frequency` of `document_count` documents
    fn idf(document_count: usize, document_frequency: u32) -> f64;
    /// Weight of a term from its frequency and IDF
    fn tf_idf(tf: f64, idf: f64) -> f64;
}

/// デフォルトのTF-IDFエンジン
/// idf = ln(N / (1 + df)), tf-idf = tf * idf
///
/// Terms present in every document (and in all but one) score zero or
/// negative; nothing is clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(document_count: usize, document_frequency: u32) -> f64 {
        (document_count as f64 / (1.0 + document_frequency as f64)).ln()
    }

    #[inline]
    fn tf_idf(tf: f64, idf: f64) -> f64 {
        tf * idf
    }
}

/// Weight a term frequency map by the corpus IDF
///
/// Terms without an IDF entry are dropped; that is the normal case for query
/// vocabulary the corpus never saw.
pub fn weight_terms<'t>(tf: &TermWeights<'t>, idf: &TermWeights<'_>) -> TermWeights<'t> {
    weight_terms_with::<DefaultTFIDFEngine>(tf, idf)
}

/// [`weight_terms`] with a custom engine
pub fn weight_terms_with<'t, E>(tf: &TermWeights<'t>, idf: &TermWeights<'_>) -> TermWeights<'t>
where
    E: TFIDFEngine,
{
    let mut weighted = TermWeights::with_capacity(tf.len());
    for (&term, &tf_value) in tf {
        match idf.get(term) {
            Some(&idf_value) => {
                let weight = E::tf_idf(tf_value, idf_value);
                trace!(term, weight, "weighted term");
                weighted.insert(term, weight);
            }
            None => trace!(term, "term not in corpus"),
        }
    }
    weighted
}
