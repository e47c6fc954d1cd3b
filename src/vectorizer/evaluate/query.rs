use tracing::debug;

use crate::config::RankingConfig;
use crate::error::Result;
use crate::vectorizer::{
    compare::cosine_similarity,
    evaluate::scoring::{HitEntry, Hits},
    term::term_frequency,
    tfidf::{weight_terms_with, DefaultTFIDFEngine, TFIDFEngine},
    token::tokenize,
    TFIDFVectorizer, TermWeights,
};

/// TF-IDF vector of an ad-hoc query against an existing IDF
///
/// The query never contributes to the IDF; its terms unknown to the corpus
/// are dropped.
pub fn weigh_query<'q>(query: &'q str, idf: &TermWeights<'_>, terminator: &str) -> Result<TermWeights<'q>> {
    weigh_query_with::<DefaultTFIDFEngine>(query, idf, terminator)
}

fn weigh_query_with<'q, E>(query: &'q str, idf: &TermWeights<'_>, terminator: &str) -> Result<TermWeights<'q>>
where
    E: TFIDFEngine,
{
    let tokenized = tokenize(query, terminator)?;
    let tf = term_frequency(query, &tokenized.spans)?;
    let weighted = weight_terms_with::<E>(tf.weights(), idf);
    debug!(query, tokens = tf.token_count(), known_terms = weighted.len(), "query weighted");
    Ok(weighted)
}

/// Index of the document most similar to `query`
///
/// Scores are compared with a strict `<` against a zero baseline, so ties keep
/// the earlier document and `None` means no document scored above zero (or
/// there were no documents).
pub fn match_query(
    idf: &TermWeights<'_>,
    weighted: &[TermWeights<'_>],
    query: &str,
    config: &RankingConfig,
) -> Result<Option<usize>> {
    let query_weighted = weigh_query(query, idf, &config.terminator)?;
    Ok(best_match(&query_weighted, weighted, config.epsilon))
}

fn best_match(query: &TermWeights<'_>, weighted: &[TermWeights<'_>], epsilon: f64) -> Option<usize> {
    let mut best = None;
    let mut best_similarity = 0.0;
    for (index, document) in weighted.iter().enumerate() {
        let similarity = cosine_similarity(query, document, epsilon);
        if best_similarity < similarity {
            best_similarity = similarity;
            best = Some(index);
        }
    }
    match best {
        Some(index) => debug!(index, similarity = best_similarity, "best match"),
        None => debug!(documents = weighted.len(), "no match"),
    }
    best
}

/// Query matching over a loaded collection
impl<'a, E> TFIDFVectorizer<'a, E>
where
    E: TFIDFEngine,
{
    /// TF-IDF vector of `query` under this collection's IDF
    pub fn weigh_query<'q>(&self, query: &'q str) -> Result<TermWeights<'q>> {
        weigh_query_with::<E>(query, self.idf(), &self.config.terminator)
    }

    /// Index of the best matching document, `None` if nothing scores above zero
    pub fn match_query(&self, query: &str) -> Result<Option<usize>> {
        let query_weighted = self.weigh_query(query)?;
        Ok(best_match(&query_weighted, &self.weighted, self.config.epsilon))
    }

    /// Cosine similarity of `query` against every document, in load order
    /// Sort the result with [`Hits::sort_by_score`] for a ranking.
    pub fn rank_query(&self, query: &str) -> Result<Hits> {
        let query_weighted = self.weigh_query(query)?;
        let list = self
            .weighted
            .iter()
            .zip(&self.frequencies)
            .enumerate()
            .map(|(key, (document, tf))| HitEntry {
                key,
                score: cosine_similarity(&query_weighted, document, self.config.epsilon),
                token_count: tf.token_count(),
            })
            .collect();
        Ok(Hits::new(list))
    }

    /// Cosine similarity of every document pair `(i, j)` with `i < j`
    pub fn pairwise_similarity(&self) -> Vec<(usize, usize, f64)> {
        let n = self.weighted.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (i, a) in self.weighted.iter().enumerate() {
            for (j, b) in self.weighted.iter().enumerate().skip(i + 1) {
                let similarity = cosine_similarity(a, b, self.config.epsilon);
                debug!(a = i, b = j, similarity, "document similarity");
                pairs.push((i, j, similarity));
            }
        }
        pairs
    }
}
