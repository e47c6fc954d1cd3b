/// This crate is a small in-memory document ranking engine using TF-IDF and cosine similarity.
pub mod vectorizer;
pub mod config;
pub mod error;

/// TF-IDF Vectorizer
/// The top-level struct of this crate. It loads a document collection once and
/// keeps every derived stage:
/// - Token spans per document
/// - Term frequencies (and their min/max limits) per document
/// - Document frequencies and IDF scores of the collection
/// - One TF-IDF vector per document
///
/// All maps are keyed by `&str` slices of the loaded documents, so the
/// vectorizer borrows the documents for its whole life.
///
/// `TFIDFVectorizer<'a, E>` has the following parameters:
/// - `'a`: lifetime of the document texts
/// - `E`: TF-IDF calculation engine type (default `DefaultTFIDFEngine`)
///
/// Queries are matched with `match_query` (best document index) or
/// `rank_query` (score for every document).
pub use vectorizer::TFIDFVectorizer;

/// Composite entry point
/// Loads a collection with the default engine and returns the corpus IDF
/// and the per-document TF-IDF vectors.
pub use vectorizer::load_corpus;

/// Term Weight Map
/// `IndexMap<&str, f64>` used for frequencies, IDF scores and TF-IDF weights.
/// Which of the three a map holds depends on the stage that produced it.
pub use vectorizer::{DocumentFrequency, TermWeight, TermWeightLimits, TermWeights};

/// Tokenizer
/// Splits text into byte spans. Whitespace and everything outside `'A'..='z'`
/// separates tokens; an optional terminator ends the scan early.
pub use vectorizer::token::{is_skippable, token_views, tokenize, tokenize_batch, tokenize_into, TokenSpan, Tokenized};

/// Term Frequency
/// Count / token count for every term of one document, plus the lowest and
/// highest weighted term.
pub use vectorizer::term::{
    term_frequency, term_frequency_batch, term_frequency_from_views, term_frequency_with_views, TermFrequency,
};

/// Corpus statistics
/// Document frequencies and IDF scores (`ln(N / (1 + df))`) of one batch.
pub use vectorizer::corpus::{inverse_document_frequency, CorpusStats};

/// TF IDF Calculation Engine Trait
/// Defines the IDF and TF-IDF formulas. `DefaultTFIDFEngine` is the textbook
/// form without smoothing or clamping.
pub use vectorizer::tfidf::{weight_terms, weight_terms_with, DefaultTFIDFEngine, TFIDFEngine};

/// Cosine similarity with additive epsilon smoothing
pub use vectorizer::compare::{cosine_similarity, DEFAULT_EPSILON};

/// Query matching
/// - `match_query`: best document index, `None` when nothing scores above zero
/// - `weigh_query`: TF-IDF vector of a query under an existing IDF
pub use vectorizer::evaluate::query::{match_query, weigh_query};

/// Search Hits and Hit Entry structures
/// - `Hits`: scores for every document, sortable by score
/// - `HitEntry`: a single document index, score and token count
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

pub use config::RankingConfig;
pub use error::{RankingError, Result};
