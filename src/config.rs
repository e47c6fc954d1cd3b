use serde::{Deserialize, Serialize};

use crate::vectorizer::compare::DEFAULT_EPSILON;

/// Knobs shared by corpus loading and query matching
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Tokenization stops at the first occurrence of this text.
    /// Empty means no terminator.
    pub terminator: String,
    /// Added to the cosine similarity denominator
    pub epsilon: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            terminator: String::new(),
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl RankingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}
