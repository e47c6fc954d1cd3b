use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// One scored document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitEntry {
    /// index of the document in load order
    pub key: usize,
    pub score: f64,
    /// tokens in the document
    pub token_count: usize,
}

/// Structure to store search results
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score
    /// equal scores keep load order
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Sort results by ascending score
    pub fn sort_by_score_rev(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| a.score.total_cmp(&b.score));
        self
    }

    /// Keep the first `n` hits
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    /// First hit with the strictly largest positive score, in list order
    pub fn best(&self) -> Option<&HitEntry> {
        let mut best: Option<&HitEntry> = None;
        let mut best_score = 0.0;
        for hit in &self.list {
            if best_score < hit.score {
                best_score = hit.score;
                best = Some(hit);
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }
}

impl<'a> IntoIterator for &'a Hits {
    type Item = &'a HitEntry;
    type IntoIter = std::slice::Iter<'a, HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6} (len: {})", hit.key, hit.score, hit.token_count)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. doc {} score {:.6} len {}", rank + 1, hit.key, hit.score, hit.token_count)?;
        }
        Ok(())
    }
}
