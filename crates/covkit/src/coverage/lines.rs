//! Line and branch hit data
//!
//! Line arrays are indexed from line 1 at position 0. `None` marks a line
//! the engine does not consider executable.

use crate::result::{CovkitError, CovkitResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-line hit counts for a single source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineHits(Vec<Option<u64>>);

impl LineHits {
    /// Wrap raw per-line hits
    #[must_use]
    pub fn new(hits: Vec<Option<u64>>) -> Self {
        Self(hits)
    }

    /// Number of lines in the file
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the file has no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw hits
    #[must_use]
    pub fn as_slice(&self) -> &[Option<u64>] {
        &self.0
    }

    /// Lines with a hit count (executable lines)
    #[must_use]
    pub fn relevant(&self) -> usize {
        self.0.iter().filter(|h| h.is_some()).count()
    }

    /// Lines hit at least once
    #[must_use]
    pub fn covered(&self) -> usize {
        self.0.iter().filter(|h| matches!(h, Some(n) if *n > 0)).count()
    }

    /// Sum of all hit counts
    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.0.iter().flatten().fold(0, |acc, n| acc.saturating_add(*n))
    }

    /// Combine two measurements of the same file line by line
    pub fn combine(&self, other: &Self, file: &str) -> CovkitResult<Self> {
        if self.len() != other.len() {
            return Err(CovkitError::LineCountMismatch {
                file: file.to_string(),
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| combine_line(*a, *b))
                .collect(),
        ))
    }
}

impl From<Vec<Option<u64>>> for LineHits {
    fn from(hits: Vec<Option<u64>>) -> Self {
        Self(hits)
    }
}

/// Combine one line's hits from two runs.
///
/// A zero sum stays non-executable if either run saw the line as such.
#[must_use]
pub const fn combine_line(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    let sum = match (a, b) {
        (Some(x), Some(y)) => x.saturating_add(y),
        (Some(x), None) | (None, Some(x)) => x,
        (None, None) => 0,
    };
    if sum == 0 && (a.is_none() || b.is_none()) {
        None
    } else {
        Some(sum)
    }
}

/// Branch hits: condition key to branch key to count
pub type BranchHits = BTreeMap<String, BTreeMap<String, u64>>;

/// Union of two branch maps with counts summed
#[must_use]
pub fn combine_branches(a: &BranchHits, b: &BranchHits) -> BranchHits {
    let mut merged = a.clone();
    for (condition, branches) in b {
        let target = merged.entry(condition.clone()).or_default();
        for (branch, count) in branches {
            let slot = target.entry(branch.clone()).or_insert(0);
            *slot = slot.saturating_add(*count);
        }
    }
    merged
}
