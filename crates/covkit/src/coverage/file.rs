//! Per-file coverage in either result-set shape

use super::lines::{combine_branches, BranchHits, LineHits};
use crate::result::CovkitResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Line and branch data recorded for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedCoverage {
    /// Per-line hits
    pub lines: LineHits,
    /// Branch hits, when branch coverage was enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<BranchHits>,
    /// Any other per-file keys, carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Coverage of one source file.
///
/// Older engines write a bare hit array; newer ones nest it under `lines`
/// next to optional `branches`. Both shapes deserialize here and are written
/// back in the shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileCoverage {
    /// Bare line array
    Legacy(LineHits),
    /// `{"lines": [...], "branches": {...}}`
    Detailed(DetailedCoverage),
}

impl FileCoverage {
    /// Legacy coverage from raw hits
    #[must_use]
    pub fn lines(hits: Vec<Option<u64>>) -> Self {
        Self::Legacy(LineHits::new(hits))
    }

    /// Detailed coverage with branch data
    #[must_use]
    pub fn with_branches(hits: Vec<Option<u64>>, branches: BranchHits) -> Self {
        Self::Detailed(DetailedCoverage {
            lines: LineHits::new(hits),
            branches: Some(branches),
            extra: BTreeMap::new(),
        })
    }

    /// Line hits regardless of shape
    #[must_use]
    pub fn line_hits(&self) -> &LineHits {
        match self {
            Self::Legacy(lines) => lines,
            Self::Detailed(detailed) => &detailed.lines,
        }
    }

    /// Branch hits, if any were recorded
    #[must_use]
    pub fn branch_hits(&self) -> Option<&BranchHits> {
        match self {
            Self::Legacy(_) => None,
            Self::Detailed(detailed) => detailed.branches.as_ref(),
        }
    }

    /// Combine two measurements of `file`.
    ///
    /// The result is detailed as soon as either side is. Extra keys are
    /// unioned, with `self` winning where both sides carry the same key.
    pub fn combine(&self, other: &Self, file: &str) -> CovkitResult<Self> {
        let lines = self.line_hits().combine(other.line_hits(), file)?;

        if let (Self::Legacy(_), Self::Legacy(_)) = (self, other) {
            return Ok(Self::Legacy(lines));
        }

        let branches = match (self.branch_hits(), other.branch_hits()) {
            (Some(a), Some(b)) => Some(combine_branches(a, b)),
            (Some(a), None) | (None, Some(a)) => Some(a.clone()),
            (None, None) => None,
        };

        let mut extra = other.extra().cloned().unwrap_or_default();
        if let Some(own) = self.extra() {
            extra.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Ok(Self::Detailed(DetailedCoverage {
            lines,
            branches,
            extra,
        }))
    }

    fn extra(&self) -> Option<&BTreeMap<String, serde_json::Value>> {
        match self {
            Self::Legacy(_) => None,
            Self::Detailed(detailed) => Some(&detailed.extra),
        }
    }
}
