//! Types for tactic detection outputs.

use serde::Serialize;

/// Outcome for one category on one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFlag {
    pub category: &'static str,
    pub matched: bool,
}

/// Per-input output of the detector: one flag per category in declaration
/// order, plus every literal term that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub flags: Vec<CategoryFlag>,
    /// Categories contribute in declaration order; within a category, terms
    /// in their pinned order. A term repeats if declared by more than one
    /// category.
    pub matched_terms: Vec<String>,
}

impl DetectionResult {
    pub fn is_flagged(&self, category: &str) -> bool {
        self.flags
            .iter()
            .any(|f| f.category == category && f.matched)
    }

    pub fn any_flagged(&self) -> bool {
        self.flags.iter().any(|f| f.matched)
    }
}
