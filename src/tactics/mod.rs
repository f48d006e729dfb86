//! Tactic detection over a static category table.
//! Deterministic, dependency-free heuristics: lowercase the input, test
//! literal substring containment per term.

pub mod category;
pub mod types;

use category::TacticCategory;
use once_cell::sync::Lazy;
use types::{CategoryFlag, DetectionResult};

pub const URGENCY_MARKETING: &str = "urgency_marketing";
pub const EXCLUSIVE_MARKETING: &str = "exclusive_marketing";

static CATEGORIES: Lazy<Vec<TacticCategory>> = Lazy::new(category::builtin_categories);

/// Matches statements against the compiled-in tactic dictionaries.
///
/// No word-boundary checks: "vip" also fires inside a longer word, and
/// overlapping terms register independently ("limited time" also registers
/// "limited"). This mirrors the substring semantics the dictionaries were
/// written for.
pub struct TacticDetector {
    categories: Vec<TacticCategory>,
}

impl TacticDetector {
    pub fn new() -> Self {
        Self {
            categories: CATEGORIES.clone(),
        }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[TacticCategory] {
        &self.categories
    }

    /// Scan one statement. `None` (a missing value) yields the all-false
    /// result with no matched terms; it is not an error.
    pub fn detect(&self, text: Option<&str>) -> DetectionResult {
        let mut result = DetectionResult {
            flags: self
                .categories
                .iter()
                .map(|c| CategoryFlag {
                    category: c.name,
                    matched: false,
                })
                .collect(),
            matched_terms: Vec::new(),
        };
        let Some(text) = text else {
            return result;
        };
        let lowered = text.to_lowercase();
        for (flag, category) in result.flags.iter_mut().zip(&self.categories) {
            for term in category.terms() {
                if lowered.contains(term) {
                    flag.matched = true;
                    result.matched_terms.push((*term).to_string());
                }
            }
        }
        result
    }
}

impl Default for TacticDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_tables_are_sorted_and_unique() {
        for category in TacticDetector::new().categories() {
            for pair in category.terms().windows(2) {
                assert!(pair[0] < pair[1], "{} terms out of order", category.name);
            }
        }
    }

    #[test]
    fn category_declaration_order_is_stable() {
        let detector = TacticDetector::new();
        let names: Vec<_> = detector.categories().iter().map(|c| c.name).collect();
        assert_eq!(names, [URGENCY_MARKETING, EXCLUSIVE_MARKETING]);
    }
}
