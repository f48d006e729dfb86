pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod tactics;

use tactics::category::TacticCategory;
use tactics::types::DetectionResult;

/// Summary counters for one scan run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanStats {
    pub total_statements: usize,
    pub flagged_statements: usize,
    /// Per-category hit counts, in category declaration order.
    pub category_hits: Vec<CategoryCount>,
}

/// Number of statements that tripped one category.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub statements: usize,
}

impl ScanStats {
    pub fn for_categories(categories: &[TacticCategory]) -> Self {
        Self {
            total_statements: 0,
            flagged_statements: 0,
            category_hits: categories
                .iter()
                .map(|c| CategoryCount {
                    category: c.name,
                    statements: 0,
                })
                .collect(),
        }
    }

    pub fn record(&mut self, result: &DetectionResult) {
        self.total_statements += 1;
        if result.any_flagged() {
            self.flagged_statements += 1;
        }
        for (count, flag) in self.category_hits.iter_mut().zip(&result.flags) {
            if flag.matched {
                count.statements += 1;
            }
        }
    }
}
