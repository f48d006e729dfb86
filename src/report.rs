//! Human-readable rendering of scan outcomes.

use crate::ScanStats;
use crate::ingest::ScanOutcome;
use prettytable::{Table, row};

/// Print one block per statement that tripped at least one category.
pub fn print_hits(outcome: &ScanOutcome) {
    for (idx, record) in outcome.records.iter().enumerate() {
        if !record.result.any_flagged() {
            continue;
        }
        let statement = record
            .fields
            .get(outcome.statement_idx)
            .map(String::as_str)
            .unwrap_or("");
        let flags = record
            .result
            .flags
            .iter()
            .map(|f| format!("{}={}", f.category, u8::from(f.matched)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Row {}: {}", idx + 1, statement);
        println!("  {flags}");
        println!("  Matched terms: {}", record.result.matched_terms.join(", "));
        println!();
    }
}

/// Summary counters as a printable table.
pub fn summary_table(stats: &ScanStats) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Total statements", stats.total_statements]);
    table.add_row(row!["Statements with any tactic", stats.flagged_statements]);
    for count in &stats.category_hits {
        table.add_row(row![count.category, count.statements]);
    }
    table
}
