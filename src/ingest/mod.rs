//! Batch scanning of tabular statement data.
//!
//! Deterministic plumbing around the detector: read rows, annotate each with
//! its detection outcome, accumulate summary counters. All matching
//! semantics live in [`crate::tactics`].

pub mod tabular;

use crate::ScanStats;
use crate::config::Config;
use crate::error::Result;
use crate::tactics::TacticDetector;
use crate::tactics::types::DetectionResult;
use std::path::Path;

/// Raw rows lifted from one input file, before detection.
#[derive(Debug, Clone)]
pub struct StatementBatch {
    pub headers: Vec<String>,
    /// Index of the statement column within `headers`.
    pub statement_idx: usize,
    pub rows: Vec<Vec<String>>,
}

/// One input row plus its detection outcome.
#[derive(Debug, Clone)]
pub struct AnnotatedRecord {
    pub fields: Vec<String>,
    pub result: DetectionResult,
}

/// Full result of scanning one file.
#[derive(Debug)]
pub struct ScanOutcome {
    pub headers: Vec<String>,
    pub statement_idx: usize,
    pub records: Vec<AnnotatedRecord>,
    pub stats: ScanStats,
}

/// Read `path` and run every statement through the detector.
pub fn scan_file(path: &Path, config: &Config) -> Result<ScanOutcome> {
    let batch = tabular::read_statements(path, config)?;
    tracing::debug!("loaded {} rows from {}", batch.rows.len(), path.display());
    Ok(scan_batch(batch))
}

/// Annotate a batch. A statement cell missing from a short row is an absent
/// value, which the detector maps to the all-false result.
pub fn scan_batch(batch: StatementBatch) -> ScanOutcome {
    let detector = TacticDetector::new();
    let mut stats = ScanStats::for_categories(detector.categories());
    let mut records = Vec::with_capacity(batch.rows.len());
    for row in batch.rows {
        let statement = row.get(batch.statement_idx).map(String::as_str);
        let result = detector.detect(statement);
        stats.record(&result);
        records.push(AnnotatedRecord {
            fields: row,
            result,
        });
    }
    ScanOutcome {
        headers: batch.headers,
        statement_idx: batch.statement_idx,
        records,
        stats,
    }
}
