//! CSV reading and writing for statement batches.

use super::{ScanOutcome, StatementBatch};
use crate::config::Config;
use crate::error::{PitchScanError, Result};
use crate::tactics::TacticDetector;
use std::fs::File;
use std::path::Path;

/// Read the input CSV. With no configured delimiter, try comma first; a
/// header row that collapses into a single `;`-bearing cell means the file
/// is semicolon-separated, so reread it that way.
pub fn read_statements(path: &Path, config: &Config) -> Result<StatementBatch> {
    let (headers, rows) = match configured_delimiter(config)? {
        Some(delimiter) => read_table(path, delimiter)?,
        None => {
            let (headers, rows) = read_table(path, b',')?;
            if headers.len() == 1 && headers[0].contains(';') {
                tracing::debug!(
                    "single ';'-bearing header in {}, rereading as semicolon-separated",
                    path.display()
                );
                read_table(path, b';')?
            } else {
                (headers, rows)
            }
        }
    };

    let statement_idx = headers
        .iter()
        .position(|h| h == &config.scan.statement_column)
        .ok_or_else(|| PitchScanError::Validation {
            message: format!(
                "'{}' column not found; available columns: {}",
                config.scan.statement_column,
                headers.join(", ")
            ),
        })?;

    Ok(StatementBatch {
        headers,
        statement_idx,
        rows,
    })
}

fn configured_delimiter(config: &Config) -> Result<Option<u8>> {
    match config.scan.delimiter.as_deref() {
        None => Ok(None),
        Some(d) if d.len() == 1 => Ok(Some(d.as_bytes()[0])),
        Some(d) => Err(PitchScanError::Config {
            message: format!("delimiter must be a single byte, got '{d}'"),
        }),
    }
}

fn read_table(path: &Path, delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

/// Write the annotated copy: original columns, then one `<label>_detected`
/// column per category (1/0) and the joined `matched_terms`.
pub fn write_annotated(path: &Path, outcome: &ScanOutcome) -> Result<()> {
    let detector = TacticDetector::new();

    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    let mut header = outcome.headers.clone();
    for category in detector.categories() {
        header.push(format!("{}_detected", category.label));
    }
    header.push("matched_terms".to_string());
    wtr.write_record(&header)?;

    for record in &outcome.records {
        let mut row = record.fields.clone();
        // Pad short rows so the appended columns stay aligned.
        if row.len() < outcome.headers.len() {
            row.resize(outcome.headers.len(), String::new());
        }
        for flag in &record.result.flags {
            row.push(if flag.matched { "1" } else { "0" }.to_string());
        }
        row.push(record.result.matched_terms.join(", "));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
