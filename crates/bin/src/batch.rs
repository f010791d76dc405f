//! CSV batch estimation.
//!
//! Each input row carries the six attribute columns. Rows that fail to parse
//! or predict are reported and skipped; the rest are estimated together.

use resale::Pipeline;
use resale::encoding::{AttributeRecord, AttributeSet};
use resale::output::PredictionRecord;
use std::io::Read;

/// A row that could not be estimated.
#[derive(Debug)]
pub(crate) struct RowFailure {
    /// 1-based data row number (header excluded)
    pub(crate) row: usize,
    pub(crate) reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub(crate) struct BatchOutcome {
    pub(crate) records: Vec<PredictionRecord>,
    pub(crate) failures: Vec<RowFailure>,
}

impl BatchOutcome {
    pub(crate) fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Parse attribute rows from CSV.
pub(crate) fn read_rows<R: Read>(reader: R) -> (Vec<(usize, AttributeSet)>, Vec<RowFailure>) {
    let mut rows = Vec::new();
    let mut failures = Vec::new();

    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    for (index, result) in csv_reader.deserialize::<AttributeRecord>().enumerate() {
        let row = index + 1;
        let parsed = result
            .map_err(|e| e.to_string())
            .and_then(|record| AttributeSet::try_from(&record).map_err(|e| e.to_string()));
        match parsed {
            Ok(attrs) => rows.push((row, attrs)),
            Err(reason) => failures.push(RowFailure { row, reason }),
        }
    }

    (rows, failures)
}

/// Estimate every parsable row.
///
/// Estimates are computed in one batched model call; if that fails, rows are
/// retried one at a time so a single bad row only fails itself.
pub(crate) fn run_batch<R: Read>(pipeline: &Pipeline, reader: R) -> BatchOutcome {
    let (rows, mut failures) = read_rows(reader);
    let attrs: Vec<AttributeSet> = rows.iter().map(|(_, attrs)| *attrs).collect();
    let reference_year = pipeline.reference_year();

    let records = match pipeline.estimate_batch(&attrs) {
        Ok(estimates) => attrs
            .iter()
            .zip(&estimates)
            .map(|(attrs, estimate)| PredictionRecord::new(attrs, reference_year, estimate))
            .collect(),
        Err(e) => {
            log::warn!("Batch prediction failed ({e}); retrying row by row");
            let mut records = Vec::with_capacity(rows.len());
            for (row, attrs) in &rows {
                match pipeline.record(attrs) {
                    Ok(record) => records.push(record),
                    Err(e) => failures.push(RowFailure {
                        row: *row,
                        reason: e.to_string(),
                    }),
                }
            }
            records
        }
    };

    failures.sort_by_key(|f| f.row);
    BatchOutcome { records, failures }
}
