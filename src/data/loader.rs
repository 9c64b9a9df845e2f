use std::fs::File;
use std::io::Read;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{ComparisonDataset, Sample};

/// Columns every input file must provide, matched by header name.
pub const REQUIRED_COLUMNS: [&str; 3] = ["x", "net", "target"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading CSV headers: {0}")]
    Header(#[source] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}, {column}: '{value}' is not a number")]
    NotANumber {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a comparison dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<ComparisonDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// CSV layout: header row with column names, then one sample per row.
/// `x`, `net` and `target` may appear in any order; other columns are
/// ignored. When a name repeats, the first column with that name wins.
/// A header-only input yields an empty dataset.
pub fn load_reader<R: Read>(input: R) -> Result<ComparisonDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(LoadError::Header)?;
    let mut indices = [0usize; 3];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or(LoadError::MissingColumn(column))?;
    }
    let [x_idx, net_idx, target_idx] = indices;

    let mut samples = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Row { row, source })?;

        samples.push(Sample {
            x: parse_field(&record, x_idx, row, "x")?,
            net: parse_field(&record, net_idx, row, "net")?,
            target: parse_field(&record, target_idx, row, "target")?,
        });
    }

    Ok(ComparisonDataset::from_samples(samples))
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    let value = record.get(idx).unwrap_or("");
    value.parse::<f64>().map_err(|source| LoadError::NotANumber {
        row,
        column,
        value: value.to_string(),
        source,
    })
}
