// src/process/report.rs
use anyhow::{bail, Result};
use serde::Serialize;

use crate::process::table::Table;

/// Change counts for one content column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnChanges {
    pub column: String,
    pub changed: usize,
    pub blanked: usize,
}

/// How far a noisy copy drifted from its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoiseReport {
    pub rows: usize,
    pub columns: Vec<ColumnChanges>,
    /// Rows whose encoding value differs from the source row.
    pub encodings_moved: usize,
    /// Rows whose uid differs; anything but 0 means the copy is broken.
    pub uids_changed: usize,
}

impl NoiseReport {
    pub fn changed_cells(&self) -> usize {
        self.columns.iter().map(|c| c.changed).sum()
    }
}

/// Compare a source table with its noisy copy, row by row.
pub fn compare_tables(original: &Table, noisy: &Table) -> Result<NoiseReport> {
    if original.headers != noisy.headers {
        bail!(
            "header mismatch: {:?} vs {:?}",
            original.headers,
            noisy.headers
        );
    }
    if original.num_rows() != noisy.num_rows() {
        bail!(
            "row count mismatch: {} vs {}",
            original.num_rows(),
            noisy.num_rows()
        );
    }
    let (Some(enc), Some(uid)) = (original.encoding_index(), original.uid_index()) else {
        bail!("need at least two columns (encoding, uid)");
    };

    let mut columns: Vec<ColumnChanges> = original.headers[..enc]
        .iter()
        .map(|name| ColumnChanges {
            column: name.clone(),
            ..Default::default()
        })
        .collect();
    let mut report = NoiseReport {
        rows: original.num_rows(),
        ..Default::default()
    };

    for (before, after) in original.rows.iter().zip(&noisy.rows) {
        for (idx, stats) in columns.iter_mut().enumerate() {
            let (b, a) = (cell(before, idx), cell(after, idx));
            if b != a {
                stats.changed += 1;
                if a.is_empty() {
                    stats.blanked += 1;
                }
            }
        }
        if cell(before, enc) != cell(after, enc) {
            report.encodings_moved += 1;
        }
        if cell(before, uid) != cell(after, uid) {
            report.uids_changed += 1;
        }
    }
    report.columns = columns;
    Ok(report)
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}
