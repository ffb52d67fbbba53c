// src/process/table.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::{fs::File, io::Read, path::Path};
use tracing::warn;

/// One delimited file held in memory: the header as the file declares it,
/// plus every data row padded or cut to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Second-to-last column, by position.
    pub fn encoding_index(&self) -> Option<usize> {
        self.headers.len().checked_sub(2)
    }

    /// Last column, by position.
    pub fn uid_index(&self) -> Option<usize> {
        self.headers.len().checked_sub(1)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Parse a tab-delimited stream with a header row.
pub fn read_tsv_from<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true) // ragged rows are fixed up below rather than rejected
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading TSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    let mut ragged = 0usize;
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("TSV parse error at record {}", idx))?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() != width {
            ragged += 1;
            row.resize(width, String::new());
        }
        rows.push(row);
    }
    if ragged > 0 && width > 0 {
        warn!(ragged, width, "rows did not match header width; padded/truncated");
    }

    Ok(Table { headers, rows })
}

pub fn read_tsv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_tsv_from(file).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write header + rows tab-delimited with CRLF line endings.
pub fn write_tsv<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn reads_header_and_rows() -> Result<()> {
        let data = "GivenName\tSurname\tenc\tuid\nAnn\tLee\tE1\tU1\nBob\tKim\tE2\tU2\n";
        let table = read_tsv_from(Cursor::new(data))?;
        assert_eq!(table.headers, vec!["GivenName", "Surname", "enc", "uid"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows[1], vec!["Bob", "Kim", "E2", "U2"]);
        assert_eq!(table.encoding_index(), Some(2));
        assert_eq!(table.uid_index(), Some(3));
        Ok(())
    }

    #[test]
    fn ragged_rows_are_normalised() -> Result<()> {
        let data = "a\tb\tc\n1\t2\n1\t2\t3\t4\n";
        let table = read_tsv_from(Cursor::new(data))?;
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_header() -> Result<()> {
        let table = read_tsv_from(Cursor::new(""))?;
        assert!(table.headers.is_empty());
        assert_eq!(table.encoding_index(), None);
        Ok(())
    }

    #[test]
    fn write_then_read_keeps_awkward_values() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("out.tsv");
        let table = Table::new(
            vec!["Address".into(), "enc".into(), "uid".into()],
            vec![
                vec!["12 \"Main\" St".into(), "a\tb".into(), "U1".into()],
                vec!["".into(), "  padded ".into(), "U2".into()],
            ],
        );
        write_tsv(&path, &table)?;
        let raw = std::fs::read_to_string(&path)?;
        assert!(raw.starts_with("Address\tenc\tuid\r\n"));
        assert_eq!(read_tsv(&path)?, table);
        Ok(())
    }
}
