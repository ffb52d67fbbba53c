// src/process/discover.rs
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{NoiseError, Result};

/// One pattern per encoding scheme, in processing order.
pub const ENCODED_PATTERNS: [&str; 4] = [
    "*_bf_encoded.tsv",
    "*_bfd_encoded.tsv",
    "*_tmh_encoded.tsv",
    "*_tsh_encoded.tsv",
];

/// Files directly under `input_dir` matching [`ENCODED_PATTERNS`], grouped by
/// pattern order and sorted within each group.
pub fn discover_encoded_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&input_dir.to_string_lossy());
    let mut files = Vec::new();

    for suffix in ENCODED_PATTERNS {
        let pattern = format!("{}/{}", base, suffix);
        let mut matched: Vec<PathBuf> = glob(&pattern)
            .map_err(|source| NoiseError::Pattern {
                pattern: pattern.clone(),
                source,
            })?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        matched.sort();
        debug!(pattern = suffix, count = matched.len(), "matched encoded files");
        files.extend(matched);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "a\tenc\tuid\n").expect("write fixture");
    }

    #[test]
    fn groups_by_pattern_then_sorts() {
        let tmp = tempdir().expect("tempdir");
        for name in [
            "z_tsh_encoded.tsv",
            "b_bf_encoded.tsv",
            "a_tmh_encoded.tsv",
            "a_bf_encoded.tsv",
            "c_bfd_encoded.tsv",
            "notes.tsv",
            "a_bf_encoded.csv",
        ] {
            touch(tmp.path(), name);
        }
        fs::create_dir(tmp.path().join("dir_bf_encoded.tsv")).expect("mkdir");

        let names: Vec<String> = discover_encoded_files(tmp.path())
            .expect("discover")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "a_bf_encoded.tsv",
                "b_bf_encoded.tsv",
                "c_bfd_encoded.tsv",
                "a_tmh_encoded.tsv",
                "z_tsh_encoded.tsv",
            ]
        );
    }

    #[test]
    fn directory_with_glob_characters() {
        let tmp = tempdir().expect("tempdir");
        let odd = tmp.path().join("run[1]");
        fs::create_dir(&odd).expect("mkdir");
        touch(&odd, "x_bf_encoded.tsv");
        assert_eq!(discover_encoded_files(&odd).expect("discover").len(), 1);
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let tmp = tempdir().expect("tempdir");
        assert!(discover_encoded_files(tmp.path()).expect("discover").is_empty());
    }
}
