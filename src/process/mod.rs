// src/process/mod.rs
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info, instrument, warn};

pub mod discover;
pub mod report;
pub mod table;

pub use discover::{discover_encoded_files, ENCODED_PATTERNS};
pub use table::{read_tsv, write_tsv, Table};

use crate::{
    config::RunConfig,
    error::NoiseError,
    noise::{NoiseConfig, RowPlan},
    swap::{swap_column_at, SwapStats},
};

/// What happened to one matched input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Noisy copy written to `path`.
    Written {
        path: PathBuf,
        rows: usize,
        swap: SwapStats,
    },
    /// No header; nothing written, `path` is the untouched source.
    PassedThrough { path: PathBuf },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. } | Self::PassedThrough { path } => path,
        }
    }
}

/// Mutate every row in order, then run one encoding swap pass over the result.
/// `table` itself is left as it was.
pub fn corrupt_table<R: Rng + ?Sized>(
    table: &Table,
    rng: &mut R,
    config: &NoiseConfig,
    swap_prob: f64,
) -> (Table, SwapStats) {
    let plan = RowPlan::new(&table.headers);
    let rows = table
        .rows
        .iter()
        .map(|row| plan.mutate_row(row, rng, config))
        .collect();
    let noisy = Table::new(table.headers.clone(), rows);

    match noisy.encoding_index() {
        Some(enc) => swap_column_at(noisy, enc, swap_prob, rng),
        None => (noisy, SwapStats::default()),
    }
}

/// Read `path`, corrupt it and write `<output_dir>/<stem>.tsv`.
#[instrument(level = "info", skip(path, output_dir, rng, config), fields(file = %path.display()))]
pub fn process_encoded_file<R: Rng + ?Sized>(
    path: &Path,
    output_dir: &Path,
    rng: &mut R,
    config: &NoiseConfig,
    swap_prob: f64,
) -> Result<FileOutcome> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let start = Instant::now();
    let table = read_tsv(path)?;
    if table.headers.is_empty() {
        warn!("no header row; passing file through unchanged");
        return Ok(FileOutcome::PassedThrough {
            path: path.to_path_buf(),
        });
    }

    let (noisy, swap) = corrupt_table(&table, rng, config, swap_prob);

    let stem = path
        .file_stem()
        .with_context(|| format!("no file stem in {}", path.display()))?;
    let mut out_name = stem.to_os_string();
    out_name.push(".tsv");
    let out_path = output_dir.join(out_name);
    write_tsv(&out_path, &noisy)?;

    debug!(
        rows = noisy.num_rows(),
        pairs = swap.pairs,
        swapped = swap.swapped,
        elapsed = ?start.elapsed(),
        "wrote noisy copy"
    );
    Ok(FileOutcome::Written {
        path: out_path,
        rows: noisy.num_rows(),
        swap,
    })
}

/// Validate the input directory and list the files a run will touch.
pub fn discover_inputs(cfg: &RunConfig) -> Result<Vec<PathBuf>> {
    if !cfg.input_dir.exists() {
        return Err(NoiseError::InputDirMissing(cfg.input_dir.clone()).into());
    }
    let files = discover_encoded_files(&cfg.input_dir)?;
    if files.is_empty() {
        return Err(NoiseError::NoEncodedFiles(cfg.input_dir.clone()).into());
    }
    Ok(files)
}

/// Process `files` in order with one generator seeded from `cfg.seed`.
/// `on_file` is called after each file, so earlier outputs are reported even
/// if a later file fails.
pub fn process_all<F>(cfg: &RunConfig, files: &[PathBuf], mut on_file: F) -> Result<Vec<FileOutcome>>
where
    F: FnMut(&Path, &FileOutcome),
{
    let config = cfg.noise();
    for (name, p) in config.probabilities() {
        debug!(effect = name, probability = p, "noise config");
    }
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let outcome = process_encoded_file(path, &cfg.output_dir, &mut rng, &config, cfg.swap_prob)
            .with_context(|| format!("processing {}", path.display()))?;
        on_file(path, &outcome);
        outcomes.push(outcome);
    }
    info!(files = outcomes.len(), "run complete");
    Ok(outcomes)
}

/// [`discover_inputs`] followed by [`process_all`].
pub fn run<F>(cfg: &RunConfig, on_file: F) -> Result<Vec<FileOutcome>>
where
    F: FnMut(&Path, &FileOutcome),
{
    let files = discover_inputs(cfg)?;
    process_all(cfg, &files, on_file)
}
