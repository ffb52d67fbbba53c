use anyhow::Result;
use clap::Parser;
use encnoise::{
    config::{DEFAULT_NOISE_LEVEL, DEFAULT_SEED, DEFAULT_SWAP_PROB},
    process, RunConfig,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Add noise to encoded TSVs (ignoring encoding+uid) and swap encodings between records.
#[derive(Parser, Debug)]
#[command(name = "encnoise", version, about)]
struct Cli {
    /// Directory containing *_<scheme>_encoded.tsv files
    #[arg(long)]
    input_dir: PathBuf,

    /// Directory to write noisy+swapped copies
    #[arg(long)]
    output_dir: PathBuf,

    /// Scales noise aggressiveness
    #[arg(long, default_value_t = DEFAULT_NOISE_LEVEL)]
    noise_level: f64,

    /// Probability per random pair of rows to swap encodings
    #[arg(long, default_value_t = DEFAULT_SWAP_PROB)]
    swap_prob: f64,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            noise_level: cli.noise_level,
            swap_prob: cli.swap_prob,
            seed: cli.seed,
        }
    }
}

/// Relative to the working directory when possible.
fn pretty(path: &Path) -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let cfg = RunConfig::from(Cli::parse());
    info!(
        noise_level = cfg.noise_level,
        swap_prob = cfg.swap_prob,
        seed = cfg.seed,
        "startup"
    );

    // ─── 3) discover inputs (fatal if none) ──────────────────────────
    let files = process::discover_inputs(&cfg)?;
    println!(
        "Adding noise (skip last two cols) and swapping encodings for {} files -> {}",
        files.len(),
        cfg.output_dir.display()
    );

    // ─── 4) corrupt each file in order ───────────────────────────────
    process::process_all(&cfg, &files, |src, outcome| {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| src.display().to_string());
        println!("- {} -> {}", name, pretty(outcome.path()).display());
    })?;

    Ok(())
}
