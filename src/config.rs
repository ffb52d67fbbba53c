// src/config.rs
use std::path::PathBuf;

use crate::noise::NoiseConfig;

pub const DEFAULT_NOISE_LEVEL: f64 = 1.0;
pub const DEFAULT_SWAP_PROB: f64 = 0.01;
pub const DEFAULT_SEED: u64 = 42;

/// Everything one corruption run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Scales every effect probability and the date-shift magnitude.
    pub noise_level: f64,
    /// Per-pair probability of exchanging encodings.
    pub swap_prob: f64,
    pub seed: u64,
}

impl RunConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            noise_level: DEFAULT_NOISE_LEVEL,
            swap_prob: DEFAULT_SWAP_PROB,
            seed: DEFAULT_SEED,
        }
    }

    pub fn noise(&self) -> NoiseConfig {
        NoiseConfig::from_level(self.noise_level)
    }
}
