// src/noise/config.rs

/// Upper bound for every effect probability.
pub const MAX_PROBABILITY: f64 = 0.95;

/// `max(0, min(prob, 0.95))`; NaN maps to 0.
pub fn clamp_prob(prob: f64) -> f64 {
    if prob.is_nan() {
        return 0.0;
    }
    prob.min(MAX_PROBABILITY).max(0.0)
}

/// Per-effect probabilities derived from a single noise level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    pub missing_prob: f64,
    pub typo_prob: f64,
    pub case_prob: f64,
    pub swap_name_prob: f64,
    pub char_swap_prob: f64,
    pub whitespace_prob: f64,
    pub suffix_prob: f64,
    /// Reported only; uid values are never mutated.
    pub uid_noise_prob: f64,
    pub date_shift_prob: f64,
    pub date_format_prob: f64,
    pub date_text_token_prob: f64,
    pub max_date_shift_days: i64,
}

impl NoiseConfig {
    /// Scale the fixed per-effect coefficients by `level`, clamping each one.
    pub fn from_level(level: f64) -> Self {
        Self {
            missing_prob: clamp_prob(0.03 * level),
            typo_prob: clamp_prob(0.15 * level),
            case_prob: clamp_prob(0.10 * level),
            swap_name_prob: clamp_prob(0.04 * level),
            char_swap_prob: clamp_prob(0.06 * level),
            whitespace_prob: clamp_prob(0.12 * level),
            suffix_prob: clamp_prob(0.05 * level),
            uid_noise_prob: clamp_prob(0.06 * level),
            date_shift_prob: clamp_prob(0.30 * level),
            date_format_prob: clamp_prob(0.45 * level),
            date_text_token_prob: clamp_prob(0.02 * level),
            // NaN casts to 0, so a bogus level still yields 1
            max_date_shift_days: ((12.0 * level).trunc() as i64).max(1),
        }
    }

    /// Named probabilities in a stable order, for logging and inspection.
    pub fn probabilities(&self) -> [(&'static str, f64); 11] {
        [
            ("missing_prob", self.missing_prob),
            ("typo_prob", self.typo_prob),
            ("case_prob", self.case_prob),
            ("swap_name_prob", self.swap_name_prob),
            ("char_swap_prob", self.char_swap_prob),
            ("whitespace_prob", self.whitespace_prob),
            ("suffix_prob", self.suffix_prob),
            ("uid_noise_prob", self.uid_noise_prob),
            ("date_shift_prob", self.date_shift_prob),
            ("date_format_prob", self.date_format_prob),
            ("date_text_token_prob", self.date_text_token_prob),
        ]
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::from_level(1.0)
    }
}
