// src/noise/date.rs

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::noise::{config::NoiseConfig, mutators::fires};

/// Accepted input layouts, tried in this order.
pub const INPUT_FORMATS: [&str; 3] = ["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Layouts a corrupted date may be rendered in.
pub const OUTPUT_FORMATS: [&str; 5] = ["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d", "%m-%d-%Y", "%d %b %Y"];

/// Free-text placeholders that replace a date outright.
pub const TEXT_TOKENS: [&str; 4] = ["unknown", "n/a", "see notes", "??"];

/// Chance of turning `/` into `-` once a format tweak fires.
const SEPARATOR_SWAP_PROB: f64 = 0.3;

static LEADING_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0(\d)").expect("leading-zero pattern is valid"));

// chrono's %Y takes any digit count plus a sign and skips leading spaces,
// so each layout's exact shape is checked first.
static SLASH_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("slash date pattern is valid"));
static ISO_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("iso date pattern is valid"));

fn input_shape(fmt: &str) -> &'static Regex {
    if fmt.contains('/') {
        &SLASH_SHAPE
    } else {
        &ISO_SHAPE
    }
}

/// First successful parse among [`INPUT_FORMATS`], or `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    INPUT_FORMATS.iter().find_map(|fmt| {
        if !input_shape(fmt).is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, fmt).ok()
    })
}

/// Re-render a parsed date with optional placeholder, shift and format noise.
pub fn format_date<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R, config: &NoiseConfig) -> String {
    if fires(rng, config.date_text_token_prob) {
        return TEXT_TOKENS[rng.gen_range(0..TEXT_TOKENS.len())].to_string();
    }

    let mut date = date;
    if fires(rng, config.date_shift_prob) {
        let max = config.max_date_shift_days;
        let delta = rng.gen_range(-max..=max);
        // out-of-range shifts keep the original date
        date = Duration::try_days(delta)
            .and_then(|shift| date.checked_add_signed(shift))
            .unwrap_or(date);
    }

    let fmt = OUTPUT_FORMATS[rng.gen_range(0..OUTPUT_FORMATS.len())];
    let mut formatted = date.format(fmt).to_string();

    if fires(rng, config.date_format_prob) {
        formatted = LEADING_ZERO.replace_all(&formatted, "${1}").into_owned();
        if fires(rng, SEPARATOR_SWAP_PROB) {
            formatted = formatted.replace('/', "-");
        }
    }
    formatted
}
