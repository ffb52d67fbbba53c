// src/noise/mutators.rs
//
// Character-level corruption stages. Every function draws from the caller's
// generator, so the number and order of draws is part of the output contract.

use rand::{seq::index, Rng};

use crate::noise::config::NoiseConfig;

const SUFFIXES: [&str; 5] = [" Jr", " Sr", " II", " III", "-Smith"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypoOp {
    Delete,
    Insert,
    Swap,
    Replace,
}

const TYPO_OPS: [TypoOp; 4] = [TypoOp::Delete, TypoOp::Insert, TypoOp::Swap, TypoOp::Replace];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseStyle {
    Lower,
    Upper,
    Title,
    Capitalize,
}

const CASE_STYLES: [CaseStyle; 4] = [
    CaseStyle::Lower,
    CaseStyle::Upper,
    CaseStyle::Title,
    CaseStyle::Capitalize,
];

/// True with probability `prob`: one uniform draw in `[0, 1)`.
pub fn fires<R: Rng + ?Sized>(rng: &mut R, prob: f64) -> bool {
    rng.gen::<f64>() < prob
}

fn random_lowercase<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'a' + rng.gen_range(0..26u8))
}

/// Delete, insert, swap-with-next or replace a single character.
pub fn introduce_typo<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    let mut chars: Vec<char> = value.chars().collect();
    let idx = rng.gen_range(0..chars.len());
    let op = TYPO_OPS[rng.gen_range(0..TYPO_OPS.len())];

    match op {
        TypoOp::Delete => {
            chars.remove(idx);
        }
        TypoOp::Insert => {
            chars.insert(idx, random_lowercase(rng));
        }
        TypoOp::Swap if chars.len() > 1 => {
            // swapping the last character with itself leaves it in place
            let j = (idx + 1).min(chars.len() - 1);
            chars.swap(idx, j);
        }
        // single-character swaps fall back to a replacement
        TypoOp::Swap | TypoOp::Replace => {
            chars[idx] = random_lowercase(rng);
        }
    }
    chars.into_iter().collect()
}

/// Uppercase a cased letter when the previous character was uncased
/// (punctuation, digits, spaces or scripts without case), lowercase it otherwise.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_cased = false;
    for c in value.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Lowercase, uppercase, title-case or capitalize-first, chosen uniformly.
pub fn random_case<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    match CASE_STYLES[rng.gen_range(0..CASE_STYLES.len())] {
        CaseStyle::Lower => value.to_lowercase(),
        CaseStyle::Upper => value.to_uppercase(),
        CaseStyle::Title => title_case(value),
        CaseStyle::Capitalize => capitalize(value),
    }
}

/// Pad with 0–2 leading and 0–2 trailing spaces.
pub fn add_whitespace<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    let prefix = rng.gen_range(0..=2usize);
    let suffix = rng.gen_range(0..=2usize);
    format!("{}{}{}", " ".repeat(prefix), value, " ".repeat(suffix))
}

pub fn add_suffix<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
    format!("{value}{suffix}")
}

/// Exchange two distinct, uniformly sampled character positions.
pub fn swap_two_characters<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if chars.len() < 2 {
        return value.to_string();
    }
    let picked = index::sample(rng, chars.len(), 2);
    let (i, j) = (picked.index(0), picked.index(1));
    if i == j {
        return value.to_string();
    }
    chars.swap(i, j);
    chars.into_iter().collect()
}

/// Shared stage sequence: missing → char swap → typo → case → whitespace
/// (→ suffix). Each stage sees the previous stage's output.
fn mutate_text<R: Rng + ?Sized>(
    value: &str,
    rng: &mut R,
    config: &NoiseConfig,
    with_suffix: bool,
) -> String {
    if fires(rng, config.missing_prob) {
        return String::new();
    }
    let mut value = value.to_string();
    if fires(rng, config.char_swap_prob) {
        value = swap_two_characters(&value, rng);
    }
    if fires(rng, config.typo_prob) {
        value = introduce_typo(&value, rng);
    }
    if fires(rng, config.case_prob) {
        value = random_case(&value, rng);
    }
    if fires(rng, config.whitespace_prob) {
        value = add_whitespace(&value, rng);
    }
    if with_suffix && fires(rng, config.suffix_prob) {
        value = add_suffix(&value, rng);
    }
    value
}

pub fn mutate_name<R: Rng + ?Sized>(value: &str, rng: &mut R, config: &NoiseConfig) -> String {
    mutate_text(value, rng, config, true)
}

pub fn mutate_generic<R: Rng + ?Sized>(value: &str, rng: &mut R, config: &NoiseConfig) -> String {
    mutate_text(value, rng, config, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().collect();
        v.sort_unstable();
        v
    }

    /// A config with exactly one effect switched fully on.
    fn only(effect: impl FnOnce(&mut NoiseConfig)) -> NoiseConfig {
        let mut cfg = NoiseConfig::from_level(0.0);
        effect(&mut cfg);
        cfg
    }

    #[test]
    fn typo_changes_length_by_at_most_one() {
        let mut rng = test_rng();
        for word in ["a", "ab", "Ann", "Montgomery", "Zoë-Léa"] {
            for _ in 0..200 {
                let out = introduce_typo(word, &mut rng);
                let delta = out.chars().count() as i64 - word.chars().count() as i64;
                assert!(delta.abs() <= 1, "{word} -> {out}");
            }
        }
    }

    #[test]
    fn typo_is_noop_on_empty() {
        let mut rng = test_rng();
        assert_eq!(introduce_typo("", &mut rng), "");
    }

    #[test]
    fn swap_preserves_multiset() {
        let mut rng = test_rng();
        for word in ["ab", "Ann", "Montgomery", "Zoë-Léa"] {
            for _ in 0..100 {
                let out = swap_two_characters(word, &mut rng);
                assert_eq!(sorted_chars(&out), sorted_chars(word));
            }
        }
    }

    #[test]
    fn swap_is_noop_on_short_input() {
        let mut rng = test_rng();
        assert_eq!(swap_two_characters("", &mut rng), "");
        assert_eq!(swap_two_characters("x", &mut rng), "x");
    }

    #[test]
    fn swap_on_two_chars_always_reverses() {
        let mut rng = test_rng();
        for _ in 0..20 {
            assert_eq!(swap_two_characters("ab", &mut rng), "ba");
        }
    }

    #[test]
    fn random_case_variants() {
        let mut rng = test_rng();
        let allowed = ["mary-ann o'neil", "MARY-ANN O'NEIL", "Mary-Ann O'Neil", "Mary-ann o'neil"];
        for _ in 0..100 {
            let out = random_case("mARY-ann o'NEIL", &mut rng);
            assert!(allowed.contains(&out.as_str()), "unexpected {out}");
        }
        assert_eq!(random_case("", &mut rng), "");
    }

    #[test]
    fn title_and_capitalize_helpers() {
        assert_eq!(title_case("hello wORLD"), "Hello World");
        assert_eq!(title_case("o'neil 2nd"), "O'Neil 2Nd");
        // uncased letters break words like punctuation does
        assert_eq!(title_case("李abc"), "李Abc");
        assert_eq!(capitalize("hELLO World"), "Hello world");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn whitespace_pads_up_to_two_each_side() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let out = add_whitespace("Lee", &mut rng);
            assert_eq!(out.trim(), "Lee");
            let leading = out.len() - out.trim_start().len();
            let trailing = out.len() - out.trim_end().len();
            assert!(leading <= 2 && trailing <= 2);
        }
        assert_eq!(add_whitespace("", &mut rng), "");
    }

    #[test]
    fn suffix_from_fixed_list() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let out = add_suffix("Kim", &mut rng);
            let tail = out.strip_prefix("Kim").expect("prefix kept");
            assert!(SUFFIXES.contains(&tail));
        }
        assert_eq!(add_suffix("", &mut rng), "");
    }

    #[test]
    fn zero_noise_is_identity() {
        let mut rng = test_rng();
        let cfg = NoiseConfig::from_level(0.0);
        assert_eq!(mutate_name("Ann", &mut rng, &cfg), "Ann");
        assert_eq!(mutate_generic("12 Main St", &mut rng, &cfg), "12 Main St");
    }

    #[test]
    fn missing_short_circuits() {
        let mut rng = test_rng();
        let cfg = only(|c| {
            c.missing_prob = 1.0;
            c.suffix_prob = 1.0;
            c.whitespace_prob = 1.0;
        });
        for _ in 0..20 {
            assert_eq!(mutate_name("Ann", &mut rng, &cfg), "");
        }
    }

    #[test]
    fn generic_never_gets_suffix() {
        let mut rng = test_rng();
        let cfg = only(|c| c.suffix_prob = 1.0);
        for _ in 0..20 {
            assert_eq!(mutate_generic("Seattle", &mut rng, &cfg), "Seattle");
            let named = mutate_name("Lee", &mut rng, &cfg);
            assert!(named.starts_with("Lee") && named.len() > 3);
        }
    }

    #[test]
    fn stages_match_manual_sequence() {
        let cfg = NoiseConfig::from_level(3.0);
        let mut a = test_rng();
        let mut b = test_rng();
        for word in ["Ann", "Bob", "Christopher", "Lee"] {
            let out = mutate_name(word, &mut a, &cfg);

            let expected = if fires(&mut b, cfg.missing_prob) {
                String::new()
            } else {
                let mut v = word.to_string();
                if fires(&mut b, cfg.char_swap_prob) {
                    v = swap_two_characters(&v, &mut b);
                }
                if fires(&mut b, cfg.typo_prob) {
                    v = introduce_typo(&v, &mut b);
                }
                if fires(&mut b, cfg.case_prob) {
                    v = random_case(&v, &mut b);
                }
                if fires(&mut b, cfg.whitespace_prob) {
                    v = add_whitespace(&v, &mut b);
                }
                if fires(&mut b, cfg.suffix_prob) {
                    v = add_suffix(&v, &mut b);
                }
                v
            };
            assert_eq!(out, expected);
        }
    }
}
