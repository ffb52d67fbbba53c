// src/noise/row.rs

use rand::Rng;

use crate::noise::{
    config::NoiseConfig,
    date::{format_date, parse_date},
    mutators::{fires, mutate_generic, mutate_name},
};

pub const GIVEN_NAME: &str = "GivenName";
pub const SURNAME: &str = "Surname";

/// Encoding + uid, addressed by position.
pub const TRAILING_COLUMNS: usize = 2;

/// Which mutator a content column receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Date,
    Generic,
}

/// Name columns match exactly; date columns by a case-insensitive
/// `birth`/`date` substring.
pub fn classify(column: &str) -> FieldRole {
    if column == GIVEN_NAME || column == SURNAME {
        return FieldRole::Name;
    }
    let lower = column.to_lowercase();
    if lower.contains("birth") || lower.contains("date") {
        FieldRole::Date
    } else {
        FieldRole::Generic
    }
}

/// Column roles for one file's header, computed once and reused for every row.
#[derive(Debug, Clone)]
pub struct RowPlan {
    roles: Vec<FieldRole>,
    given_name: Option<usize>,
    surname: Option<usize>,
}

impl RowPlan {
    pub fn new(headers: &[String]) -> Self {
        let content = &headers[..headers.len().saturating_sub(TRAILING_COLUMNS)];
        let position = |name: &str| content.iter().position(|h| h == name);
        Self {
            roles: content.iter().map(|h| classify(h)).collect(),
            given_name: position(GIVEN_NAME),
            surname: position(SURNAME),
        }
    }

    pub fn roles(&self) -> &[FieldRole] {
        &self.roles
    }

    /// Produce a corrupted copy of `row`. Columns past the content range
    /// (encoding, uid) are copied verbatim.
    pub fn mutate_row<R: Rng + ?Sized>(
        &self,
        row: &[String],
        rng: &mut R,
        config: &NoiseConfig,
    ) -> Vec<String> {
        let mut mutated = row.to_vec();

        for (idx, role) in self.roles.iter().enumerate() {
            let value = row.get(idx).map(String::as_str).unwrap_or("");
            let next = match role {
                FieldRole::Name => mutate_name(value, rng, config),
                FieldRole::Date => match parse_date(value) {
                    Some(date) => format_date(date, rng, config),
                    None if fires(rng, config.missing_prob) => String::new(),
                    None => value.to_string(),
                },
                FieldRole::Generic => mutate_generic(value, rng, config),
            };
            if let Some(slot) = mutated.get_mut(idx) {
                *slot = next;
            }
        }

        // drawn for every row so the draw sequence doesn't depend on the header
        if fires(rng, config.swap_name_prob) {
            if let (Some(g), Some(s)) = (self.given_name, self.surname) {
                if g < mutated.len() && s < mutated.len() {
                    mutated.swap(g, s);
                }
            }
        }
        mutated
    }
}
