// src/noise/mod.rs
pub mod config;
pub mod date;
pub mod mutators;
pub mod row;

pub use config::NoiseConfig;
pub use date::{format_date, parse_date};
pub use mutators::{
    add_suffix, add_whitespace, introduce_typo, mutate_generic, mutate_name, random_case,
    swap_two_characters,
};
pub use row::{classify, FieldRole, RowPlan};
