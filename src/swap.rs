// src/swap.rs
//
// Simulated mislinkage: random disjoint row pairs exchange one column.

use rand::{seq::SliceRandom, Rng};
use std::mem;

use crate::{noise::mutators::fires, process::table::Table};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapStats {
    /// Pairs that got a swap draw.
    pub pairs: usize,
    /// Pairs whose values were exchanged.
    pub swapped: usize,
}

/// Shuffle the row indices, walk them two at a time (an odd leftover is
/// dropped) and, with probability `swap_prob` per pair, exchange the two
/// rows' values in column `col`. No other column is touched.
///
/// Draws nothing when the table is empty, the column is out of range or
/// `swap_prob <= 0`.
pub fn swap_column_at<R: Rng + ?Sized>(
    mut table: Table,
    col: usize,
    swap_prob: f64,
    rng: &mut R,
) -> (Table, SwapStats) {
    let mut stats = SwapStats::default();
    if table.rows.is_empty() || col >= table.headers.len() || swap_prob <= 0.0 {
        return (table, stats);
    }

    let mut indices: Vec<usize> = (0..table.rows.len()).collect();
    indices.shuffle(rng);

    for pair in indices.chunks_exact(2) {
        stats.pairs += 1;
        if !fires(rng, swap_prob) {
            continue;
        }
        let (i, j) = (pair[0], pair[1]);
        let rows = &mut table.rows;
        if rows[i].len() > col && rows[j].len() > col {
            let held = mem::take(&mut rows[i][col]);
            rows[i][col] = mem::replace(&mut rows[j][col], held);
            stats.swapped += 1;
        }
    }
    (table, stats)
}

/// [`swap_column_at`] addressed by header name; a missing column is a no-op.
pub fn swap_column<R: Rng + ?Sized>(
    table: Table,
    column: &str,
    swap_prob: f64,
    rng: &mut R,
) -> (Table, SwapStats) {
    match table.column_index(column) {
        Some(col) => swap_column_at(table, col, swap_prob, rng),
        None => (table, SwapStats::default()),
    }
}
