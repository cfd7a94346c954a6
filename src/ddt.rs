//! Difference distribution table.
//!
//! `DDT[a][b] = |{x : S(x) ^ S(x ^ a) = b}|`. Every row sums to `N` whether or
//! not `S` is a bijection; for a bijection row 0 is `[N, 0, …, 0]`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::sbox::SBox;

/// How rows are counted. Both produce identical tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DdtMethod {
    /// For every `(a, b)` scan all `x`: `O(N^3)`.
    Naive,
    /// For every `a` scan `x` once and bucket by output difference: `O(N^2)`.
    #[default]
    Bucketed,
}

/// `N × N` counts indexed by `[input difference][output difference]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifferenceDistributionTable {
    rows: Vec<Vec<usize>>,
}

impl DifferenceDistributionTable {
    pub fn build(sbox: &SBox) -> Self {
        Self::build_with(sbox, DdtMethod::default())
    }

    pub fn build_with(sbox: &SBox, method: DdtMethod) -> Self {
        let n = sbox.size();
        debug!(size = n, ?method, "building difference distribution table");
        let row_fn = |a: usize| {
            let row = match method {
                DdtMethod::Naive => naive_row(sbox, a),
                DdtMethod::Bucketed => bucketed_row(sbox, a),
            };
            trace!(offset = a, ?row, "ddt row");
            row
        };

        #[cfg(feature = "parallel")]
        let rows = (0..n).into_par_iter().map(row_fn).collect();
        #[cfg(not(feature = "parallel"))]
        let rows = (0..n).map(row_fn).collect();

        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Counts for input difference `a`.
    pub fn row(&self, a: usize) -> &[usize] {
        &self.rows[a]
    }

    pub fn get(&self, a: usize, b: usize) -> usize {
        self.rows[a][b]
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }
}

fn naive_row(sbox: &SBox, a: usize) -> Vec<usize> {
    let n = sbox.size();
    (0..n)
        .map(|b| {
            (0..n)
                .filter(|&x| sbox.apply(x) ^ sbox.apply(x ^ a) == b)
                .count()
        })
        .collect()
}

fn bucketed_row(sbox: &SBox, a: usize) -> Vec<usize> {
    let n = sbox.size();
    let mut row = vec![0usize; n];
    for x in 0..n {
        row[sbox.apply(x) ^ sbox.apply(x ^ a)] += 1;
    }
    row
}
