//! Correlation table: the spectrum of every linear combination of the output
//! vectors.
//!
//! Row order follows the combination masks (ascending), so row `0` is always
//! the empty combination `"0"`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::boolean::{sign_map, xor_combine, OutputVectors};
use crate::combination::{combinations, Combination};
use crate::error::Result;
use crate::sbox::SBox;
use crate::transform::WalshTransform;

/// Knobs for [`CorrelationTable::build`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationOptions {
    /// Attach each row's combination label.
    pub include_labels: bool,
}

impl CorrelationOptions {
    pub fn with_labels(mut self) -> Self {
        self.include_labels = true;
        self
    }
}

/// One row: the spectrum of a combination, optionally followed by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationRow {
    spectrum: Vec<i64>,
    label: Option<String>,
}

impl CorrelationRow {
    pub fn spectrum(&self) -> &[i64] {
        &self.spectrum
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Rows for all `2^k` combinations of `k` output vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationTable {
    domain_size: usize,
    rows: Vec<CorrelationRow>,
}

impl CorrelationTable {
    /// Builds the table for a validated vector set.
    pub fn build(vectors: &OutputVectors, options: CorrelationOptions) -> Self {
        let n = vectors.domain_size();
        debug!(
            domain_size = n,
            vectors = vectors.len(),
            include_labels = options.include_labels,
            "building correlation table"
        );
        let transform = WalshTransform::new(n);
        let combos = combinations(vectors.len());

        #[cfg(feature = "parallel")]
        let rows = combos
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|c| row(&c, vectors, &transform, options))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows = combos
            .map(|c| row(&c, vectors, &transform, options))
            .collect();

        Self {
            domain_size: n,
            rows,
        }
    }

    /// Builds the table from the coordinate functions of `sbox`.
    pub fn from_sbox(sbox: &SBox, options: CorrelationOptions) -> Result<Self> {
        Ok(Self::build(&sbox.coordinate_vectors()?, options))
    }

    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    pub fn rows(&self) -> &[CorrelationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row whose label is `label`. Only finds rows built with labels.
    pub fn get(&self, label: &str) -> Option<&CorrelationRow> {
        self.rows.iter().find(|r| r.label() == Some(label))
    }

    pub fn into_rows(self) -> Vec<CorrelationRow> {
        self.rows
    }
}

/// Spectrum of a single combination: XOR, sign map, transform.
pub fn combination_spectrum(
    combination: &Combination,
    vectors: &OutputVectors,
    transform: &WalshTransform,
) -> Vec<i64> {
    let combined = xor_combine(vectors.domain_size(), &combination.select(vectors));
    let mut spectrum = sign_map(&combined);
    transform.apply_in_place(&mut spectrum);
    spectrum
}

fn row(
    combination: &Combination,
    vectors: &OutputVectors,
    transform: &WalshTransform,
    options: CorrelationOptions,
) -> CorrelationRow {
    let spectrum = combination_spectrum(combination, vectors, transform);
    trace!(mask = combination.mask(), ?spectrum, "correlation row");
    CorrelationRow {
        spectrum,
        label: options.include_labels.then(|| combination.label()),
    }
}
