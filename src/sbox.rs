//! Validated substitution tables.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::boolean::OutputVectors;
use crate::error::{Error, Result};

/// A lookup table over `[0, N)` with `N` a power of two.
///
/// Bijectivity is not required; see [`SBox::is_permutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SBox {
    table: Vec<usize>,
}

impl SBox {
    /// Checks the size and that every entry stays inside the domain.
    pub fn new(table: Vec<usize>) -> Result<Self> {
        let size = table.len();
        if size == 0 {
            return Err(Error::EmptyDomain);
        }
        if !size.is_power_of_two() {
            return Err(Error::DomainNotPowerOfTwo { size });
        }
        if let Some((index, &value)) = table.iter().enumerate().find(|&(_, &v)| v >= size) {
            return Err(Error::EntryOutOfRange { index, value, size });
        }
        Ok(Self { table })
    }

    /// Same as [`SBox::new`] for byte tables such as 4-bit S-box constants.
    pub fn from_bytes(table: &[u8]) -> Result<Self> {
        Self::new(table.iter().map(|&b| b as usize).collect())
    }

    /// Domain size `N`.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Number of bits in a domain point, `log2(N)`.
    pub fn bits(&self) -> usize {
        self.table.len().trailing_zeros() as usize
    }

    #[inline(always)]
    pub fn apply(&self, x: usize) -> usize {
        self.table[x]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.size()];
        for &v in &self.table {
            if seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// The `log2(N)` coordinate boolean functions, most significant output bit
    /// first: vector `i` is bit `bits - 1 - i` of `S(x)` for every `x`.
    pub fn coordinate_vectors(&self) -> Result<OutputVectors> {
        let bits = self.bits();
        let vectors = (0..bits)
            .map(|i| {
                let shift = bits - 1 - i;
                self.table.iter().map(|&y| (y >> shift) & 1 == 1).collect()
            })
            .collect();
        OutputVectors::new(self.size(), vectors)
    }
}
