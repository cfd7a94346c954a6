//! Boolean output vectors and the two elementwise maps over them.
//!
//! * [`sign_map`]   – 0/1 → +1/−1 (bipolar encoding).
//! * [`xor_combine`] – parity sum of any number of equal-length vectors.
//! * [`OutputVectors`] – a validated set of `k` vectors over a domain of size `N`.

use crate::error::{Error, Result, MAX_VECTORS};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Maps `false → +1` and `true → −1`.
pub fn sign_map(bits: &[bool]) -> Vec<i64> {
    bits.iter().map(|&b| if b { -1 } else { 1 }).collect()
}

/// Elementwise parity of `vectors`, each of length `len`.
///
/// An empty list yields the all-zero vector of length `len`. Callers guarantee
/// every vector has length `len`; [`OutputVectors`] checks this at construction.
pub fn xor_combine<V: AsRef<[bool]>>(len: usize, vectors: &[V]) -> Vec<bool> {
    let mut acc = vec![false; len];
    for v in vectors {
        let v = v.as_ref();
        debug_assert_eq!(v.len(), len);
        for (a, &b) in acc.iter_mut().zip(v) {
            *a ^= b;
        }
    }
    acc
}

/// An ordered set of boolean functions over a domain of size `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OutputVectors {
    domain_size: usize,
    vectors: Vec<Vec<bool>>,
}

impl OutputVectors {
    /// Validates that every vector has length `domain_size`.
    ///
    /// The domain size is explicit so that an empty set still knows `N`.
    pub fn new(domain_size: usize, vectors: Vec<Vec<bool>>) -> Result<Self> {
        if vectors.len() > MAX_VECTORS {
            return Err(Error::TooManyVectors {
                count: vectors.len(),
                max: MAX_VECTORS,
            });
        }
        for (index, v) in vectors.iter().enumerate() {
            if v.len() != domain_size {
                return Err(Error::LengthMismatch {
                    index,
                    expected: domain_size,
                    actual: v.len(),
                });
            }
        }
        Ok(Self {
            domain_size,
            vectors,
        })
    }

    /// Builds the set from 0/1 integer rows.
    pub fn from_bits<R: AsRef<[u8]>>(domain_size: usize, rows: &[R]) -> Result<Self> {
        let mut vectors = Vec::with_capacity(rows.len());
        for (vector, row) in rows.iter().enumerate() {
            let bits = row
                .as_ref()
                .iter()
                .enumerate()
                .map(|(position, &value)| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(Error::NonBinaryEntry {
                        vector,
                        position,
                        value,
                    }),
                })
                .collect::<Result<Vec<bool>>>()?;
            vectors.push(bits);
        }
        Self::new(domain_size, vectors)
    }

    /// Domain size `N`.
    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// Number of vectors `k`.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[bool]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    pub fn as_slice(&self) -> &[Vec<bool>] {
        &self.vectors
    }
}
