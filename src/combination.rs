//! Linear combinations of output vectors, indexed by subset.
//!
//! A combination of `k` vectors is a mask of width `k` read most-significant
//! bit first: bit `k-1-i` of the mask selects vector `i`. Masks are visited in
//! increasing numeric order, so mask `0b0001` with `k = 4` selects only the
//! last vector and is labelled `y4`.

use crate::boolean::OutputVectors;
use crate::error::MAX_VECTORS;

/// One subset of the output vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    mask: u32,
    indices: Vec<usize>,
}

impl Combination {
    /// Decodes `mask` over `width` vectors.
    pub fn from_mask(mask: u32, width: usize) -> Self {
        let indices = (0..width)
            .filter(|&i| {
                let shift = (width - 1 - i) as u32;
                mask.checked_shr(shift).map_or(false, |m| m & 1 == 1)
            })
            .collect();
        Self { mask, indices }
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Indices of the selected vectors, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// `y{i+1}` per selected index, or `"0"` for the empty subset.
    pub fn label(&self) -> String {
        if self.indices.is_empty() {
            return "0".to_string();
        }
        self.indices.iter().map(|i| format!("y{}", i + 1)).collect()
    }

    /// The selected vectors, in index order.
    pub fn select<'a>(&self, vectors: &'a OutputVectors) -> Vec<&'a [bool]> {
        self.indices
            .iter()
            .filter_map(|&i| vectors.get(i))
            .collect()
    }
}

/// Iterator over all `2^width` combinations in increasing mask order.
#[derive(Debug, Clone)]
pub struct Combinations {
    width: usize,
    next: u64,
    end: u64,
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next as u32;
        self.next += 1;
        Some(Combination::from_mask(mask, self.width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Combinations {}

/// Every combination of `width` vectors.
///
/// # Panics
///
/// If `width` exceeds [`MAX_VECTORS`](crate::MAX_VECTORS), which
/// [`OutputVectors`] already rejects.
pub fn combinations(width: usize) -> Combinations {
    assert!(
        width <= MAX_VECTORS,
        "{width} vectors exceed the limit of {MAX_VECTORS}"
    );
    Combinations {
        width,
        next: 0,
        end: 1u64 << width,
    }
}

/// `(label, selected vectors)` for every combination of `vectors`.
pub fn labelled_combinations(vectors: &OutputVectors) -> Vec<(String, Vec<&[bool]>)> {
    combinations(vectors.len())
        .map(|c| (c.label(), c.select(vectors)))
        .collect()
}
