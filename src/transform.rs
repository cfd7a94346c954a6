//! Generalised Walsh–Hadamard transform driven by a divisor ladder.
//!
//! For a vector of length `N` the ladder is every divisor `d` of `N` with
//! `2 <= d <= N`, largest first. Each pass cuts the working buffer into
//! contiguous blocks of length `d` and replaces every block by its butterfly:
//!
//! ```text
//!   h = d / 2
//!   out[i]     = B[i]     + B[i + h]      0 <= i < h
//!   out[i]     = B[i - h] - B[i]          h <= i < d
//! ```
//!
//! The second half is `H1 - H2`, never `H2 - H1`; coefficient signs depend on
//! it. For `N = 2^m` the ladder is `[N, N/2, …, 2]` and the result is the
//! natural-order fast Walsh–Hadamard transform, so it conserves energy up to
//! the factor `N`. Odd divisors (non-power-of-two `N`) use `h = floor(d / 2)`.

/// Divisors of `len` in `[2, len]`, ascending. Empty for `len < 2`.
pub fn divisors(len: usize) -> Vec<usize> {
    (2..=len).filter(|d| len % d == 0).collect()
}

/// Transform for a fixed vector length with its ladder computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalshTransform {
    len: usize,
    ladder: Vec<usize>,
}

impl WalshTransform {
    pub fn new(len: usize) -> Self {
        let mut ladder = divisors(len);
        ladder.reverse();
        Self { len, ladder }
    }

    /// Vector length this transform accepts.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Block sizes in processing order (largest first).
    pub fn ladder(&self) -> &[usize] {
        &self.ladder
    }

    /// Transforms `buf` in place.
    ///
    /// # Panics
    ///
    /// If `buf.len()` differs from [`len`](Self::len).
    pub fn apply_in_place(&self, buf: &mut [i64]) {
        assert_eq!(
            buf.len(),
            self.len,
            "transform built for length {} applied to length {}",
            self.len,
            buf.len()
        );
        let mut scratch = vec![0i64; self.len];
        for &d in &self.ladder {
            for (block, out) in buf.chunks_exact_mut(d).zip(scratch.chunks_exact_mut(d)) {
                butterfly(block, out);
                block.copy_from_slice(out);
            }
        }
    }

    /// Transformed copy of `input`.
    pub fn apply(&self, input: &[i64]) -> Vec<i64> {
        let mut buf = input.to_vec();
        self.apply_in_place(&mut buf);
        buf
    }
}

/// One-shot transform of a bipolar vector.
pub fn walsh_transform(input: &[i64]) -> Vec<i64> {
    WalshTransform::new(input.len()).apply(input)
}

#[inline(always)]
fn butterfly(block: &[i64], out: &mut [i64]) {
    let d = block.len();
    let h = d / 2;
    for i in 0..h {
        out[i] = block[i] + block[i + h];
    }
    for i in h..d {
        out[i] = block[i - h] - block[i];
    }
}
