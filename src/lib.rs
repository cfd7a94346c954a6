//! SBOXSTAT
//! ========
//! Differential and linear statistics of a substitution box over a domain of
//! size `N = 2^m`.
//!
//! ## Tables
//! * **Difference distribution table**: `DDT[a][b]` counts the points `x` with
//!   `S(x) ^ S(x ^ a) = b`.
//! * **Correlation table**: for every subset of the `k` output vectors
//!   (bitmask read MSB-first, labelled `y1y3` and so on), the vectors are
//!   XOR-combined, mapped to ±1 and pushed through a divisor-ladder
//!   Walsh–Hadamard transform.
//!
//! ## Pipeline
//! ```text
//! OutputVectors ─► combinations ─► xor_combine ─► sign_map ─► WalshTransform ─► CorrelationTable
//! SBox ──────────────────────────────────────────────────────────────────────► DifferenceDistributionTable
//! ```
//!
//! ```
//! use sboxstat::{CorrelationOptions, CorrelationTable, DifferenceDistributionTable, SBox};
//!
//! let sbox = SBox::new(vec![0, 1, 2, 3])?;
//! let ddt = DifferenceDistributionTable::build(&sbox);
//! assert_eq!(ddt.row(2), &[0, 0, 4, 0]);
//!
//! let table = CorrelationTable::from_sbox(&sbox, CorrelationOptions::default().with_labels())?;
//! assert_eq!(table.get("y1").unwrap().spectrum(), &[0, 0, 4, 0]);
//! # Ok::<(), sboxstat::Error>(())
//! ```
//!
//! Everything is a pure function of its inputs. With the `parallel` feature,
//! rows are computed on Rayon's pool; output order and values are unchanged.

pub mod boolean;
pub mod combination;
pub mod correlation;
pub mod ddt;
mod error;
pub mod sbox;
pub mod transform;

pub use boolean::{sign_map, xor_combine, OutputVectors};
pub use combination::{combinations, labelled_combinations, Combination, Combinations};
pub use correlation::{CorrelationOptions, CorrelationRow, CorrelationTable};
pub use ddt::{DdtMethod, DifferenceDistributionTable};
pub use error::{Error, Result, MAX_VECTORS};
pub use sbox::SBox;
pub use transform::{divisors, walsh_transform, WalshTransform};
