//! Error types for table construction.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Largest number of output vectors whose combinations are enumerated.
pub const MAX_VECTORS: usize = 24;

/// Errors raised while validating inputs to the table builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An output vector does not have the declared domain length.
    #[error("output vector {index} has length {actual}, expected {expected}")]
    LengthMismatch {
        /// Index of the offending vector.
        index: usize,
        /// Declared domain size.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A 0/1 encoded vector contains some other value.
    #[error("output vector {vector} has non-binary value {value} at position {position}")]
    NonBinaryEntry {
        /// Index of the offending vector.
        vector: usize,
        /// Position inside the vector.
        position: usize,
        /// The rejected value.
        value: u8,
    },

    /// An S-box with no entries.
    #[error("S-box domain is empty")]
    EmptyDomain,

    /// XOR offsets only stay inside the domain when its size is a power of two.
    #[error("S-box size {size} is not a power of two")]
    DomainNotPowerOfTwo {
        /// Number of entries supplied.
        size: usize,
    },

    /// An S-box entry falls outside `[0, size)`.
    #[error("S-box entry {index} maps to {value}, outside the domain of size {size}")]
    EntryOutOfRange {
        /// Input point.
        index: usize,
        /// Offending output value.
        value: usize,
        /// Domain size.
        size: usize,
    },

    /// Too many output vectors to enumerate every combination.
    #[error("{count} output vectors exceed the limit of {max}")]
    TooManyVectors {
        /// Number of vectors supplied.
        count: usize,
        /// Accepted maximum.
        max: usize,
    },
}
