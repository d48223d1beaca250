//! Error types.

use thiserror::Error;

/// Error returned by fallible array construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArrayError {
    /// The supplied buffer does not hold exactly one element per coordinate.
    #[error("buffer length {found} does not match array size {expected}")]
    LengthMismatch {
        /// The number of elements the shape requires.
        expected: usize,
        /// The number of elements supplied.
        found: usize,
    },
}
