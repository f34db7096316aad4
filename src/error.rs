//! Error types for tensor4d

use thiserror::Error;

/// Result type alias using tensor4d's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensor4d operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The right-hand shape cannot be broadcast onto the left-hand shape
    #[error("Shape mismatch: cannot broadcast {rhs:?} onto {lhs:?} at dimension {dim}")]
    ShapeMismatch {
        /// Shape of the tensor being accumulated into
        lhs: [usize; 4],
        /// Shape of the tensor being added
        rhs: [usize; 4],
        /// First dimension that is neither equal nor 1
        dim: usize,
    },

    /// Source slice is shorter than the element count of the requested shape
    #[error("Invalid length: shape needs {expected} elements, source has {got}")]
    InvalidLength {
        /// Element count implied by the shape
        expected: usize,
        /// Length of the supplied source
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(lhs: [usize; 4], rhs: [usize; 4], dim: usize) -> Self {
        Self::ShapeMismatch { lhs, rhs, dim }
    }

    /// Create an invalid length error
    pub fn invalid_length(expected: usize, got: usize) -> Self {
        Self::InvalidLength { expected, got }
    }
}
