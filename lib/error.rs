//! Error conditions raised by register and gate construction and composition.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type QuResult<T> = Result<T, QuError>;

/// Everything that can go wrong when building or combining registers and
/// gates.
///
/// All errors are raised at the point of the offending call; no operation
/// leaves a partially constructed result behind.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum QuError {
    /// A bit width was zero, negative, non-integer, or too large to index,
    /// or a gate parameter was not finite.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two operands have incompatible dimensions.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// An explicit amplitude vector does not have unit norm.
    #[error("amplitudes must have unit norm; got squared norm {0}")]
    NotNormalized(f64),

    /// An explicit gate matrix is not unitary.
    #[error("gate matrix is not unitary")]
    NotUnitary,
}

impl QuError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize)
        -> Self
    {
        Self::DimensionMismatch { context, expected, got }
    }
}
