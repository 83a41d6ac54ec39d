//! Error types for the seqchain core.

use thiserror::Error;

/// Errors that can occur during chain evaluation.
///
/// The core's only error surface is the step-index precondition: hashing
/// itself cannot fail for valid strings, and a verification mismatch is a
/// normal `false` result rather than an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("step index must be non-negative, got {0}")]
    NegativeStepIndex(i64),
}
