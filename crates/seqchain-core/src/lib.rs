//! # Seqchain Core
//!
//! Pure primitives for sequential hash chains: the digest type, the memoized
//! chain function, and two-checkpoint verification.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over a single recurrence:
//!
//! ```text
//! digest(0) = origin
//! digest(n) = sha256_hex(digest(n-1) || decimal(n + offset))
//! ```
//!
//! Computing the chain is inherently sequential (each step depends on its
//! predecessor through the hash), while verifying a specific span only
//! requires recomputing that span from a known checkpoint.
//!
//! ## Key Types
//!
//! - [`Digest`] - A 64-character lowercase hex digest, carried as an opaque string
//! - [`ChainFunction`] - Lazily computes and memoizes chain elements
//! - [`CheckpointSequence`] - Digests sampled every [`CHECKPOINT_STRIDE`] steps
//!
//! ## Verification
//!
//! [`verify`] confirms that one digest is exactly [`VERIFY_SPAN`] chain steps
//! ahead of another, under a given offset. A mismatch is a normal `false`
//! result, not an error.

pub mod chain;
pub mod checkpoint;
pub mod digest;
pub mod error;
pub mod verify;

pub use chain::ChainFunction;
pub use checkpoint::{CheckpointSequence, CHECKPOINT_STRIDE};
pub use digest::Digest;
pub use error::ChainError;
pub use verify::{verify, VERIFY_SPAN};
