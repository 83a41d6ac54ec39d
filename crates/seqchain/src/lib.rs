//! # Seqchain
//!
//! Sequential hash chains with stride checkpoints and span verification.
//!
//! Computing the chain is inherently sequential work: step `n` cannot exist
//! before step `n-1`, because each digest is the SHA-256 of its predecessor
//! mixed with a step nonce. Verifying a claimed segment, by contrast, only
//! needs the two checkpoints bracketing it — the verifier recomputes one
//! span and compares.
//!
//! ## Quick start
//!
//! ```rust
//! use seqchain::{run_chain, verify, Digest, VERIFY_SPAN};
//!
//! let origin = Digest::hash("my seed");
//! let checkpoints = run_chain(origin, 0, 1024).unwrap();
//!
//! // Any adjacent checkpoint pair verifies independently.
//! assert!(checkpoints.verify_adjacent());
//! let c = checkpoints.digests();
//! assert!(verify(&c[0], &c[1], 0));
//! assert!(verify(&c[1], &c[2], VERIFY_SPAN));
//! ```
//!
//! ## Crates
//!
//! - [`seqchain_core`] - the digest, chain function, verifier, checkpoints
//! - `seqchain-testkit` - proptest generators, golden vectors, fixtures

pub mod runner;

pub use runner::run_chain;
pub use seqchain_core::{
    verify, ChainError, ChainFunction, CheckpointSequence, Digest, CHECKPOINT_STRIDE, VERIFY_SPAN,
};
