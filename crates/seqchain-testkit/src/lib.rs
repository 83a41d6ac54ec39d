//! # Seqchain Testkit
//!
//! Testing utilities for seqchain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known chain configurations checked for deterministic
//!   outputs, including the reference chained-verification seed
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: helpers for setting up chains and checkpoint runs
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use seqchain_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn chain_is_deterministic(params: ChainParams) {
//!         let mut a = chain_from_params(&params);
//!         let mut b = chain_from_params(&params);
//!         prop_assert_eq!(a.evaluate(64).unwrap(), b.evaluate(64).unwrap());
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use seqchain_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let mut chain = fixture.make_chain(0);
//! let d = chain.evaluate(16).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{chain_from_params, ChainParams};
pub use vectors::{all_vectors, evaluate_vector, verify_all_vectors, GoldenVector, REFERENCE_SEED};
