//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use seqchain_core::{ChainFunction, CheckpointSequence, Digest};

use crate::vectors::REFERENCE_SEED;

/// A test fixture holding a seed digest to root chains at.
pub struct TestFixture {
    pub seed: Digest,
}

impl TestFixture {
    /// Create a fixture rooted at the reference seed.
    pub fn new() -> Self {
        Self {
            seed: Digest::new(REFERENCE_SEED),
        }
    }

    /// Create a fixture rooted at an arbitrary seed string.
    pub fn with_seed(seed: &str) -> Self {
        Self {
            seed: Digest::new(seed),
        }
    }

    /// Build a chain rooted at the fixture seed with the given offset.
    pub fn make_chain(&self, offset: u64) -> ChainFunction {
        ChainFunction::new(self.seed.clone(), offset)
    }

    /// Sample `count` checkpoints from a fresh zero-offset chain.
    pub fn make_checkpoints(&self, count: usize) -> CheckpointSequence {
        let mut chain = self.make_chain(0);
        CheckpointSequence::collect(&mut chain, count)
            .expect("checkpoint steps are non-negative")
    }

    /// Run the full prover loop for `steps` steps at offset zero.
    pub fn run_chain(&self, steps: u64) -> CheckpointSequence {
        seqchain::run_chain(self.seed.clone(), 0, steps)
            .expect("runner steps are non-negative")
    }

    /// A digest unrelated to any chain rooted at the fixture seed.
    pub fn foreign_digest(&self) -> Digest {
        Digest::hash("unrelated digest for negative tests")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
