//! Checkpoint sequences: the publishable commitment to a chain run.
//!
//! A prover walking a long chain keeps only every [`CHECKPOINT_STRIDE`]-th
//! digest. The resulting sequence is compact, and any adjacent pair can be
//! re-checked independently with [`verify`] by recomputing a single span.

use serde::{Deserialize, Serialize};

use crate::chain::ChainFunction;
use crate::digest::Digest;
use crate::error::ChainError;
use crate::verify::verify;

/// Distance in chain steps between consecutive checkpoints.
pub const CHECKPOINT_STRIDE: u64 = 256;

/// An ordered run of checkpoint digests sampled from one chain.
///
/// Element `i` is the chain's digest at step `i * CHECKPOINT_STRIDE`;
/// element 0 is the origin itself. The sequence carries the chain's base
/// offset so that segment-relative verification knows which nonces each
/// span mixed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointSequence {
    /// Base step offset of the chain the checkpoints were sampled from.
    offset: u64,
    /// The sampled digests, in step order.
    digests: Vec<Digest>,
}

impl CheckpointSequence {
    /// Sample `count` checkpoints from the chain, starting at its origin.
    ///
    /// Evaluates steps `0, CHECKPOINT_STRIDE, ..., (count-1) * CHECKPOINT_STRIDE`
    /// on `chain` (filling its memo as a side effect) and records the
    /// chain's offset alongside the digests.
    pub fn collect(chain: &mut ChainFunction, count: usize) -> Result<Self, ChainError> {
        let mut digests = Vec::with_capacity(count);
        for i in 0..count {
            let step = (i as u64 * CHECKPOINT_STRIDE) as i64;
            digests.push(chain.evaluate(step)?);
        }
        Ok(Self {
            offset: chain.offset(),
            digests,
        })
    }

    /// Verify every adjacent checkpoint pair.
    ///
    /// Pair `(i, i+1)` must satisfy a [`verify`] span under offset
    /// `offset + i * CHECKPOINT_STRIDE`. Sequences with fewer than two
    /// checkpoints are vacuously valid.
    pub fn verify_adjacent(&self) -> bool {
        self.digests.windows(2).enumerate().all(|(i, pair)| {
            let span_offset = self.offset + i as u64 * CHECKPOINT_STRIDE;
            verify(&pair[0], &pair[1], span_offset)
        })
    }

    /// Base offset of the source chain.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Step distance between consecutive checkpoints.
    pub fn stride(&self) -> u64 {
        CHECKPOINT_STRIDE
    }

    /// The checkpoint digests in step order.
    pub fn digests(&self) -> &[Digest] {
        &self.digests
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Whether the sequence holds no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// The origin checkpoint, if any.
    pub fn first(&self) -> Option<&Digest> {
        self.digests.first()
    }

    /// The most recent checkpoint, if any.
    pub fn last(&self) -> Option<&Digest> {
        self.digests.last()
    }
}
