//! Chain runner: walk a chain and collect its checkpoints.
//!
//! This is the driver side of the construction — the prover's loop. It sits
//! outside the core on purpose: the core exposes `evaluate` and `verify`,
//! and everything here is orchestration over those two calls.

use seqchain_core::{ChainError, ChainFunction, CheckpointSequence, Digest, CHECKPOINT_STRIDE};

/// Compute a chain through `steps` steps and collect its checkpoints.
///
/// Every checkpoint step below `steps` (that is, steps `0, 256, 512, ...`)
/// is sampled into the returned [`CheckpointSequence`] and reported through
/// a `tracing` debug event with its zero-padded step index; afterwards the
/// chain is extended to step `steps - 1` so the whole run is computed, as a
/// prover doing the sequential work would.
///
/// `steps == 0` yields an empty sequence.
pub fn run_chain(
    origin: Digest,
    offset: u64,
    steps: u64,
) -> Result<CheckpointSequence, ChainError> {
    let mut chain = ChainFunction::new(origin, offset);
    let count = steps.div_ceil(CHECKPOINT_STRIDE) as usize;

    let checkpoints = CheckpointSequence::collect(&mut chain, count)?;
    for (i, digest) in checkpoints.digests().iter().enumerate() {
        let step = i as u64 * CHECKPOINT_STRIDE;
        tracing::debug!("checkpoint {:010} {}", step, digest);
    }

    if steps > 0 {
        chain.evaluate((steps - 1) as i64)?;
        tracing::debug!(
            steps = chain.computed_steps() + 1,
            hashes = chain.hashes_performed(),
            checkpoints = checkpoints.len(),
            "chain run complete"
        );
    }

    Ok(checkpoints)
}
