//! Two-checkpoint verification.
//!
//! Verifying a chain segment does not require the full chain: recomputing
//! one verification span from the earlier checkpoint and comparing against
//! the later one is sufficient, because every step is fully determined by
//! its predecessor and the offset.

use crate::chain::ChainFunction;
use crate::checkpoint::CHECKPOINT_STRIDE;
use crate::digest::Digest;

/// Number of chain steps a single [`verify`] call checks.
///
/// This is the checkpoint stride of the scheme, not a tunable runtime knob:
/// adjacent published checkpoints are exactly one span apart, so a verifier
/// holding checkpoints `k` and `k+1` recomputes precisely this many steps.
pub const VERIFY_SPAN: u64 = CHECKPOINT_STRIDE;

/// Check that `hash1` is exactly [`VERIFY_SPAN`] chain steps ahead of
/// `hash0` under the given offset.
///
/// Builds a fresh chain rooted at `hash0`, evaluates the span, and compares
/// for exact string equality. Returns `false` on mismatch; never errors.
/// Both digests are accepted as opaque strings, so a malformed input simply
/// fails to match — format validation, if wanted, belongs to the caller.
pub fn verify(hash0: &Digest, hash1: &Digest, offset: u64) -> bool {
    let mut chain = ChainFunction::new(hash0.clone(), offset);
    let computed = match chain.evaluate(VERIFY_SPAN as i64) {
        Ok(digest) => digest,
        Err(_) => return false,
    };

    let ok = computed == *hash1;
    if !ok {
        tracing::debug!(
            offset,
            expected = %hash1,
            computed = %computed,
            "checkpoint span did not verify"
        );
    }
    ok
}
