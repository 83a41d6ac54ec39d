//! The memoized chain function.
//!
//! A [`ChainFunction`] lazily computes elements of the hash-chain recurrence
//! and caches every value it produces, so repeated evaluation of the same or
//! lower step indices performs no additional hashing.

use crate::digest::Digest;
use crate::error::ChainError;

/// Lazily computes `digest(n)` for a single chain, memoizing every step.
///
/// The recurrence is the single source of truth for the whole system:
///
/// ```text
/// digest(0) = origin
/// digest(n) = sha256_hex(digest(n-1) || decimal(n + offset))   for n > 0
/// ```
///
/// where `decimal` is the base-10 rendering of the shifted step index with no
/// padding or sign. The offset lets a chain segment be evaluated as if it
/// started mid-sequence, which is what makes segment-relative verification
/// possible.
///
/// The memo is dense and exclusively owned by this instance: evaluating step
/// `n` fills every step up to `n`, nothing is ever evicted, and the cache is
/// dropped with the instance. Separate instances share no state, so
/// independent chains may be evaluated on separate threads with no
/// coordination; a single instance requires `&mut self` and is therefore
/// single-writer by construction.
///
/// Evaluation is an explicit loop from the highest cached step, not
/// recursion, so arbitrarily large step indices cannot overflow the call
/// stack.
#[derive(Debug, Clone)]
pub struct ChainFunction {
    origin: Digest,
    offset: u64,
    // memo[i] is digest(i); always contiguous from step 0.
    memo: Vec<Digest>,
    hashes_performed: u64,
}

impl ChainFunction {
    /// Create a chain rooted at `origin` with the given step offset.
    ///
    /// The origin is step 0 of this chain. It is accepted as an opaque
    /// string; see [`Digest`] for the validation contract.
    pub fn new(origin: Digest, offset: u64) -> Self {
        let memo = vec![origin.clone()];
        Self {
            origin,
            offset,
            memo,
            hashes_performed: 0,
        }
    }

    /// Evaluate `digest(step)`.
    ///
    /// Steps already computed on this instance are returned from the memo
    /// without hashing; a step beyond the cached frontier extends the chain
    /// one hash at a time from the frontier up to `step`.
    ///
    /// Negative `step` is a caller error and fails with
    /// [`ChainError::NegativeStepIndex`]. That is the only failure mode:
    /// hashing itself cannot fail.
    pub fn evaluate(&mut self, step: i64) -> Result<Digest, ChainError> {
        if step < 0 {
            return Err(ChainError::NegativeStepIndex(step));
        }
        let target = step as usize;

        while self.memo.len() <= target {
            let n = self.memo.len() as u64;
            let prev = &self.memo[self.memo.len() - 1];
            // Widened so step + offset cannot overflow for offsets near u64::MAX.
            let nonce = u128::from(n) + u128::from(self.offset);
            let next = Digest::hash(&format!("{}{}", prev.as_str(), nonce));
            self.hashes_performed += 1;
            self.memo.push(next);
        }

        Ok(self.memo[target].clone())
    }

    /// The origin digest (step 0).
    pub fn origin(&self) -> &Digest {
        &self.origin
    }

    /// The step offset mixed into every nonce.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Highest step index computed so far.
    pub fn computed_steps(&self) -> u64 {
        (self.memo.len() - 1) as u64
    }

    /// Total hash invocations performed by this instance.
    ///
    /// Grows by exactly one per newly computed step, so a cache hit leaves
    /// it unchanged. Doubles as a progress metric for long runs.
    pub fn hashes_performed(&self) -> u64 {
        self.hashes_performed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Digest {
        Digest::hash("chain test seed")
    }

    #[test]
    fn test_step_zero_is_origin() {
        let origin = seed();
        let mut chain = ChainFunction::new(origin.clone(), 0);
        assert_eq!(chain.evaluate(0).unwrap(), origin);
        assert_eq!(chain.hashes_performed(), 0);
    }

    #[test]
    fn test_recurrence_holds() {
        let mut chain = ChainFunction::new(seed(), 0);
        for n in 1..=20i64 {
            let prev = chain.evaluate(n - 1).unwrap();
            let expected = Digest::hash(&format!("{}{}", prev.as_str(), n));
            assert_eq!(chain.evaluate(n).unwrap(), expected);
        }
    }

    #[test]
    fn test_recurrence_holds_with_offset() {
        let offset = 256u64;
        let mut chain = ChainFunction::new(seed(), offset);
        for n in 1..=20i64 {
            let prev = chain.evaluate(n - 1).unwrap();
            let expected = Digest::hash(&format!("{}{}", prev.as_str(), n as u64 + offset));
            assert_eq!(chain.evaluate(n).unwrap(), expected);
        }
    }

    #[test]
    fn test_memoization_no_rehash() {
        let mut chain = ChainFunction::new(seed(), 0);
        let first = chain.evaluate(50).unwrap();
        assert_eq!(chain.hashes_performed(), 50);

        // Repeat call and every lower step are pure cache hits.
        let second = chain.evaluate(50).unwrap();
        assert_eq!(first, second);
        let _ = chain.evaluate(25).unwrap();
        let _ = chain.evaluate(0).unwrap();
        assert_eq!(chain.hashes_performed(), 50);

        // Extending past the frontier hashes only the new steps.
        let _ = chain.evaluate(60).unwrap();
        assert_eq!(chain.hashes_performed(), 60);
    }

    #[test]
    fn test_cross_instance_determinism() {
        let mut a = ChainFunction::new(seed(), 7);
        let mut b = ChainFunction::new(seed(), 7);
        assert_eq!(a.evaluate(100).unwrap(), b.evaluate(100).unwrap());
    }

    #[test]
    fn test_instances_are_independent() {
        // A fresh instance rooted at digest(k) with offset k reproduces the
        // tail of the base chain: no hidden shared cache interferes.
        let mut base = ChainFunction::new(seed(), 0);
        let mid = base.evaluate(40).unwrap();
        let end = base.evaluate(80).unwrap();

        let mut tail = ChainFunction::new(mid, 40);
        assert_eq!(tail.evaluate(40).unwrap(), end);
    }

    #[test]
    fn test_offset_near_max_does_not_overflow() {
        let mut chain = ChainFunction::new(seed(), u64::MAX);
        let nonce = u128::from(u64::MAX) + 1;
        let expected = Digest::hash(&format!("{}{}", seed().as_str(), nonce));
        assert_eq!(chain.evaluate(1).unwrap(), expected);
    }

    #[test]
    fn test_offset_changes_outputs() {
        let mut a = ChainFunction::new(seed(), 0);
        let mut b = ChainFunction::new(seed(), 1);
        assert_ne!(a.evaluate(1).unwrap(), b.evaluate(1).unwrap());
    }

    #[test]
    fn test_negative_step_rejected() {
        let mut chain = ChainFunction::new(seed(), 0);
        assert_eq!(
            chain.evaluate(-1).unwrap_err(),
            ChainError::NegativeStepIndex(-1)
        );
        assert_eq!(
            chain.evaluate(i64::MIN).unwrap_err(),
            ChainError::NegativeStepIndex(i64::MIN)
        );
        // The instance stays usable after a rejected call.
        assert_eq!(chain.evaluate(0).unwrap(), seed());
    }

    #[test]
    fn test_computed_steps_tracks_frontier() {
        let mut chain = ChainFunction::new(seed(), 0);
        assert_eq!(chain.computed_steps(), 0);
        chain.evaluate(10).unwrap();
        assert_eq!(chain.computed_steps(), 10);
        chain.evaluate(3).unwrap();
        assert_eq!(chain.computed_steps(), 10);
    }

    #[test]
    fn test_accessors() {
        let origin = seed();
        let chain = ChainFunction::new(origin.clone(), 42);
        assert_eq!(chain.origin(), &origin);
        assert_eq!(chain.offset(), 42);
    }
}
