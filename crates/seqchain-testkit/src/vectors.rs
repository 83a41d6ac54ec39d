//! Golden test vectors for deterministic verification.
//!
//! These vectors pin down chain configurations whose outputs must be
//! identical across implementations and releases. Where an expected digest
//! has not been pinned yet it is left empty and the vector is checked for
//! determinism instead.

use seqchain_core::{ChainFunction, Digest};

/// The reference seed used by the chained-verification scenario.
///
/// Treated as an opaque seed string, exactly as handed down from the
/// original construction.
pub const REFERENCE_SEED: &str = "e80b3da968979a57c449f8f8bc6f9a679602592c87918d787b6504393edeb2";

/// A golden test vector: one chain configuration and one evaluated step.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Origin seed string.
    pub seed: &'static str,
    /// Step offset.
    pub offset: u64,
    /// Step index to evaluate.
    pub step: i64,
    /// Expected digest (hex). Empty means "not yet pinned".
    pub expected_digest: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference seed at step 0",
            seed: REFERENCE_SEED,
            offset: 0,
            step: 0,
            // Step 0 is the origin itself.
            expected_digest: REFERENCE_SEED,
        },
        GoldenVector {
            name: "reference seed, one verify span",
            seed: REFERENCE_SEED,
            offset: 0,
            step: 256,
            expected_digest: "",
        },
        GoldenVector {
            name: "reference seed, second segment",
            seed: REFERENCE_SEED,
            offset: 256,
            step: 256,
            expected_digest: "",
        },
        GoldenVector {
            name: "empty seed",
            seed: "",
            offset: 0,
            step: 16,
            expected_digest: "",
        },
        GoldenVector {
            name: "large offset",
            seed: REFERENCE_SEED,
            offset: 1 << 32,
            step: 8,
            expected_digest: "",
        },
    ]
}

/// Evaluate the chain a vector describes at its pinned step.
pub fn evaluate_vector(vector: &GoldenVector) -> Digest {
    let mut chain = ChainFunction::new(Digest::new(vector.seed), vector.offset);
    chain
        .evaluate(vector.step)
        .expect("golden vectors use non-negative steps")
}

/// Verify all golden vectors produce consistent digests.
///
/// Returns `(name, matches, digest_hex)` per vector; a vector with no
/// pinned digest always matches and simply reports what it produced.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = evaluate_vector(v);
            let hex = digest.as_str().to_string();
            let matches = v.expected_digest.is_empty() || hex == v.expected_digest;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            let d1 = evaluate_vector(&vector);
            let d2 = evaluate_vector(&vector);
            assert_eq!(
                d1, d2,
                "Vector '{}' produced different digests on re-evaluation",
                vector.name
            );
        }
    }

    #[test]
    fn test_all_pinned_vectors_match() {
        for (name, matches, digest) in verify_all_vectors() {
            assert!(matches, "Vector '{}' mismatched, got {}", name, digest);
        }
    }

    #[test]
    fn test_vectors_distinguish_offsets() {
        let v = all_vectors();
        // Same seed and step, different offsets: digests must differ.
        let span0 = evaluate_vector(&v[1]);
        let span256 = evaluate_vector(&v[2]);
        assert_ne!(span0, span256);
    }
}
