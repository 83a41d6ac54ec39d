//! Demo: compute a 1024-step chain, publish its checkpoints, and verify
//! each adjacent checkpoint pair the way a third party would.
//!
//! Run with `cargo run --example checkpoints`.

use anyhow::{ensure, Result};
use seqchain::{run_chain, verify, Digest, VERIFY_SPAN};

const SEED: &str = "e80b3da968979a57c449f8f8bc6f9a679602592c87918d787b6504393edeb2";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    // The prover does the sequential work and keeps every 256th digest.
    let checkpoints = run_chain(Digest::new(SEED), 0, 1 << 10)?;
    for (i, digest) in checkpoints.digests().iter().enumerate() {
        println!("{:010} {}", i as u64 * VERIFY_SPAN, digest);
    }
    println!("{} checkpoints", checkpoints.len());

    // A verifier re-checks each claimed segment from its starting checkpoint.
    let c = checkpoints.digests();
    for i in 0..c.len() - 1 {
        let offset = i as u64 * VERIFY_SPAN;
        ensure!(
            verify(&c[i], &c[i + 1], offset),
            "segment starting at step {offset} failed to verify"
        );
    }
    ensure!(checkpoints.verify_adjacent(), "sequence self-check failed");

    println!("all segments verified");
    Ok(())
}
