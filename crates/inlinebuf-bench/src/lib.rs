//! Benchmark workloads and utilities for the inlinebuf library.
//!
//! Provides the deterministic inputs shared by the criterion benches:
//!
//! - [`mixed_lens`]: seeded random scratch lengths across all size classes
//! - [`fill_pattern`]: a cheap write touching every element of a view

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use inlinebuf::MAX_SCRATCH_LEN;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `count` deterministic scratch lengths in `0..=MAX_SCRATCH_LEN`.
///
/// Seeded ChaCha8 so repeated benchmark runs see the identical mix of
/// size classes.
pub fn mixed_lens(seed: u64, count: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random_range(0..=MAX_SCRATCH_LEN))
        .collect()
}

/// Write an index-derived pattern into every element of a view.
///
/// Cheap enough that the allocation path dominates the measurement.
pub fn fill_pattern(view: &mut [u64]) {
    for (i, slot) in view.iter_mut().enumerate() {
        *slot = i as u64;
    }
}
