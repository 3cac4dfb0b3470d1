//! # Utility Module
//!
//! Seed helpers shared by the generator.
//!
//! ## Example Function: `hash_seed`
//!
//! The `hash_seed` function folds a textual seed into a `u64` with 64-bit FNV-1a.
//! The hash is fixed, so the same text always yields the same `u64` on every
//! platform and toolchain. The RNG stream fed from it is reproducible for a
//! given `rand` version; `StdRng` may change its algorithm across `rand` releases.

use std::time::{SystemTime, UNIX_EPOCH};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a seed string into a `u64`.
///
/// # Arguments
///
/// * `seed` - The textual seed.
///
/// # Examples
///
/// ```
/// use cave_gen::utils::util::hash_seed;
///
/// assert_eq!(hash_seed("abc"), hash_seed("abc"));
/// assert_ne!(hash_seed("abc"), hash_seed("abd"));
/// ```
pub fn hash_seed(seed: &str) -> u64 {
    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

/// A seed string derived from the current wall-clock time in nanoseconds.
pub fn time_seed() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    nanos.to_string()
}
