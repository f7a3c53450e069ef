//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synthesizer flows through this module. When a base
//! seed is supplied, output is byte-identical across runs; each instrument
//! gets an independent stream derived from the base seed, so adding or
//! removing one instrument never shifts another's noise.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific instrument from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the instrument key,
/// producing an independent seed per instrument.
///
/// # Arguments
/// * `base_seed` - The run's base seed (u32)
/// * `key` - A string identifier for the instrument (e.g., "hihat")
///
/// # Returns
/// A derived u32 seed for the instrument
pub fn derive_instrument_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for one instrument.
///
/// With a base seed, the instrument gets a deterministic derived stream.
/// Without one, the generator is seeded from OS entropy and output differs
/// across runs.
pub fn instrument_rng(base_seed: Option<u32>, key: &str) -> Pcg32 {
    match base_seed {
        Some(seed) => create_rng(derive_instrument_seed(seed, key)),
        None => Pcg32::from_entropy(),
    }
}
