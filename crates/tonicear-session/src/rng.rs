//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in session generation flows through this module. A
//! session is a pure function of its request plus one `u32` seed: tests
//! pass a fixed seed to reproduce exact output, production draws one from
//! thread-local entropy. Each question gets an independent stream derived
//! from the base seed, so a draw in one question never perturbs another.

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

/// Derives an independent seed for one question from the session seed.
///
/// Hashes the base seed concatenated with the 1-based question number
/// using BLAKE3 and truncates to 32 bits.
pub fn derive_question_seed(base_seed: u32, question_number: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&question_number.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for a specific question.
pub fn create_question_rng(base_seed: u32, question_number: u32) -> Pcg32 {
    create_rng(derive_question_seed(base_seed, question_number))
}

/// Derives the opaque session id from the seed and module id.
///
/// 32 lowercase hex characters; stable under the seed so a session can be
/// regenerated from its own settings snapshot.
pub fn derive_session_id(base_seed: u32, module_id: &str) -> String {
    let mut input = Vec::with_capacity(4 + module_id.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(module_id.as_bytes());

    let hash = blake3::hash(&input);
    hash.as_bytes()[0..16]
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Draws a fresh base seed from thread-local entropy.
///
/// Used when a request carries no explicit seed; the seed is recorded in
/// the session settings so the outcome stays reproducible after the fact.
pub fn entropy_seed() -> u32 {
    rand::random()
}
