//! Short random identifier generation.
//!
//! Produces 5-character lowercase-alphanumeric tokens from a general-purpose
//! pseudo-random source. With 36^5 ≈ 60.5 million possible values uniqueness
//! is probabilistic only; callers that persist these ids must tolerate
//! collisions (e.g. retry on insert conflict).

use rand::Rng;

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 5;

/// The 36-character alphabet: lowercase ASCII letters and digits.
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a short random id using the thread-local RNG.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Generate a short random id from a caller-supplied source.
///
/// Each character is drawn independently and uniformly from [`ID_ALPHABET`].
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
