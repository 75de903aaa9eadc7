//! Random Code Utilities

use rand::{Rng, rngs::OsRng};

/// Uppercase letters and digits, as used by referral codes
pub const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random code of `len` characters drawn from `alphabet`
///
/// Returns an empty string when the alphabet is empty.
pub fn random_code(len: usize, alphabet: &[u8]) -> String {
    if alphabet.is_empty() {
        return String::new();
    }
    (0..len)
        .map(|_| char::from(alphabet[OsRng.gen_range(0..alphabet.len())]))
        .collect()
}
