//! # Random Strings
//!
//! Convenience pseudo-random string generation. Not suitable for secrets or
//! anything security-sensitive: the source is a general-purpose PRNG and the
//! sampling carries no hardening guarantees.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::charset;

/// Generates `length` characters drawn from
/// [`charset::ALPHA_UPPER_AND_DIGITS`] using the thread-local generator.
///
/// Not cryptographically strong; do not use for security-sensitive
/// identifiers.
///
/// # Examples
/// ```rust
/// let id = strkit::random_string(10);
/// assert_eq!(id.len(), 10);
/// ```
#[must_use]
pub fn random_string(length: usize) -> String {
    random_string_from(&mut rand::rng(), length, charset::ALPHA_UPPER_AND_DIGITS)
}

/// Generates `length` characters drawn from `character_set` using the
/// supplied generator.
///
/// The set is shuffled once, then characters are sampled uniformly with
/// replacement, so repeats are expected. A seeded generator makes the output
/// reproducible. An empty `character_set` yields an empty string.
///
/// # Examples
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let first = strkit::random_string_from(&mut rng, 8, strkit::charset::HEX_LOWER);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let second = strkit::random_string_from(&mut rng, 8, strkit::charset::HEX_LOWER);
///
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn random_string_from<R>(rng: &mut R, length: usize, character_set: &str) -> String
where
    R: Rng + ?Sized,
{
    let mut pool: Vec<char> = character_set.chars().collect();
    if pool.is_empty() || length == 0 {
        return String::new();
    }
    pool.shuffle(rng);

    (0..length).map(|_| pool[rng.random_range(0..pool.len())]).collect()
}
