//! # Random Token Generator
//!
//! Generates random strings with a guaranteed number of characters from each
//! of four classes: uppercase letters, lowercase letters, digits and symbols.
//!
//! The alphabets skip the confusable characters `l` and `I`. The random
//! source is passed in explicitly, so a seeded RNG gives fully deterministic
//! output for tests; [`generate_random_string_default`] draws from the
//! thread-local RNG for the common case.
//!
//! ## Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use web_toolbelt_rs::random::generate_random_string;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let token = generate_random_string(&mut rng, 2, 2, 2, 2);
//! assert_eq!(token.chars().count(), 8);
//!
//! // The same seed reproduces the same token.
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(generate_random_string(&mut rng, 2, 2, 2, 2), token);
//! ```

use rand::Rng;

const LOWERCASE_CHARS: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!&%$*";

/// Generates a random string drawing the requested number of characters from
/// each class, in class order: uppercase, lowercase, digits, symbols.
///
/// The output length is the sum of the four counts.
pub fn generate_random_string<R: Rng + ?Sized>(
    rng: &mut R,
    uppercase_chars: usize,
    lowercase_chars: usize,
    digits: usize,
    symbols: usize,
) -> String {
    let mut result = String::with_capacity(uppercase_chars + lowercase_chars + digits + symbols);

    for _ in 0..uppercase_chars {
        result.push(pick(rng, UPPERCASE_CHARS));
    }
    for _ in 0..lowercase_chars {
        result.push(pick(rng, LOWERCASE_CHARS));
    }
    for _ in 0..digits {
        result.push(pick(rng, DIGITS));
    }
    for _ in 0..symbols {
        result.push(pick(rng, SYMBOLS));
    }

    result
}

/// Generates a random string using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::random::generate_random_string_default;
///
/// let token = generate_random_string_default(2, 2, 2, 2);
/// assert_eq!(token.chars().count(), 8);
/// ```
pub fn generate_random_string_default(
    uppercase_chars: usize,
    lowercase_chars: usize,
    digits: usize,
    symbols: usize,
) -> String {
    generate_random_string(&mut rand::rng(), uppercase_chars, lowercase_chars, digits, symbols)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    let pos = rng.random_range(0..alphabet.len());
    alphabet[pos] as char
}
