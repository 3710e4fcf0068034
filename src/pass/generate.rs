//! Password generation.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::trace;
use zeroize::Zeroize;

use super::Charset;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 4096;

/// Generation was asked for more distinct characters than the charset holds.
///
/// Callers that validate first never see this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("cannot draw {requested} characters from a charset of {available}")]
    InsufficientCharset { requested: usize, available: usize },
    #[error("cannot generate {requested} characters, the limit is {max}")]
    LengthTooLong { requested: usize, max: usize },
}

/// A generated password. The buffer is wiped when dropped.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a password with the thread-local generator.
pub fn generate(length: usize, unique_chars: bool, charset: &Charset) -> Result<Password, GenerateError> {
    generate_with(&mut rand::rng(), length, unique_chars, charset)
}

/// Generate a password drawing from `rng`.
///
/// With `unique_chars` the result is an ordered sample without replacement,
/// otherwise every position is an independent uniform draw.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    unique_chars: bool,
    charset: &Charset,
) -> Result<Password, GenerateError> {
    if length > MAX_LENGTH {
        return Err(GenerateError::LengthTooLong {
            requested: length,
            max: MAX_LENGTH,
        });
    }

    let available = charset.len();
    if length > 0 && (available == 0 || (unique_chars && length > available)) {
        return Err(GenerateError::InsufficientCharset {
            requested: length,
            available,
        });
    }

    trace!(length, unique_chars, available, "generating password");

    let password = if unique_chars {
        sample_unique(rng, length, charset)
    } else {
        sample_repeat(rng, length, charset)
    };
    Ok(Password(password))
}

fn sample_unique<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &Charset) -> String {
    let mut pool = charset.as_slice().to_vec();
    let (picked, _) = pool.partial_shuffle(rng, length);
    let password = picked.iter().collect();
    pool.zeroize();
    password
}

fn sample_repeat<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &Charset) -> String {
    let chars = charset.as_slice();
    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn unique_mode_never_repeats() {
        let charset = Charset::from("abcdefghij");
        for _ in 0..100 {
            let pass = generate(10, true, &charset).unwrap();
            let seen: HashSet<char> = pass.as_str().chars().collect();
            assert_eq!(seen.len(), 10);
        }
    }

    #[test]
    fn repeat_mode_allows_longer_than_charset() {
        let pass = generate(50, false, &Charset::from("xy")).unwrap();
        assert_eq!(pass.len(), 50);
        assert!(pass.as_str().chars().all(|c| c == 'x' || c == 'y'));
    }

    #[test]
    fn unique_mode_rejects_short_charset() {
        let err = generate(5, true, &Charset::from("ab")).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InsufficientCharset { requested: 5, available: 2 }
        );
    }

    #[test]
    fn empty_charset_rejected_without_panicking() {
        assert!(generate(3, false, &Charset::new()).is_err());
    }

    #[test]
    fn zero_length_is_empty_password() {
        let pass = generate(0, false, &Charset::new()).unwrap();
        assert!(pass.is_empty());
    }

    #[test]
    fn oversized_length_is_an_error() {
        let charset = Charset::from("a");
        assert_eq!(
            generate(usize::MAX, false, &charset).unwrap_err(),
            GenerateError::LengthTooLong { requested: usize::MAX, max: MAX_LENGTH }
        );
        assert!(generate(MAX_LENGTH + 1, false, &charset).is_err());
        assert_eq!(generate(MAX_LENGTH, false, &charset).unwrap().len(), MAX_LENGTH);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let charset = Charset::from("abcdefghijklmnopqrstuvwxyz");
        let a = generate_with(&mut StdRng::seed_from_u64(7), 16, false, &charset).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(7), 16, false, &charset).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn multibyte_chars_survive() {
        let pass = generate(4, true, &Charset::from("äöüß")).unwrap();
        assert_eq!(pass.len(), 4);
        let seen: HashSet<char> = pass.as_str().chars().collect();
        assert_eq!(seen, "äöüß".chars().collect());
    }

    #[test]
    fn repeat_mode_covers_every_char() {
        let charset = Charset::from("0123456789");
        let mut rng = StdRng::seed_from_u64(42);
        let pass = generate_with(&mut rng, 2000, false, &charset).unwrap();
        for c in charset.iter() {
            assert!(pass.as_str().contains(c), "{c} never drawn");
        }
    }

    #[test]
    fn debug_does_not_leak() {
        let pass = generate(8, false, &Charset::from("s")).unwrap();
        assert_eq!(format!("{pass:?}"), "Password(8 chars)");
    }

    proptest! {
        #[test]
        fn unique_has_exact_length_and_no_repeats(chars in "[ -~]{1,95}", seed in any::<u64>(), cut in 0usize..95) {
            let charset = Charset::from(chars.as_str());
            let length = cut % (charset.len() + 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let pass = generate_with(&mut rng, length, true, &charset).unwrap();

            let seen: HashSet<char> = pass.as_str().chars().collect();
            prop_assert_eq!(pass.len(), length);
            prop_assert_eq!(seen.len(), length);
            prop_assert!(seen.iter().all(|c| charset.contains(*c)));
        }

        #[test]
        fn repeat_has_exact_length_from_charset(chars in "[ -~]{1,95}", seed in any::<u64>(), length in 0usize..200) {
            let charset = Charset::from(chars.as_str());
            let mut rng = StdRng::seed_from_u64(seed);
            let pass = generate_with(&mut rng, length, false, &charset).unwrap();

            prop_assert_eq!(pass.len(), length);
            prop_assert!(pass.as_str().chars().all(|c| charset.contains(c)));
        }
    }
}
