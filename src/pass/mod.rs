//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod validate;

use tracing::debug;

pub use charset::{Charset, CharsetBuilder, Class};
pub use generate::{GenerateError, MAX_LENGTH, Password, generate, generate_with};
pub use validate::{ValidationError, validate};

use crate::Error;
use crate::strength::PasswordStrengthCounter;

/// Raw inputs from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub unique_chars: bool,
    pub classes: Vec<Class>,
    pub include: String,
    pub exclude: String,
}

impl Request {
    /// Resolve the charset: enabled classes in canonical order, then the
    /// custom include string, minus the custom exclude string.
    pub fn charset(&self) -> Charset {
        let mut builder = CharsetBuilder::new();
        for class in Class::ALL {
            if self.classes.contains(&class) {
                builder.include_class(class);
            }
        }
        builder.include_chars(&self.include).exclude_chars(&self.exclude);
        builder.build()
    }
}

/// A password together with its ladder score.
#[derive(Debug)]
pub struct Generated {
    pub password: Password,
    pub strength: f64,
    pub charset_len: usize,
}

/// Build, validate, generate and score in one step.
pub fn create(request: &Request) -> Result<Generated, Error> {
    create_with(&mut rand::rng(), request)
}

pub fn create_with<R: rand::Rng + ?Sized>(rng: &mut R, request: &Request) -> Result<Generated, Error> {
    if request.length == 0 || request.length > MAX_LENGTH {
        return Err(Error::InvalidLength);
    }

    let charset = request.charset();
    validate(request.length, request.unique_chars, &charset)?;

    let password = generate_with(rng, request.length, request.unique_chars, &charset)?;
    let strength = PasswordStrengthCounter::canonical().count_strength(password.as_str());
    debug!(length = request.length, charset = charset.len(), strength, "password created");

    Ok(Generated {
        password,
        strength,
        charset_len: charset.len(),
    })
}

/// Estimated entropy in bits for a password of `length` drawn from `charset_len` chars.
pub fn entropy_bits(length: usize, charset_len: usize) -> f64 {
    if charset_len == 0 {
        return 0.0;
    }
    length as f64 * (charset_len as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(length: usize, unique_chars: bool, classes: &[Class]) -> Request {
        Request {
            length,
            unique_chars,
            classes: classes.to_vec(),
            include: String::new(),
            exclude: String::new(),
        }
    }

    #[test]
    fn no_classes_means_empty_charset() {
        let err = create(&request(5, false, &[])).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyCharset)));
    }

    #[test]
    fn unique_request_longer_than_charset() {
        let mut req = request(5, true, &[]);
        req.include = "ab".into();
        let err = create(&req).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::CharsetTooSmall { .. })));
    }

    #[test]
    fn zero_length_rejected() {
        let err = create(&request(0, false, &Class::ALL)).unwrap_err();
        assert!(matches!(err, Error::InvalidLength));
    }

    #[test]
    fn huge_length_rejected() {
        let err = create(&request(usize::MAX, false, &[Class::Lowercase])).unwrap_err();
        assert!(matches!(err, Error::InvalidLength));
        let err = create(&request(MAX_LENGTH + 1, true, &Class::ALL)).unwrap_err();
        assert!(matches!(err, Error::InvalidLength));
    }

    #[test]
    fn exclude_strips_class_members() {
        let mut req = request(40, false, &[Class::Digits]);
        req.exclude = "0123456789".into();
        req.include = "z".into();
        let generated = create(&req).unwrap();
        assert!(generated.password.as_str().chars().all(|c| c == 'z'));
        assert_eq!(generated.charset_len, 1);
    }

    #[test]
    fn class_order_does_not_matter() {
        let a = request(1, false, &[Class::Digits, Class::Lowercase]);
        let b = request(1, false, &[Class::Lowercase, Class::Digits]);
        assert_eq!(a.charset().as_slice(), b.charset().as_slice());
    }

    #[test]
    fn strength_is_within_bounds() {
        let generated = create(&request(32, false, &Class::ALL)).unwrap();
        assert!((0.0..=1.0).contains(&generated.strength));
        assert_eq!(generated.password.len(), 32);
    }

    #[test]
    fn entropy_estimate() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
        assert!((entropy_bits(16, 94) - 104.87).abs() < 0.01);
    }
}
