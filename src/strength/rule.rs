//! Predicates the strength ladder is built from.

use std::collections::HashMap;

use crate::pass::Charset;

/// A single check over a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrengthRule {
    /// At least this many characters.
    MinimumLength(usize),
    /// Not one character repeated for the whole password.
    PresentDistinctChars,
    /// At least `min_present` of `subsets` have a representative in the password.
    PresentCharsubsets { subsets: Vec<Charset>, min_present: usize },
}

impl StrengthRule {
    pub fn is_satisfied(&self, password: &str) -> bool {
        match self {
            StrengthRule::MinimumLength(min) => password.chars().count() >= *min,
            StrengthRule::PresentDistinctChars => has_distinct_chars(password),
            StrengthRule::PresentCharsubsets {
                subsets,
                min_present,
            } => {
                let present = subsets
                    .iter()
                    .filter(|subset| password.chars().any(|c| subset.contains(c)))
                    .count();
                present >= *min_present
            }
        }
    }
}

// Some character occurs fewer times than the password is long. A single
// character (count == length) or an empty password never qualifies.
fn has_distinct_chars(password: &str) -> bool {
    let length = password.chars().count();
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_default() += 1;
    }
    counts.values().any(|&count| count < length)
}
