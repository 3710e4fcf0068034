//! Character set building for password generation.

use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::trace;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

static CLASSES: LazyLock<[Charset; 4]> = LazyLock::new(|| {
    [
        Charset::from_iter(LOWERCASE.chars()),
        Charset::from_iter(UPPERCASE.chars()),
        Charset::from_iter(DIGITS.chars()),
        Charset::from_iter(PUNCTUATION.chars()),
    ]
});

/// One of the four canonical character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Lowercase,
    Uppercase,
    Digits,
    Punctuation,
}

impl Class {
    pub const ALL: [Class; 4] = [
        Class::Lowercase,
        Class::Uppercase,
        Class::Digits,
        Class::Punctuation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Class::Lowercase => LOWERCASE,
            Class::Uppercase => UPPERCASE,
            Class::Digits => DIGITS,
            Class::Punctuation => PUNCTUATION,
        }
    }

    pub fn charset(self) -> &'static Charset {
        &CLASSES[self as usize]
    }
}

/// The canonical classes in ladder order: lowercase, uppercase, digits, punctuation.
pub fn classes() -> &'static [Charset] {
    CLASSES.as_slice()
}

/// A set of distinct characters.
///
/// Characters keep the order in which they were first added so a seeded
/// generator reproduces the same password. Equality ignores that order.
#[derive(Debug, Clone, Default)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let chars = iter.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { chars }
    }
}

impl From<&str> for Charset {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for Charset {}

/// Accumulates included and excluded characters, then resolves them.
///
/// ```
/// use safepass::pass::CharsetBuilder;
///
/// let charset = CharsetBuilder::new()
///     .include_chars("ab")
///     .exclude_chars("b")
///     .build();
/// assert_eq!(charset.as_slice(), &['a']);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharsetBuilder {
    included: String,
    excluded: String,
}

impl CharsetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append characters to the included pool. Duplicates are fine.
    pub fn include_chars(&mut self, chars: &str) -> &mut Self {
        self.included.push_str(chars);
        self
    }

    /// Append characters to the excluded pool.
    pub fn exclude_chars(&mut self, chars: &str) -> &mut Self {
        self.excluded.push_str(chars);
        self
    }

    pub fn include_class(&mut self, class: Class) -> &mut Self {
        self.include_chars(class.as_str())
    }

    /// Resolve to every included character that is not excluded.
    ///
    /// Does not consume or reset the builder, so repeated calls return the
    /// same set.
    pub fn build(&self) -> Charset {
        let excluded: HashSet<char> = self.excluded.chars().collect();
        let charset: Charset = self
            .included
            .chars()
            .filter(|c| !excluded.contains(c))
            .collect();
        trace!(
            included = self.included.chars().count(),
            excluded = excluded.len(),
            resolved = charset.len(),
            "resolved charset"
        );
        charset
    }
}
