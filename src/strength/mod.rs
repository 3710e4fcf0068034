//! Password strength scoring.

mod counter;
mod rule;

pub use counter::{MAX_WEIGHT, PasswordStrengthCounter};
pub use rule::StrengthRule;

/// Coarse banding of a ladder score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.4 {
            Strength::Weak
        } else if score <= 0.6 {
            Strength::Fair
        } else if score <= 0.8 {
            Strength::Good
        } else {
            Strength::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(Strength::from_score(0.0), Strength::Weak);
        assert_eq!(Strength::from_score(0.4), Strength::Weak);
        assert_eq!(Strength::from_score(0.6), Strength::Fair);
        assert_eq!(Strength::from_score(0.8), Strength::Good);
        assert_eq!(Strength::from_score(1.0), Strength::Strong);
    }
}
