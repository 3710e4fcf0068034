//! Weighted, short-circuiting strength ladder.

use std::sync::LazyLock;

use tracing::trace;

use super::StrengthRule;
use crate::pass::charset::classes;

/// Total weight of a fully satisfied ladder, in the units rule weights use.
pub const MAX_WEIGHT: f64 = 100.0;

static CANONICAL: LazyLock<PasswordStrengthCounter> = LazyLock::new(PasswordStrengthCounter::default);

/// Scores a password against an ordered list of weighted rules.
///
/// Weights only count while every earlier rule holds: the first failing rule
/// stops the walk, so later rules cannot contribute even if they would pass.
#[derive(Debug, Clone)]
pub struct PasswordStrengthCounter {
    rules: Vec<(StrengthRule, f64)>,
}

impl PasswordStrengthCounter {
    pub fn new(rules: Vec<(StrengthRule, f64)>) -> Self {
        Self { rules }
    }

    /// The shared default ladder.
    pub fn canonical() -> &'static PasswordStrengthCounter {
        &CANONICAL
    }

    pub fn rules(&self) -> &[(StrengthRule, f64)] {
        &self.rules
    }

    /// Score in `[0.0, 1.0]` for ladders whose weights sum to [`MAX_WEIGHT`].
    pub fn count_strength(&self, password: &str) -> f64 {
        let mut total = 0.0;
        for (step, (rule, weight)) in self.rules.iter().enumerate() {
            if !rule.is_satisfied(password) {
                trace!(step, "strength ladder stopped");
                break;
            }
            total += weight;
        }
        total / MAX_WEIGHT
    }
}

impl Default for PasswordStrengthCounter {
    fn default() -> Self {
        let subsets = classes().to_vec();
        Self::new(vec![
            (StrengthRule::MinimumLength(1), 20.0),
            (StrengthRule::MinimumLength(8), 20.0),
            (StrengthRule::PresentDistinctChars, 20.0),
            (
                StrengthRule::PresentCharsubsets {
                    subsets: subsets.clone(),
                    min_present: 2,
                },
                20.0,
            ),
            (
                StrengthRule::PresentCharsubsets {
                    subsets,
                    min_present: 3,
                },
                20.0,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(password: &str) -> f64 {
        PasswordStrengthCounter::canonical().count_strength(password)
    }

    #[test]
    fn canonical_weights_sum_to_max() {
        let sum: f64 = PasswordStrengthCounter::canonical()
            .rules()
            .iter()
            .map(|(_, w)| w)
            .sum();
        assert_eq!(sum, MAX_WEIGHT);
    }

    #[test]
    fn single_char_stops_at_second_rung() {
        assert_eq!(score("a"), 0.2);
    }

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn lowercase_only_stops_at_charsubsets() {
        assert_eq!(score("abcdefgh"), 0.6);
    }

    #[test]
    fn two_classes() {
        assert_eq!(score("abcdefgH"), 0.8);
    }

    #[test]
    fn all_classes_full_score() {
        assert_eq!(score("Ab3!defg"), 1.0);
    }

    #[test]
    fn short_password_with_every_class_scores_low() {
        assert_eq!(score("A3!"), 0.2);
    }

    #[test]
    fn repeated_char_blocks_later_rungs() {
        assert_eq!(score("aaaaaaaa"), 0.4);
    }

    #[test]
    fn custom_ladder() {
        let counter = PasswordStrengthCounter::new(vec![
            (StrengthRule::PresentDistinctChars, 50.0),
            (StrengthRule::MinimumLength(4), 50.0),
        ]);
        assert_eq!(counter.count_strength("ab"), 0.5);
        assert_eq!(counter.count_strength("abcd"), 1.0);
        assert_eq!(counter.count_strength("aaaa"), 0.0);
    }
}
