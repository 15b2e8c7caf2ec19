use crate::config::{FactSet, QuizConfig};
use rand::Rng;
use std::fmt;

/// A single multiplication question.
///
/// `swapped` only changes which operand is printed first; scoring always
/// uses `left * right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// The drilled fact
    pub left: u32,
    /// Multiplier in `[0, max_multiplier]`
    pub right: u32,
    pub swapped: bool,
}

impl Question {
    pub fn correct_answer(&self) -> u64 {
        u64::from(self.left) * u64::from(self.right)
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        u64::try_from(answer).is_ok_and(|answer| answer == self.correct_answer())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.swapped {
            write!(f, "{} x {}", self.right, self.left)
        } else {
            write!(f, "{} x {}", self.left, self.right)
        }
    }
}

/// Draws questions from the configured facts with an explicitly owned random source
pub struct QuestionGenerator<R: Rng> {
    facts: FactSet,
    max_multiplier: u32,
    rng: R,
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn new(config: &QuizConfig, rng: R) -> Self {
        Self {
            facts: config.facts.clone(),
            max_multiplier: config.max_multiplier,
            rng,
        }
    }

    pub fn next_question(&mut self) -> Question {
        let facts = self.facts.as_slice();
        let left = facts[self.rng.random_range(0..facts.len())];
        let right = self.rng.random_range(0..=self.max_multiplier);

        // Fair coin for which side of the operator the fact appears on
        let swapped = self.rng.random_range(0..100) >= 50;

        Question {
            left,
            right,
            swapped,
        }
    }
}
