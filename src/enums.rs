use std::fmt;

use crate::hand::Hand;

/// Result of a single round, seen from player 1's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn of(hand1: Hand, hand2: Hand) -> Outcome {
        if hand1.wins_against(hand2) {
            Outcome::Win
        } else if hand1.loses_against(hand2) {
            Outcome::Loss
        } else {
            Outcome::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        };
        write!(f, "{}", label)
    }
}
