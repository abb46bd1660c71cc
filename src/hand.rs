use std::fmt;

use rand::Rng;

use crate::error::HandError;

/// One of the three hands of janken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

impl Hand {
    /// All hands in index order (0 = Rock, 1 = Scissors, 2 = Paper).
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    pub fn from_index(index: u8) -> Result<Hand, HandError> {
        match index {
            0 => Ok(Hand::Rock),
            1 => Ok(Hand::Scissors),
            2 => Ok(Hand::Paper),
            _ => Err(HandError::InvalidIndex(index)),
        }
    }

    /// Draws a uniformly random hand.
    pub fn random(rng: &mut impl Rng) -> Hand {
        let index = rng.random_range(0..3);
        Hand::from_index(index).expect("index is in [0, 2]")
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Hand::Rock => "✊",
            Hand::Scissors => "✌",
            Hand::Paper => "✋",
        }
    }

    /// True iff this hand beats `other`.
    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    pub fn wins_against(self, other: Hand) -> bool {
        match self {
            Hand::Rock => other == Hand::Scissors,
            Hand::Scissors => other == Hand::Paper,
            Hand::Paper => other == Hand::Rock,
        }
    }

    /// True iff `other` beats this hand.
    pub fn loses_against(self, other: Hand) -> bool {
        self != other && !self.wins_against(other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
