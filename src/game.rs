use crate::enums::Outcome;
use crate::hand::Hand;
use crate::player::Player;

/// What happened in one round. Lives only long enough to be reported.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub hand1: Hand,
    pub hand2: Hand,
    pub outcome: Outcome,
}

/// Final tallies once the round budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: [u32; 2],
}

impl MatchResult {
    /// Index of the player with strictly more round wins, or `None` on a draw.
    pub fn winner(&self) -> Option<usize> {
        if self.wins[0] > self.wins[1] {
            Some(0)
        } else if self.wins[1] > self.wins[0] {
            Some(1)
        } else {
            None
        }
    }
}

pub struct Game {
    players: [Player; 2],
    wins: [u32; 2],
    rounds_played: u32,
    total_rounds: u32,
}

impl Game {
    pub fn new(player1: Player, player2: Player, total_rounds: u32) -> Self {
        Game {
            players: [player1, player2],
            wins: [0; 2],
            rounds_played: 0,
            total_rounds,
        }
    }

    pub fn player_name(&self, index: usize) -> &str {
        self.players[index].name()
    }

    /// Plays one round and returns its record.
    pub fn advance(&mut self) -> Round {
        let hand1 = self.players[0].next_hand();
        let hand2 = self.players[1].next_hand();

        let outcome = Outcome::of(hand1, hand2);
        match outcome {
            Outcome::Win => self.wins[0] += 1,
            Outcome::Loss => self.wins[1] += 1,
            Outcome::Tie => {}
        }

        // Each player sees its own hand first.
        self.players[0].record_previous_round(hand1, hand2);
        self.players[1].record_previous_round(hand2, hand1);

        self.rounds_played += 1;
        Round {
            hand1,
            hand2,
            outcome,
        }
    }

    /// `Some` once the fixed round count has been played. Rounds never end
    /// a match early.
    pub fn game_over(&self) -> Option<MatchResult> {
        if self.rounds_played >= self.total_rounds {
            Some(MatchResult { wins: self.wins })
        } else {
            None
        }
    }
}
