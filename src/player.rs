use crate::hand::Hand;
use crate::strategies::random::RandomStrategy;
use crate::strategy::Strategy;

pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, strategy: Box<dyn Strategy>) -> Self {
        Player {
            name: name.to_string(),
            strategy,
        }
    }

    /// A player with the default strategy, a random one.
    pub fn with_random_strategy(name: &str) -> Self {
        Player::new(name, Box::new(RandomStrategy::new()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next_hand(&mut self) -> Hand {
        self.strategy.next_hand()
    }

    pub fn record_previous_round(&mut self, my_hand: Hand, his_hand: Hand) {
        self.strategy.record_previous_round(my_hand, his_hand);
    }
}
