mod error;
mod hand;
mod enums;
mod strategy;
mod strategies;
mod player;
mod game;

use crate::game::Game;
use crate::player::Player;
use crate::strategies::adaptive::AdaptiveStrategy;

const ROUNDS: u32 = 10;

fn main() {
    let player1 = Player::with_random_strategy("Taro");
    let player2 = Player::new("Hanako", Box::new(AdaptiveStrategy::new()));

    let mut game = Game::new(player1, player2, ROUNDS);

    println!(
        "Janken: {} vs {}, {} rounds",
        game.player_name(0),
        game.player_name(1),
        ROUNDS
    );

    // Run the match loop until game_over returns the final tallies
    let result = loop {
        if let Some(result) = game.game_over() {
            break result;
        }
        let round = game.advance();
        println!(
            "{} {} - {} {} {}",
            game.player_name(0),
            round.hand1,
            round.hand2,
            game.player_name(1),
            round.outcome
        );
    };

    match result.winner() {
        Some(index) => println!(
            "{} - {} {} wins",
            result.wins[0],
            result.wins[1],
            game.player_name(index)
        ),
        None => println!("{} - {} draw", result.wins[0], result.wins[1]),
    }
}
