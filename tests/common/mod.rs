#![allow(dead_code)]

use cave_adventure::engine::Dice;
use cave_adventure::{GameState, load_default_world};

/// Always rolls the top of the range.
pub struct MaxDice;

impl Dice for MaxDice {
    fn roll(&mut self, max: u32) -> u32 {
        max
    }
}

/// Always rolls a one.
pub struct MinDice;

impl Dice for MinDice {
    fn roll(&mut self, _max: u32) -> u32 {
        1
    }
}

pub fn new_game(dice: impl Dice + 'static) -> GameState {
    GameState::new(load_default_world().expect("built-in world loads"), dice)
}

/// Run each command in order, panicking if the session ends early.
pub fn play(game: &mut GameState, commands: &[&str]) {
    for cmd in commands {
        let (_, flow) = game.step(cmd);
        assert_eq!(flow, cave_adventure::Flow::Continue, "session ended at '{cmd}'");
    }
}
