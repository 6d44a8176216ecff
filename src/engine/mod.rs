mod combat;
mod dice;
mod items;
mod movement;
mod output;
mod render;

pub use combat::{FightOutcome, handle_fight};
pub use dice::{Dice, RandomDice};
pub use items::{handle_inventory, handle_take};
pub use movement::handle_go;
pub use output::{Output, OutputBlock};
pub use render::{ordered_exits, render_room};
