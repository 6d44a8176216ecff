pub mod console;
pub mod engine;
pub mod world;

use thiserror::Error;
use tracing::{debug, info};

use engine::{
    Dice, FightOutcome, Output, RandomDice, handle_fight, handle_go, handle_inventory, handle_take,
    render_room,
};
use world::{Player, Room, World, WorldError};

pub use world::{load_default_world, load_world_from_str};

pub const COMMAND_HELP: &str = "Commands: look, go [direction], take [item], inventory, fight, quit";
pub const FAREWELL: &str = "Thanks for playing!";

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    World(#[from] WorldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One play session: the live world, where the player stands, and the
/// dice used for combat.
pub struct GameState {
    pub world: World,
    pub current_room_id: String,
    pub player: Player,
    pristine: World,
    dice: Box<dyn Dice>,
}

impl GameState {
    pub fn new(world: World, dice: impl Dice + 'static) -> Self {
        let mut state = GameState {
            current_room_id: world.start_room.clone(),
            player: Player::new(world.player),
            pristine: world.clone(),
            world,
            dice: Box::new(dice),
        };
        state.initialize();
        state
    }

    /// The built-in cave with entropy-seeded dice.
    pub fn with_default_world() -> Result<Self, GameError> {
        Ok(Self::new(load_default_world()?, RandomDice::from_entropy()))
    }

    /// Restore every room and the player to their starting state.
    pub fn initialize(&mut self) {
        self.world = self.pristine.clone();
        self.current_room_id = self.world.start_room.clone();
        self.player = Player::new(self.world.player);
        info!(world = %self.world.id, start = %self.current_room_id, "session initialized");
    }

    /// Opening line, named after the loaded world.
    pub fn welcome(&self) -> String {
        format!("Welcome to {}!", self.world.name)
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.world.rooms.get(&self.current_room_id)
    }

    /// Process a single player input; returns (output, flow).
    pub fn step(&mut self, input: &str) -> (Output, Flow) {
        let mut out = Output::new();
        let mut words = input.split_whitespace();

        let Some(verb) = words.next() else {
            return (out, Flow::Continue);
        };
        let arg = words.next();

        if !self.world.rooms.contains_key(&self.current_room_id) {
            out.say(format!(
                "Error: you are in an unknown room '{}'",
                self.current_room_id
            ));
            return (out, Flow::Quit);
        }

        match (verb, arg) {
            ("look", _) => {
                if let Some(room) = self.current_room() {
                    render_room(&mut out, room);
                }
            }
            ("go", None) => out.say("Go where?"),
            ("go", Some(direction)) => {
                if handle_go(&mut out, &mut self.current_room_id, &self.world, direction) {
                    if let Some(room) = self.current_room() {
                        render_room(&mut out, room);
                    }
                }
            }
            ("take", None) => out.say("Take what?"),
            ("take", Some(name)) => {
                if let Some(room) = self.world.rooms.get_mut(&self.current_room_id) {
                    handle_take(&mut out, room, &mut self.player, name);
                }
            }
            ("inventory", _) => handle_inventory(&mut out, &self.player),
            ("fight", _) => {
                let base_power = self.world.player.base_power;
                if let Some(room) = self.world.rooms.get_mut(&self.current_room_id) {
                    let outcome = handle_fight(
                        &mut out,
                        room,
                        &mut self.player,
                        base_power,
                        self.dice.as_mut(),
                    );
                    if let FightOutcome::Victory { .. } | FightOutcome::Defeat { .. } = outcome {
                        info!(?outcome, player_health = self.player.health, "fight resolved");
                    }
                }
            }
            ("quit", _) => {
                out.say(FAREWELL);
                info!("player quit");
                return (out, Flow::Quit);
            }
            _ => {
                debug!(verb, "unrecognized command");
                out.say("I don't understand that command.");
            }
        }

        if self.player.is_dead() {
            out.say("Game Over! You have died.");
            info!("game over");
            return (out, Flow::Quit);
        }

        (out, Flow::Continue)
    }
}
