mod loader;
mod model;
mod validator;

pub use loader::{DEFAULT_WORLD, WorldError, load_default_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Enemy, Exit, Item, Player, PlayerConfig, Room, World};
pub use validator::{ValidationError, validate_world};
