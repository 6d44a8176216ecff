use tracing::{debug, warn};

use crate::engine::output::Output;
use crate::world;

/// Follow the exit labelled exactly `direction` out of the current room.
/// Returns true when the player changed rooms.
pub fn handle_go(
    out: &mut Output,
    current_room_id: &mut String,
    world: &world::World,
    direction: &str,
) -> bool {
    let exit = match world
        .rooms
        .get(current_room_id.as_str())
        .and_then(|room| room.exit(direction))
    {
        Some(e) => e,
        None => {
            out.say(format!("You can't go {} from here.", direction));
            return false;
        }
    };

    do_move(out, current_room_id, world, exit)
}

fn do_move(
    out: &mut Output,
    current_room_id: &mut String,
    world: &world::World,
    exit: &world::Exit,
) -> bool {
    if !world.rooms.contains_key(&exit.target) {
        warn!(target_room = %exit.target, "exit leads to a missing room");
        out.say(format!(
            "You try to go {}, but something feels wrong (room not found).",
            exit.direction
        ));
        return false;
    }
    debug!(from = %current_room_id, to = %exit.target, "player moved");
    out.say(format!("You move {}.", exit.direction));
    *current_room_id = exit.target.clone();
    true
}
