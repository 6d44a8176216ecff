use tracing::debug;

use crate::engine::output::Output;
use crate::world;

/// Move the first item in the room whose name matches `target_name`
/// (ignoring case) into the player's inventory.
pub fn handle_take(
    out: &mut Output,
    room: &mut world::Room,
    player: &mut world::Player,
    target_name: &str,
) -> bool {
    let Some(idx) = room.items.iter().position(|i| i.name_matches(target_name)) else {
        out.say(format!("There's no {} here.", target_name));
        return false;
    };

    let item = room.items.remove(idx);
    out.say(format!("You took the {}.", item.name));
    debug!(item = %item.name, room = %room.id, "item taken");
    player.inventory.push(item);
    true
}

pub fn handle_inventory(out: &mut Output, player: &world::Player) {
    if player.inventory.is_empty() {
        out.say("Your inventory is empty.");
        return;
    }

    out.say("Your inventory:");
    for item in &player.inventory {
        out.say(format!("- {} (Power: {})", item.name, item.power));
    }
    out.say(format!("Your health: {}", player.health));
}
