use crate::engine::output::Output;
use crate::world;

const COMPASS: [&str; 4] = ["north", "south", "east", "west"];

/// Exits in compass order; any other labels follow in the order they were defined.
pub fn ordered_exits(room: &world::Room) -> Vec<&world::Exit> {
    let mut exits: Vec<&world::Exit> = room.exits.iter().collect();
    exits.sort_by_key(|e| {
        COMPASS
            .iter()
            .position(|c| *c == e.direction)
            .unwrap_or(COMPASS.len())
    });
    exits
}

pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.desc.trim());

    if !room.items.is_empty() {
        out.say("Items in the room:");
        for item in &room.items {
            out.say(format!("- {}", item.name));
        }
    }

    if let Some(enemy) = &room.enemy {
        out.say(format!("There's a {} here!", enemy.name));
    }

    let mut exits = String::from("Exits:");
    for exit in ordered_exits(room) {
        exits.push_str("\n- ");
        exits.push_str(&exit.direction);
    }
    out.set_exits(exits);
}
