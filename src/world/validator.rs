use std::collections::HashSet;
use std::fmt;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if world.player.health <= 0 {
        errors.push(ValidationError::new(format!(
            "player health must be positive, got {}",
            world.player.health
        )));
    }

    if world.player.base_power == 0 {
        errors.push(ValidationError::new("player base_power must be at least 1"));
    }

    // Sorted so the report reads the same on every run
    let mut room_ids: Vec<&String> = world.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let room = &world.rooms[room_id];

        let mut seen_dirs: HashSet<&str> = HashSet::new();
        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            }
            if !seen_dirs.insert(exit.direction.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one '{}' exit",
                    room_id, exit.direction
                )));
            }
        }

        let mut seen_items: HashSet<String> = HashSet::new();
        for item in &room.items {
            if item.name.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an item with an empty name",
                    room_id
                )));
            }
            if !seen_items.insert(item.name.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one item named '{}'",
                    room_id, item.name
                )));
            }
        }

        if let Some(enemy) = &room.enemy {
            if enemy.health <= 0 {
                errors.push(ValidationError::new(format!(
                    "enemy '{}' in room '{}' must start with positive health",
                    enemy.name, room_id
                )));
            }
            if enemy.power == 0 {
                errors.push(ValidationError::new(format!(
                    "enemy '{}' in room '{}' must have power of at least 1",
                    enemy.name, room_id
                )));
            }
        }
    }

    errors
}
