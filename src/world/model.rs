use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug, Clone)]
pub struct World {
    pub id: String,
    pub name: String,
    pub start_room: String,
    pub player: PlayerConfig,
    pub rooms: HashMap<String, Room>,
}

impl World {
    /// Items still lying in rooms, across the whole map.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>, // pickup order is insertion order
    pub enemy: Option<Enemy>,
}

impl Room {
    /// Exact, case-sensitive lookup of an exit by its direction label.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub power: u32, // bonus added to combat power while carried
}

impl Item {
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub power: u32, // max damage per turn
}

impl Enemy {
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// Starting values for a fresh player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    pub health: i32,
    pub base_power: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            health: 100,
            base_power: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub health: i32,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Player {
            health: config.health,
            inventory: Vec::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Base power plus the bonus of every carried item.
    pub fn combat_power(&self, base_power: u32) -> u32 {
        self.inventory
            .iter()
            .fold(base_power, |acc, item| acc.saturating_add(item.power))
    }
}
