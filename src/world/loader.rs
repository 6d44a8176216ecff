use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use super::model::{Enemy, Exit, Item, PlayerConfig, Room, World};
use super::validator::{ValidationError, validate_world};

/// The cave map, compiled into the binary.
pub const DEFAULT_WORLD: &str = include_str!("../../worlds/cave.toml");

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to parse world: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world: {0}")]
    Invalid(String),

    #[error("world failed validation: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    player: PlayerSection,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
}

#[derive(Deserialize, Default)]
struct PlayerSection {
    #[serde(default)]
    health: Option<i32>,
    #[serde(default)]
    base_power: Option<u32>,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
    #[serde(default)]
    enemy: Option<EnemyConfig>, // [room.enemy]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    power: u32,
}

#[derive(Deserialize)]
struct EnemyConfig {
    name: String,
    health: i32,
    power: u32,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load the built-in cave map.
pub fn load_default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Parse and validate a world document.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Invalid("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Invalid(
            "world.start_room may not be empty".into(),
        ));
    }

    let defaults = PlayerConfig::default();
    let player = PlayerConfig {
        health: world_file.player.health.unwrap_or(defaults.health),
        base_power: world_file.player.base_power.unwrap_or(defaults.base_power),
    };

    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Invalid(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
            })
            .collect();

        let items = room_cfg
            .item
            .into_iter()
            .map(|i| Item {
                name: i.name.trim().to_string(),
                desc: normalize_multiline_desc(&i.desc),
                power: i.power,
            })
            .collect();

        let enemy = room_cfg.enemy.map(|e| Enemy {
            name: e.name.trim().to_string(),
            health: e.health,
            power: e.power,
        });

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                exits,
                items,
                enemy,
            },
        );
    }

    let world = World {
        id: world_file.world.id,
        name: world_file.world.name,
        start_room: world_file.world.start_room,
        player,
        rooms: rooms_map,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Validation(errors));
    }

    debug!(world = %world.id, rooms = world.rooms.len(), "world loaded");
    Ok(world)
}

/// Collapse the line wrapping of TOML multi-line strings:
/// a single newline becomes a space, one blank line a newline,
/// two or more a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);

        pending_blank_lines = 0;
    }

    result
}
