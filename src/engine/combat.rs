use tracing::{debug, info};

use crate::engine::dice::Dice;
use crate::engine::output::Output;
use crate::world;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FightOutcome {
    NoEnemy,
    Victory { enemy: String, turns: u32 },
    Defeat { enemy: String, turns: u32 },
}

/// Fight the room's enemy to the end.
///
/// Each turn the player strikes first for `1..=power` where power is
/// `base_power` plus the bonus of every carried item. An enemy brought to
/// zero health is removed from the room before it can strike back.
/// Otherwise it hits for `1..=enemy.power`. The loop only ends on a
/// victory or on the player's death.
pub fn handle_fight(
    out: &mut Output,
    room: &mut world::Room,
    player: &mut world::Player,
    base_power: u32,
    dice: &mut dyn Dice,
) -> FightOutcome {
    let Some(enemy) = room.enemy.as_mut() else {
        out.say("There's nothing to fight here.");
        return FightOutcome::NoEnemy;
    };

    let player_power = player.combat_power(base_power);
    out.event(format!("You engage in battle with the {}!", enemy.name));
    info!(enemy = %enemy.name, player_power, "fight started");

    let mut turns = 0u32;
    loop {
        turns += 1;

        let damage = dice.roll(player_power);
        enemy.health = enemy.health.saturating_sub_unsigned(damage);
        out.event(format!("You hit the {} for {} damage!", enemy.name, damage));
        debug!(turn = turns, damage, enemy_health = enemy.health, "player attack");

        if enemy.is_defeated() {
            out.event(format!("You have defeated the {}!", enemy.name));
            let name = enemy.name.clone();
            room.enemy = None;
            info!(enemy = %name, turns, "enemy defeated");
            return FightOutcome::Victory { enemy: name, turns };
        }

        let damage = dice.roll(enemy.power);
        player.health = player.health.saturating_sub_unsigned(damage);
        out.event(format!("The {} hits you for {} damage!", enemy.name, damage));
        debug!(turn = turns, damage, player_health = player.health, "enemy attack");

        if player.is_dead() {
            out.event("You have been defeated!");
            info!(enemy = %enemy.name, turns, "player defeated");
            return FightOutcome::Defeat {
                enemy: enemy.name.clone(),
                turns,
            };
        }

        out.event(format!(
            "Your health: {}, {}'s health: {}",
            player.health, enemy.name, enemy.health
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Enemy, Item, Player, PlayerConfig, Room};

    struct MaxDice;

    impl Dice for MaxDice {
        fn roll(&mut self, max: u32) -> u32 {
            max
        }
    }

    struct Scripted(Vec<u32>);

    impl Dice for Scripted {
        fn roll(&mut self, _max: u32) -> u32 {
            self.0.remove(0)
        }
    }

    fn arena(health: i32, power: u32) -> Room {
        Room {
            id: "arena".into(),
            name: "Arena".into(),
            desc: String::new(),
            exits: Vec::new(),
            items: Vec::new(),
            enemy: Some(Enemy {
                name: "Goblin".into(),
                health,
                power,
            }),
        }
    }

    fn armed(power: u32) -> Player {
        let mut player = Player::new(PlayerConfig::default());
        if power > 0 {
            player.inventory.push(Item {
                name: "Blade".into(),
                desc: String::new(),
                power,
            });
        }
        player
    }

    #[test]
    fn empty_room_has_nothing_to_fight() {
        let mut room = arena(20, 3);
        room.enemy = None;
        let mut player = armed(0);
        let mut out = Output::new();

        let outcome = handle_fight(&mut out, &mut room, &mut player, 1, &mut MaxDice);

        assert_eq!(outcome, FightOutcome::NoEnemy);
        assert_eq!(out.lines(), vec!["There's nothing to fight here."]);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn goblin_falls_in_ceil_health_over_power_turns() {
        for bonus in 0..=19u32 {
            let power = 1 + bonus;
            let mut room = arena(20, 3);
            let mut player = armed(bonus);
            let mut out = Output::new();

            let outcome = handle_fight(&mut out, &mut room, &mut player, 1, &mut MaxDice);

            let expected = 20u32.div_ceil(power);
            assert_eq!(
                outcome,
                FightOutcome::Victory {
                    enemy: "Goblin".into(),
                    turns: expected
                },
                "power {power}"
            );
            assert!(room.enemy.is_none());
            // no retaliation on the killing turn
            assert_eq!(player.health, 100 - 3 * (expected as i32 - 1));
        }
    }

    #[test]
    fn killing_blow_skips_retaliation() {
        let mut room = arena(5, 3);
        let mut player = armed(4);
        let mut out = Output::new();

        handle_fight(&mut out, &mut room, &mut player, 1, &mut MaxDice);

        assert_eq!(player.health, 100);
        assert_eq!(
            out.lines(),
            vec![
                "You engage in battle with the Goblin!",
                "You hit the Goblin for 5 damage!",
                "You have defeated the Goblin!",
            ]
        );
    }

    #[test]
    fn turn_report_follows_both_attacks() {
        let mut room = arena(4, 3);
        let mut player = armed(0);
        let mut out = Output::new();

        // player 2, goblin 3, player 2
        let outcome = handle_fight(&mut out, &mut room, &mut player, 1, &mut Scripted(vec![2, 3, 2]));

        assert_eq!(
            outcome,
            FightOutcome::Victory {
                enemy: "Goblin".into(),
                turns: 2
            }
        );
        assert_eq!(
            out.lines(),
            vec![
                "You engage in battle with the Goblin!",
                "You hit the Goblin for 2 damage!",
                "The Goblin hits you for 3 damage!",
                "Your health: 97, Goblin's health: 2",
                "You hit the Goblin for 2 damage!",
                "You have defeated the Goblin!",
            ]
        );
    }

    #[test]
    fn player_death_leaves_enemy_wounded() {
        let mut room = arena(100, 15);
        let mut player = armed(5);
        let mut out = Output::new();

        let outcome = handle_fight(&mut out, &mut room, &mut player, 1, &mut MaxDice);

        assert_eq!(
            outcome,
            FightOutcome::Defeat {
                enemy: "Goblin".into(),
                turns: 7
            }
        );
        assert_eq!(player.health, -5);
        assert_eq!(room.enemy.as_ref().map(|e| e.health), Some(58));
        assert_eq!(out.lines().last().copied(), Some("You have been defeated!"));
    }

    #[test]
    fn power_is_fixed_at_fight_start() {
        let mut room = arena(20, 1);
        let mut player = armed(2);
        let mut out = Output::new();

        handle_fight(&mut out, &mut room, &mut player, 1, &mut MaxDice);

        assert!(out.contains("You hit the Goblin for 3 damage!"));
        assert!(!out.contains("for 4 damage"));
    }
}
