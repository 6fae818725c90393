//! Shared stat tables: character classes, enemy classes and tuning knobs.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::{get_skill_set, Skill};

/// A playable hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: String,
    pub display_name: String,
    pub max_hp: u32,
    pub base_attack: u32,
    /// Ordered, at most `MAX_SKILLS_PER_CHARACTER` entries
    pub skill_set: Vec<Skill>,
}

impl CharacterClass {
    fn new(id: &str, display_name: &str, max_hp: u32, base_attack: u32) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            max_hp,
            base_attack,
            skill_set: get_skill_set(id),
        }
    }

    /// Find a skill in this class's set by name
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skill_set.iter().find(|s| s.name == name)
    }
}

/// An enemy that can be encountered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyClass {
    pub id: String,
    pub display_name: String,
    pub max_hp: u32,
    pub attack: u32,
    pub xp_reward: u64,
}

impl EnemyClass {
    fn new(id: &str, display_name: &str, max_hp: u32, attack: u32, xp_reward: u64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            max_hp,
            attack,
            xp_reward,
        }
    }
}

/// Spawn tuning. May be overridden per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Accumulated walking distance needed before a spawn roll
    pub spawn_distance_meters: f64,
    /// Chance a roll produces an enemy, in [0, 1]
    pub spawn_probability: f64,
    /// Enemy id -> relative weight. Need not sum to 1.
    pub enemy_weights: BTreeMap<String, f64>,
    /// 0 disables automatic spawning
    pub max_enemies_per_area: u32,
    pub spawn_cooldown_secs: f32,
    pub area_radius_meters: f64,
    /// Suggested interval for client-driven timer spawns
    pub auto_spawn_interval_secs: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let enemy_weights = [("goblin", 0.5), ("orc", 0.3), ("dragon", 0.2)]
            .into_iter()
            .map(|(id, w)| (id.to_string(), w))
            .collect();

        Self {
            spawn_distance_meters: 1.0,
            spawn_probability: 1.0,
            enemy_weights,
            max_enemies_per_area: 3,
            spawn_cooldown_secs: 10.0,
            area_radius_meters: 1.0,
            auto_spawn_interval_secs: 15.0,
        }
    }
}

/// Combat and progression constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub heal_cooldown_secs: f32,
    pub heal_amount: u32,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub dodge_chance: f64,
    /// XP needed per level; leaving level N needs `xp_per_level * N` total XP
    pub xp_per_level: u64,
    /// Max HP gained on each level up
    pub hp_per_level: u32,
    pub skill_points_per_level: u32,
}

impl Default for GameConstants {
    fn default() -> Self {
        Self {
            heal_cooldown_secs: 10.0,
            heal_amount: 25,
            crit_chance: 0.1,
            crit_multiplier: 2.0,
            dodge_chance: 0.05,
            xp_per_level: 100,
            hp_per_level: 10,
            skill_points_per_level: 1,
        }
    }
}

impl GameConstants {
    /// Total XP required to advance past `level`
    pub fn xp_required(&self, level: u32) -> u64 {
        self.xp_per_level.max(1) * u64::from(level)
    }
}

/// Get all playable character classes
pub fn get_character_definitions() -> Vec<CharacterClass> {
    vec![
        CharacterClass::new("warrior", "Volta", 120, 15),
        CharacterClass::new("mage", "Pedro Penduko", 80, 25),
        CharacterClass::new("archer", "Kidlat", 100, 18),
        CharacterClass::new("healer", "Victor Magtanggol", 110, 12),
        CharacterClass::new("rogue", "WanPakMan", 90, 20),
    ]
}

/// Get all enemy classes
pub fn get_enemy_definitions() -> Vec<EnemyClass> {
    vec![
        EnemyClass::new("goblin", "Goblin", 30, 5, 10),
        EnemyClass::new("orc", "Orc", 50, 10, 25),
        EnemyClass::new("dragon", "Dragon", 100, 15, 50),
    ]
}
