//! Server-side player session.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use geoquest_shared::{CharacterClass, EnemyClass, GameConstants, LeaderboardResponse, PlayerSessionView};

use crate::entities::EnemyEncounter;
use crate::error::{GameError, Result};
use crate::world::GeoPoint;

/// Last accepted location and when it was received
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub point: GeoPoint,
    pub at: Instant,
}

/// Per-player game state. Owned by the session store; never shared between players.
#[derive(Debug)]
pub struct PlayerSession {
    pub id: String,
    pub character_class_id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub experience: u64,
    /// Enemy class id -> kills
    pub kill_counts: BTreeMap<String, u32>,
    pub last_location: Option<LocationFix>,
    /// Meters walked since the last spawn; never negative
    pub distance_since_last_spawn: f64,
    pub last_spawn_at: Option<Instant>,
    pub last_heal_at: Option<Instant>,
    pub active_enemy: Option<EnemyEncounter>,
    /// Skill name -> last use
    pub skill_cooldowns: HashMap<String, Instant>,
    /// Skill name -> upgrade level
    pub skill_levels: HashMap<String, u32>,
    pub skill_points: u32,
    /// Set once the player is defeated
    pub concluded: bool,
    pub last_activity: Instant,
}

impl PlayerSession {
    /// Create a fresh level 1 session for a character class
    pub fn new(id: String, class: &CharacterClass, now: Instant) -> Self {
        Self {
            id,
            character_class_id: class.id.clone(),
            name: class.display_name.clone(),
            health: class.max_hp,
            max_health: class.max_hp,
            level: 1,
            experience: 0,
            kill_counts: BTreeMap::new(),
            last_location: None,
            distance_since_last_spawn: 0.0,
            last_spawn_at: None,
            last_heal_at: None,
            active_enemy: None,
            skill_cooldowns: HashMap::new(),
            skill_levels: HashMap::new(),
            skill_points: 0,
            concluded: false,
            last_activity: now,
        }
    }

    /// Start every enemy class at zero kills so the leaderboard keeps one shape
    pub fn seed_kill_counts(&mut self, enemies: &[EnemyClass]) {
        for enemy in enemies {
            self.kill_counts.entry(enemy.id.clone()).or_insert(0);
        }
    }

    /// Reject operations on a defeated player
    pub fn ensure_playing(&self) -> Result<()> {
        if self.concluded {
            return Err(GameError::SessionConcluded);
        }
        Ok(())
    }

    /// Take damage, floored at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Restore up to `amount` HP, capped at max. Returns HP actually restored.
    pub fn restore_health(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Add XP and apply every level threshold crossed.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u64, constants: &GameConstants) -> u32 {
        self.experience += amount;

        let mut gained = 0;
        while self.experience >= constants.xp_required(self.level) {
            self.level += 1;
            self.max_health += constants.hp_per_level;
            self.health = self.max_health;
            self.skill_points += constants.skill_points_per_level;
            gained += 1;
        }
        gained
    }

    pub fn record_kill(&mut self, enemy_class_id: &str) {
        *self.kill_counts.entry(enemy_class_id.to_string()).or_insert(0) += 1;
    }

    /// Seconds left on the standalone heal, if any
    pub fn heal_cooldown_remaining(&self, now: Instant, constants: &GameConstants) -> Option<f32> {
        cooldown_remaining(self.last_heal_at, now, constants.heal_cooldown_secs)
    }

    /// Seconds left before a skill can be used again, if any
    pub fn skill_cooldown_remaining(&self, skill: &str, cooldown_secs: f32, now: Instant) -> Option<f32> {
        cooldown_remaining(self.skill_cooldowns.get(skill).copied(), now, cooldown_secs)
    }

    pub fn skill_level(&self, skill: &str) -> u32 {
        self.skill_levels.get(skill).copied().unwrap_or(0)
    }

    pub fn view(&self) -> PlayerSessionView {
        PlayerSessionView {
            name: self.name.clone(),
            character: self.character_class_id.clone(),
            current_hp: self.health,
            max_hp: self.max_health,
            level: self.level,
            xp: self.experience,
            skill_points: self.skill_points,
            encounter: self.active_enemy.as_ref().map(EnemyEncounter::view),
        }
    }

    pub fn leaderboard(&self) -> LeaderboardResponse {
        LeaderboardResponse {
            level: self.level,
            xp: self.experience,
            kills: self.kill_counts.clone(),
        }
    }
}

fn cooldown_remaining(last_use: Option<Instant>, now: Instant, cooldown_secs: f32) -> Option<f32> {
    let last_use = last_use?;
    let elapsed = now.saturating_duration_since(last_use).as_secs_f32();
    if elapsed < cooldown_secs {
        Some(cooldown_secs - elapsed)
    } else {
        None
    }
}
