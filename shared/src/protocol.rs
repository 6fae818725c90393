//! HTTP JSON contract shared between the game client and server.
//!
//! Request bodies keep every field optional so the server can reject a
//! missing value with its own message instead of a generic decode error.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// Views
// =============================================================================

/// Client-visible snapshot of a player session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSessionView {
    /// Hero display name
    pub name: String,
    /// Character class id
    pub character: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub level: u32,
    pub xp: u64,
    pub skill_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<EncounterView>,
}

/// Client-visible snapshot of an active enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterView {
    /// Enemy class id
    pub enemy: String,
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
}

// =============================================================================
// Client -> Server
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectCharacterRequest {
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationUpdateRequest {
    pub player_id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Body for requests that only identify the player (heal, escape, timer spawn)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRequest {
    pub player_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnEnemyRequest {
    pub player_id: Option<String>,
    pub enemy_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatTurnRequest {
    pub player_id: Option<String>,
    /// "attack", "skill" or "heal"
    pub action: Option<String>,
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeSkillRequest {
    pub player_id: Option<String>,
    pub skill_name: Option<String>,
}

/// Query string for the leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerQuery {
    pub player_id: Option<String>,
}

// =============================================================================
// Server -> Client
// =============================================================================

/// Failure body used by every endpoint except character selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Character selection reply; `status` is "ok" or "error"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCharacterResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerSessionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reply to location updates, timer ticks and manual spawns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnResponse {
    pub spawn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_stats: Option<EncounterView>,
    /// Meters covered by this update
    pub distance_traveled: f64,
    /// Meters accumulated toward the next spawn roll
    pub distance_accumulated: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatTurnResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_max_hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_defeated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_max_hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_defeated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_gained: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leveled_up: Option<bool>,
    /// Number of levels gained this turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels_gained: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_level: Option<u32>,
    pub combat_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealResponse {
    pub healed: u32,
    pub current_hp: u32,
    pub max_hp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeResponse {
    pub escaped: bool,
    pub combat_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSkillResponse {
    pub skill_name: String,
    pub new_level: u32,
    pub skill_points_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub level: u32,
    pub xp: u64,
    /// Enemy id -> kills
    pub kills: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}
