//! Spawn decision engine.
//!
//! Decides when an encounter starts for a player session. Location updates
//! accrue walking distance and roll against the spawn probability once the
//! distance and cooldown gates are met; timer ticks only require that no
//! encounter is active. Either way the enemy class is a weighted draw.

use std::time::Instant;
use log::{debug, info};
use rand::Rng;

use geoquest_shared::{EncounterView, SpawnConfig, SpawnResponse};

use crate::config::GameData;
use crate::entities::{EnemyEncounter, LocationFix, PlayerSession, SpawnSource};
use crate::error::{GameError, Result};
use super::GeoPoint;

/// What caused a spawn evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnTrigger {
    /// A new validated location fix from the client
    Location(GeoPoint),
    /// A client-driven timer tick
    Tick,
}

/// Outcome of one spawn evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnResult {
    pub encounter: Option<EncounterView>,
    pub distance_traveled: f64,
    pub distance_accumulated: f64,
}

impl SpawnResult {
    pub fn spawned(&self) -> bool {
        self.encounter.is_some()
    }

    pub fn into_response(self) -> SpawnResponse {
        SpawnResponse {
            spawn: self.spawned(),
            enemy: self.encounter.as_ref().map(|e| e.enemy.clone()),
            enemy_stats: self.encounter,
            distance_traveled: self.distance_traveled,
            distance_accumulated: self.distance_accumulated,
        }
    }
}

/// Enemy ids with cumulative weights for binary-search selection
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEnemyTable {
    ids: Vec<String>,
    cumulative: Vec<f64>,
}

impl WeightedEnemyTable {
    /// Build from a spawn config. Zero weights are dropped; returns None when
    /// no positive weight remains.
    pub fn from_config(config: &SpawnConfig) -> Option<Self> {
        let mut ids = Vec::new();
        let mut cumulative = Vec::new();
        let mut total = 0.0;

        for (id, &weight) in &config.enemy_weights {
            if weight > 0.0 && weight.is_finite() {
                total += weight;
                ids.push(id.clone());
                cumulative.push(total);
            }
        }

        if ids.is_empty() {
            return None;
        }
        Some(Self { ids, cumulative })
    }

    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Draw uniformly over the summed weight range and locate its bucket
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let roll = rng.gen_range(0.0..self.total_weight());
        let index = self.cumulative.partition_point(|&c| c <= roll);
        &self.ids[index.min(self.ids.len() - 1)]
    }
}

/// Evaluate a location update or timer tick for a session
pub fn evaluate_spawn<R: Rng>(
    session: &mut PlayerSession,
    trigger: SpawnTrigger,
    data: &GameData,
    now: Instant,
    rng: &mut R,
) -> Result<SpawnResult> {
    session.ensure_playing()?;

    let distance_traveled = match trigger {
        SpawnTrigger::Location(point) => {
            let previous = session.last_location.replace(LocationFix { point, at: now });
            match previous {
                Some(previous) => {
                    let distance = previous.point.distance_to(&point);
                    session.distance_since_last_spawn += distance;
                    distance
                }
                // First fix only establishes the reference point
                None => return Ok(no_spawn(session, 0.0)),
            }
        }
        SpawnTrigger::Tick => 0.0,
    };

    if session.active_enemy.is_some() || data.spawn.max_enemies_per_area == 0 {
        return Ok(no_spawn(session, distance_traveled));
    }

    let source = match trigger {
        SpawnTrigger::Location(_) => {
            if !location_gates_open(session, &data.spawn, now) {
                return Ok(no_spawn(session, distance_traveled));
            }
            let roll: f64 = rng.gen();
            if roll >= data.spawn.spawn_probability {
                debug!("Player {} spawn roll {:.3} missed", session.id, roll);
                return Ok(no_spawn(session, distance_traveled));
            }
            SpawnSource::Location
        }
        SpawnTrigger::Tick => SpawnSource::Timer,
    };

    let enemy_id = data.enemy_table.pick(rng).to_string();
    let encounter = start_encounter(session, &enemy_id, source, data, now)?;

    Ok(SpawnResult {
        encounter: Some(encounter),
        distance_traveled,
        distance_accumulated: session.distance_since_last_spawn,
    })
}

/// Force a specific enemy class to appear
pub fn spawn_enemy_by_id(
    session: &mut PlayerSession,
    enemy_id: &str,
    data: &GameData,
    now: Instant,
) -> Result<SpawnResult> {
    session.ensure_playing()?;
    if data.enemy(enemy_id).is_none() {
        return Err(GameError::UnknownEnemy(enemy_id.to_string()));
    }
    if session.active_enemy.is_some() {
        return Err(GameError::EncounterActive);
    }

    let encounter = start_encounter(session, enemy_id, SpawnSource::Manual, data, now)?;
    Ok(SpawnResult {
        encounter: Some(encounter),
        distance_traveled: 0.0,
        distance_accumulated: session.distance_since_last_spawn,
    })
}

fn location_gates_open(session: &PlayerSession, config: &SpawnConfig, now: Instant) -> bool {
    if session.distance_since_last_spawn < config.spawn_distance_meters {
        return false;
    }
    match session.last_spawn_at {
        Some(last) => now.saturating_duration_since(last).as_secs_f32() >= config.spawn_cooldown_secs,
        None => true,
    }
}

fn start_encounter(
    session: &mut PlayerSession,
    enemy_id: &str,
    source: SpawnSource,
    data: &GameData,
    now: Instant,
) -> Result<EncounterView> {
    let class = data
        .enemy(enemy_id)
        .ok_or_else(|| GameError::UnknownEnemy(enemy_id.to_string()))?;

    let encounter = EnemyEncounter::new(class, source);
    let view = encounter.view();

    session.active_enemy = Some(encounter);
    session.distance_since_last_spawn = 0.0;
    session.last_spawn_at = Some(now);

    info!("Spawned {} for player {} ({})", class.display_name, session.id, source.name());
    Ok(view)
}

fn no_spawn(session: &PlayerSession, distance_traveled: f64) -> SpawnResult {
    SpawnResult {
        encounter: None,
        distance_traveled,
        distance_accumulated: session.distance_since_last_spawn,
    }
}
