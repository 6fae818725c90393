//! Game rules: geography, spawning and combat.

mod geo;
mod spawn;
mod combat;

pub use geo::GeoPoint;
pub use spawn::{evaluate_spawn, spawn_enemy_by_id, SpawnTrigger, WeightedEnemyTable};
pub use combat::{escape, heal, resolve_turn, upgrade_skill, TurnAction};
