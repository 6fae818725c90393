//! Server-side entity definitions.

mod player;
mod enemy;

pub use player::{PlayerSession, LocationFix};
pub use enemy::{EnemyEncounter, SpawnSource};
