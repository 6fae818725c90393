//! Server-side enemy encounter bound to one player session.

use geoquest_shared::{EncounterView, EnemyClass};

/// How an encounter came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    Location,
    Timer,
    Manual,
}

impl SpawnSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Timer => "timer",
            Self::Manual => "manual",
        }
    }
}

/// Live enemy state
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyEncounter {
    pub enemy_class_id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub source: SpawnSource,
}

impl EnemyEncounter {
    /// Instantiate an enemy at full health
    pub fn new(class: &EnemyClass, source: SpawnSource) -> Self {
        Self {
            enemy_class_id: class.id.clone(),
            name: class.display_name.clone(),
            health: class.max_hp,
            max_health: class.max_hp,
            source,
        }
    }

    /// Take damage, floored at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn view(&self) -> EncounterView {
        EncounterView {
            enemy: self.enemy_class_id.clone(),
            name: self.name.clone(),
            current_hp: self.health,
            max_hp: self.max_health,
        }
    }
}
