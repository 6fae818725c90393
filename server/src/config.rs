//! Server configuration and the loaded stat tables.
//!
//! Stat tables come from `geoquest_shared`. A deployment can override the
//! spawn tuning and game constants with a JSON file:
//!
//! ```json
//! { "spawn": { "spawn_probability": 0.8 }, "constants": { "heal_amount": 30 } }
//! ```
//!
//! Missing keys keep their defaults. An invalid file aborts startup.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use geoquest_shared::{
    get_character_definitions, get_enemy_definitions, CharacterClass, EnemyClass, GameConstants,
    Skill, SpawnConfig, DEFAULT_PORT,
};

use crate::world::WeightedEnemyTable;

/// Idle time after which a session is dropped
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

const ENV_BIND: &str = "GEOQUEST_BIND";
const ENV_PORT: &str = "GEOQUEST_PORT";
const ENV_GAME_CONFIG: &str = "GEOQUEST_GAME_CONFIG";
const ENV_SESSION_TTL: &str = "GEOQUEST_SESSION_TTL_SECS";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid game config: {0}")]
    Invalid(String),
}

/// Process-level settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub game_config: Option<PathBuf>,
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            game_config: None,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIND) {
            config.bind = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_BIND, value })?;
        }
        if let Some(value) = lookup(ENV_PORT) {
            config.port = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_PORT, value })?;
        }
        if let Some(value) = lookup(ENV_GAME_CONFIG) {
            if !value.is_empty() {
                config.game_config = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = lookup(ENV_SESSION_TTL) {
            let secs: u64 = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_SESSION_TTL, value })?;
            config.session_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Optional overrides file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GameConfigFile {
    spawn: Option<SpawnConfig>,
    constants: Option<GameConstants>,
}

/// Immutable game data shared by every request
#[derive(Debug, Clone)]
pub struct GameData {
    pub characters: Vec<CharacterClass>,
    pub enemies: Vec<EnemyClass>,
    pub spawn: SpawnConfig,
    pub constants: GameConstants,
    pub enemy_table: WeightedEnemyTable,
}

impl GameData {
    /// Built-in tables with the given tuning, validated
    pub fn new(spawn: SpawnConfig, constants: GameConstants) -> Result<Self, ConfigError> {
        let enemies = get_enemy_definitions();

        validate_probability("spawn_probability", spawn.spawn_probability)?;
        validate_probability("crit_chance", constants.crit_chance)?;
        validate_probability("dodge_chance", constants.dodge_chance)?;

        if !(constants.crit_multiplier >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "crit_multiplier must be >= 1, got {}",
                constants.crit_multiplier
            )));
        }
        if constants.xp_per_level == 0 {
            return Err(ConfigError::Invalid("xp_per_level must be positive".into()));
        }
        if !(spawn.spawn_distance_meters >= 0.0) || !(spawn.spawn_cooldown_secs >= 0.0) {
            return Err(ConfigError::Invalid("spawn distance and cooldown must be non-negative".into()));
        }
        if !(constants.heal_cooldown_secs >= 0.0) {
            return Err(ConfigError::Invalid("heal_cooldown_secs must be non-negative".into()));
        }
        for (id, &weight) in &spawn.enemy_weights {
            if !enemies.iter().any(|e| &e.id == id) {
                return Err(ConfigError::Invalid(format!("enemy_weights names unknown enemy '{}'", id)));
            }
            if !(weight >= 0.0) || !weight.is_finite() {
                return Err(ConfigError::Invalid(format!("weight for '{}' must be non-negative", id)));
            }
        }

        let enemy_table = WeightedEnemyTable::from_config(&spawn)
            .ok_or_else(|| ConfigError::Invalid("enemy_weights must have a positive total".into()))?;

        Ok(Self {
            characters: get_character_definitions(),
            enemies,
            spawn,
            constants,
            enemy_table,
        })
    }

    /// Built-in tables with default tuning
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(SpawnConfig::default(), GameConstants::default())
    }

    /// Built-in tables, with tuning overridden from `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Self::builtin();
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: GameConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let data = Self::new(file.spawn.unwrap_or_default(), file.constants.unwrap_or_default())?;
        info!("Loaded game config overrides from {:?}", path);
        Ok(data)
    }

    pub fn character(&self, id: &str) -> Option<&CharacterClass> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyClass> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Character id -> skill set, for the config endpoint
    pub fn skills_by_character(&self) -> BTreeMap<String, Vec<Skill>> {
        self.characters
            .iter()
            .map(|c| (c.id.clone(), c.skill_set.clone()))
            .collect()
    }
}

fn validate_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be in [0, 1], got {}", name, value)))
    }
}
