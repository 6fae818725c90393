//! Error types for the encounter and combat engine.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Broad class of a failure, used to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input or an unknown id
    Validation,
    /// Valid request that the session's current state does not allow
    State,
    /// Unknown player id; the client should treat the session as expired
    NotFound,
}

/// Errors produced by the engine. None of them leave partial mutations behind.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    /// Request body or query could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A required field was absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Coordinates outside the valid range or non-finite
    #[error("Invalid location: lat={lat}, lon={lon}")]
    InvalidLocation { lat: f64, lon: f64 },

    /// Character id not in the stat tables (at selection time)
    #[error("Invalid character class: {0}")]
    InvalidCharacter(String),

    #[error("Invalid enemy type: {0}")]
    UnknownEnemy(String),

    #[error("Invalid action: {0}")]
    UnknownAction(String),

    /// Skill missing from the character's set (validation), or still cooling down (state)
    #[error("{}", unknown_skill_message(.name, .cooldown_remaining))]
    UnknownSkill {
        name: String,
        cooldown_remaining: Option<f32>,
    },

    #[error("No active encounter")]
    NoActiveEncounter,

    #[error("An encounter is already active")]
    EncounterActive,

    #[error("On cooldown: {remaining:.1}s remaining")]
    OnCooldown { remaining: f32 },

    /// The session's class id no longer resolves
    #[error("Unknown character class on session: {0}")]
    UnknownCharacter(String),

    #[error("Player has been defeated; select a character to play again")]
    SessionConcluded,

    #[error("No skill points available")]
    NoSkillPoints,

    #[error("Skill '{0}' cannot be upgraded further")]
    SkillMaxLevel(String),

    #[error("Player {0} not found")]
    PlayerNotFound(String),
}

fn unknown_skill_message(name: &str, cooldown_remaining: &Option<f32>) -> String {
    match cooldown_remaining {
        Some(remaining) => format!("Skill '{}' on cooldown: {:.1}s remaining", name, remaining),
        None => format!("Skill '{}' not found for this character", name),
    }
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_)
            | Self::MissingField(_)
            | Self::InvalidLocation { .. }
            | Self::InvalidCharacter(_)
            | Self::UnknownEnemy(_)
            | Self::UnknownAction(_)
            | Self::UnknownSkill { cooldown_remaining: None, .. } => ErrorKind::Validation,
            Self::UnknownSkill { cooldown_remaining: Some(_), .. }
            | Self::NoActiveEncounter
            | Self::EncounterActive
            | Self::OnCooldown { .. }
            | Self::UnknownCharacter(_)
            | Self::SessionConcluded
            | Self::NoSkillPoints
            | Self::SkillMaxLevel(_) => ErrorKind::State,
            Self::PlayerNotFound(_) => ErrorKind::NotFound,
        }
    }
}
