//! Skill definitions shared between client and server.

use serde::{Deserialize, Serialize};

/// Maximum number of skills a character can carry
pub const MAX_SKILLS_PER_CHARACTER: usize = 3;

// =============================================================================
// Skill Types
// =============================================================================

/// What a skill does when used in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    /// Deals `power` damage to the enemy (crit/dodge apply)
    Attack,
    /// Restores up to `power` HP to the caster
    Heal,
    /// Reserved; consumes the turn and the cooldown, no damage effect
    Buff,
}

impl SkillKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Heal => "heal",
            Self::Buff => "buff",
        }
    }

    /// Upgrade rule for this kind: (power gained per level, max level).
    /// Buffs have no power to scale and cannot be upgraded.
    pub fn upgrade_rule(&self) -> Option<SkillUpgradeRule> {
        match self {
            Self::Attack => Some(SkillUpgradeRule { power_per_level: 8, max_level: 5 }),
            Self::Heal => Some(SkillUpgradeRule { power_per_level: 15, max_level: 5 }),
            Self::Buff => None,
        }
    }
}

/// How a skill scales when a skill point is spent on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUpgradeRule {
    pub power_per_level: u32,
    pub max_level: u32,
}

/// Skill definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name, also the lookup key within a character's skill set
    pub name: String,
    pub kind: SkillKind,
    /// Damage for attack skills, HP restored for heal skills
    pub power: u32,
    /// Cooldown in seconds
    pub cooldown_secs: f32,
    /// Description for tooltip
    pub description: String,
}

impl Skill {
    fn new(name: &str, kind: SkillKind, power: u32, cooldown_secs: f32, description: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            power,
            cooldown_secs,
            description: description.into(),
        }
    }

    /// Power after `level` upgrades have been applied
    pub fn power_at_level(&self, level: u32) -> u32 {
        match self.kind.upgrade_rule() {
            Some(rule) => self.power + rule.power_per_level * level.min(rule.max_level),
            None => self.power,
        }
    }
}

// =============================================================================
// Skill Definitions
// =============================================================================

/// Get the ordered skill set for a character class id.
/// Unknown ids have no skills.
pub fn get_skill_set(character_id: &str) -> Vec<Skill> {
    use SkillKind::{Attack, Buff, Heal};

    match character_id {
        "warrior" => vec![
            Skill::new("Electrokinesis", Attack, 30, 10.0, "Double damage attack"),
            Skill::new("Tanging Ina Smash", Attack, 15, 8.0, "A crushing overhead blow"),
            Skill::new("Battle Heal", Heal, 40, 15.0, "Restore 40 HP"),
        ],
        "mage" => vec![
            Skill::new("Fireball", Attack, 62, 12.0, "Powerful magic attack"),
            Skill::new("Arcane Missiles", Attack, 35, 10.0, "Multiple magic projectiles"),
            Skill::new("Mutya", Buff, 0, 20.0, "Channel a protective charm"),
        ],
        "archer" => vec![
            Skill::new("Thunder Bolt", Attack, 32, 8.0, "High accuracy attack"),
            Skill::new("Anti-Bastos", Attack, 30, 15.0, "Area damage attack"),
            Skill::new("Perfect Storm", Heal, 35, 12.0, "Restore 35 HP"),
        ],
        "healer" => vec![
            Skill::new("Holy Smite", Attack, 25, 10.0, "Holy damage attack"),
            Skill::new("Aldub Forever", Heal, 60, 15.0, "Restore 60 HP"),
            Skill::new("Pabebe Wave", Buff, 0, 25.0, "Rally your spirit"),
        ],
        "rogue" => vec![
            Skill::new("Asim Kilig", Attack, 60, 15.0, "Critical strike from behind"),
            Skill::new("Fighting Senator", Attack, 20, 12.0, "A dirty, poisoned jab"),
            Skill::new("Go Manny", Heal, 30, 10.0, "Restore 30 HP"),
        ],
        _ => Vec::new(),
    }
}
