//! Turn-based combat resolution.
//!
//! A turn is the player's action followed, if the enemy survives, by one
//! enemy counter-attack. All validation happens before the first mutation so a
//! rejected action leaves the session untouched.

use std::time::Instant;
use log::{debug, info};
use rand::Rng;

use geoquest_shared::{
    CombatTurnResponse, EnemyClass, GameConstants, HealResponse, SkillKind, UpgradeSkillResponse,
};

use crate::config::GameData;
use crate::entities::{EnemyEncounter, PlayerSession};
use crate::error::{GameError, Result};

/// Player's choice for a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    Attack,
    Skill(String),
    /// The standalone heal, spent as the turn's action
    Heal,
}

impl TurnAction {
    /// Parse the wire form: `action` plus `skill_name` for skills
    pub fn parse(action: Option<&str>, skill_name: Option<&str>) -> Result<Self> {
        match action.ok_or(GameError::MissingField("action"))? {
            "attack" => Ok(Self::Attack),
            "heal" => Ok(Self::Heal),
            "skill" => {
                let name = skill_name.ok_or(GameError::MissingField("skill_name"))?;
                Ok(Self::Skill(name.trim().to_string()))
            }
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

/// Outcome of a single attack after crit and dodge rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: u32,
    pub critical: bool,
    pub dodged: bool,
}

impl AttackRoll {
    /// Roll crit and dodge independently for a player attack
    pub fn player<R: Rng>(base: u32, constants: &GameConstants, rng: &mut R) -> Self {
        let critical = rng.gen_bool(constants.crit_chance);
        let dodged = rng.gen_bool(constants.dodge_chance);
        Self::resolve(base, critical, dodged, constants)
    }

    /// Enemy attacks can only be dodged
    pub fn enemy<R: Rng>(base: u32, constants: &GameConstants, rng: &mut R) -> Self {
        let dodged = rng.gen_bool(constants.dodge_chance);
        Self::resolve(base, false, dodged, constants)
    }

    fn resolve(base: u32, critical: bool, dodged: bool, constants: &GameConstants) -> Self {
        let damage = if dodged {
            0
        } else if critical {
            ((base as f64 * constants.crit_multiplier).floor() as u32).max(1)
        } else {
            base
        };
        Self { damage, critical, dodged }
    }
}

/// Everything the client needs to render a turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub enemy_defeated: bool,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub player_defeated: bool,
    pub xp_gained: u64,
    /// One entry per level gained
    pub level_ups: Vec<u32>,
    pub level: u32,
    pub messages: Vec<String>,
}

impl TurnResult {
    pub fn into_response(self) -> CombatTurnResponse {
        let defeated = self.enemy_defeated;
        CombatTurnResponse {
            enemy_hp: Some(self.enemy_hp),
            enemy_max_hp: Some(self.enemy_max_hp),
            enemy_defeated: Some(self.enemy_defeated),
            player_hp: Some(self.player_hp),
            player_max_hp: Some(self.player_max_hp),
            player_defeated: Some(self.player_defeated),
            xp_gained: defeated.then_some(self.xp_gained),
            leveled_up: defeated.then_some(!self.level_ups.is_empty()),
            levels_gained: defeated.then_some(self.level_ups.len() as u32),
            new_level: Some(self.level),
            combat_messages: self.messages,
        }
    }
}

/// Resolve one full combat turn for a session
pub fn resolve_turn<R: Rng>(
    session: &mut PlayerSession,
    action: &TurnAction,
    data: &GameData,
    now: Instant,
    rng: &mut R,
) -> Result<TurnResult> {
    session.ensure_playing()?;
    let enemy_class_id = match &session.active_enemy {
        Some(enemy) => enemy.enemy_class_id.clone(),
        None => return Err(GameError::NoActiveEncounter),
    };
    let character = data
        .character(&session.character_class_id)
        .ok_or_else(|| GameError::UnknownCharacter(session.character_class_id.clone()))?;
    let enemy_class = data
        .enemy(&enemy_class_id)
        .ok_or_else(|| GameError::UnknownEnemy(enemy_class_id.clone()))?;
    let constants = &data.constants;

    // Validate before touching anything
    let skill = match action {
        TurnAction::Skill(name) => {
            let skill = character.skill(name).ok_or_else(|| GameError::UnknownSkill {
                name: name.clone(),
                cooldown_remaining: None,
            })?;
            if let Some(remaining) = session.skill_cooldown_remaining(&skill.name, skill.cooldown_secs, now) {
                return Err(GameError::UnknownSkill {
                    name: name.clone(),
                    cooldown_remaining: Some(remaining),
                });
            }
            Some(skill)
        }
        TurnAction::Heal => {
            if let Some(remaining) = session.heal_cooldown_remaining(now, constants) {
                return Err(GameError::OnCooldown { remaining });
            }
            None
        }
        TurnAction::Attack => None,
    };

    let Some(mut enemy) = session.active_enemy.take() else {
        return Err(GameError::NoActiveEncounter);
    };
    let mut messages = Vec::new();

    // 1. Player action
    match (action, skill) {
        (TurnAction::Skill(_), Some(skill)) => {
            session.skill_cooldowns.insert(skill.name.clone(), now);
            messages.push(format!("{} used!", skill.name));
            let power = skill.power_at_level(session.skill_level(&skill.name));
            match skill.kind {
                SkillKind::Attack => {
                    let roll = AttackRoll::player(power, constants, rng);
                    apply_player_attack(&mut enemy, roll, &mut messages);
                }
                SkillKind::Heal => {
                    let healed = session.restore_health(power);
                    messages.push(format!("Healed for {} HP!", healed));
                }
                SkillKind::Buff => {
                    messages.push(format!("{} steadies for the fight.", session.name));
                }
            }
        }
        (TurnAction::Heal, _) => {
            let healed = session.restore_health(constants.heal_amount);
            session.last_heal_at = Some(now);
            messages.push(format!("Healed for {} HP!", healed));
        }
        _ => {
            let roll = AttackRoll::player(character.base_attack, constants, rng);
            apply_player_attack(&mut enemy, roll, &mut messages);
        }
    }

    // 2-3. Enemy defeated: rewards, no counter-attack
    if enemy.is_dead() {
        return Ok(finish_victory(session, &enemy, enemy_class, constants, messages));
    }

    // 4. Counter-attack
    let counter = AttackRoll::enemy(enemy_class.attack, constants, rng);
    if counter.dodged {
        messages.push(format!("Dodged {}'s attack!", enemy.name));
    } else {
        session.take_damage(counter.damage);
        messages.push(format!("{} hits for {} damage!", enemy.name, counter.damage));
    }
    debug!(
        "Player {} turn: enemy {}/{} player {}/{}",
        session.id, enemy.health, enemy.max_health, session.health, session.max_health
    );

    let result = TurnResult {
        enemy_hp: enemy.health,
        enemy_max_hp: enemy.max_health,
        enemy_defeated: false,
        player_hp: session.health,
        player_max_hp: session.max_health,
        player_defeated: session.is_dead(),
        xp_gained: 0,
        level_ups: Vec::new(),
        level: session.level,
        messages,
    };

    // 5. Player defeated ends the session; otherwise the fight goes on
    if session.is_dead() {
        session.concluded = true;
        info!("Player {} was defeated by {}", session.id, enemy.name);
        let mut result = result;
        result.messages.push("You have been defeated!".to_string());
        return Ok(result);
    }

    session.active_enemy = Some(enemy);
    Ok(result)
}

fn apply_player_attack(enemy: &mut EnemyEncounter, roll: AttackRoll, messages: &mut Vec<String>) {
    if roll.dodged {
        messages.push(format!("{} dodged the attack!", enemy.name));
        return;
    }
    enemy.take_damage(roll.damage);
    if roll.critical {
        messages.push(format!("CRITICAL HIT! {} damage!", roll.damage));
    } else {
        messages.push(format!("Hit for {} damage!", roll.damage));
    }
}

fn finish_victory(
    session: &mut PlayerSession,
    enemy: &EnemyEncounter,
    enemy_class: &EnemyClass,
    constants: &GameConstants,
    mut messages: Vec<String>,
) -> TurnResult {
    messages.push(format!("{} defeated!", enemy.name));
    session.record_kill(&enemy_class.id);

    let start_level = session.level;
    let gained = session.add_experience(enemy_class.xp_reward, constants);
    let level_ups: Vec<u32> = (1..=gained).map(|n| start_level + n).collect();
    for level in &level_ups {
        messages.push(format!("LEVEL UP! You are now level {}!", level));
    }
    info!(
        "Player {} defeated {} (+{} XP, level {})",
        session.id, enemy.name, enemy_class.xp_reward, session.level
    );

    TurnResult {
        enemy_hp: 0,
        enemy_max_hp: enemy.max_health,
        enemy_defeated: true,
        player_hp: session.health,
        player_max_hp: session.max_health,
        player_defeated: false,
        xp_gained: enemy_class.xp_reward,
        level_ups,
        level: session.level,
        messages,
    }
}

/// Standalone heal, in or out of combat. Never triggers a counter-attack.
pub fn heal(session: &mut PlayerSession, data: &GameData, now: Instant) -> Result<HealResponse> {
    session.ensure_playing()?;
    if let Some(remaining) = session.heal_cooldown_remaining(now, &data.constants) {
        return Err(GameError::OnCooldown { remaining });
    }

    let healed = session.restore_health(data.constants.heal_amount);
    session.last_heal_at = Some(now);

    Ok(HealResponse {
        healed,
        current_hp: session.health,
        max_hp: session.max_health,
    })
}

/// Leave the current encounter. Walking distance starts over.
pub fn escape(session: &mut PlayerSession) -> Result<String> {
    let enemy = session.active_enemy.take().ok_or(GameError::NoActiveEncounter)?;
    session.distance_since_last_spawn = 0.0;
    info!("Player {} escaped from {}", session.id, enemy.name);
    Ok(format!("Escaped from {}!", enemy.name))
}

/// Spend a skill point on one of the character's skills
pub fn upgrade_skill(session: &mut PlayerSession, skill_name: &str, data: &GameData) -> Result<UpgradeSkillResponse> {
    session.ensure_playing()?;
    let character = data
        .character(&session.character_class_id)
        .ok_or_else(|| GameError::UnknownCharacter(session.character_class_id.clone()))?;
    let skill = character.skill(skill_name).ok_or_else(|| GameError::UnknownSkill {
        name: skill_name.to_string(),
        cooldown_remaining: None,
    })?;

    let current = session.skill_level(&skill.name);
    match skill.kind.upgrade_rule() {
        Some(rule) if current < rule.max_level => {}
        _ => return Err(GameError::SkillMaxLevel(skill.name.clone())),
    }
    if session.skill_points == 0 {
        return Err(GameError::NoSkillPoints);
    }

    session.skill_points -= 1;
    session.skill_levels.insert(skill.name.clone(), current + 1);

    Ok(UpgradeSkillResponse {
        skill_name: skill.name.clone(),
        new_level: current + 1,
        skill_points_remaining: session.skill_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use geoquest_shared::SpawnConfig;

    use crate::entities::SpawnSource;

    /// No crits, no dodges
    fn certain_constants() -> GameConstants {
        GameConstants {
            crit_chance: 0.0,
            dodge_chance: 0.0,
            ..GameConstants::default()
        }
    }

    fn data_with(constants: GameConstants) -> GameData {
        GameData::new(SpawnConfig::default(), constants).unwrap()
    }

    fn fighting(data: &GameData, character: &str, enemy: &str, now: Instant) -> PlayerSession {
        let mut session = PlayerSession::new("p1".into(), data.character(character).unwrap(), now);
        session.active_enemy = Some(EnemyEncounter::new(data.enemy(enemy).unwrap(), SpawnSource::Manual));
        session
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(TurnAction::parse(Some("attack"), None), Ok(TurnAction::Attack));
        assert_eq!(
            TurnAction::parse(Some("skill"), Some("Mutya ")),
            Ok(TurnAction::Skill("Mutya".into()))
        );
        assert_eq!(TurnAction::parse(Some("skill"), None), Err(GameError::MissingField("skill_name")));
        assert_eq!(TurnAction::parse(Some("dance"), None), Err(GameError::UnknownAction("dance".into())));
        assert_eq!(TurnAction::parse(None, None), Err(GameError::MissingField("action")));
    }

    #[test]
    fn test_crit_rounds_down_with_minimum() {
        let constants = GameConstants { crit_multiplier: 1.5, ..GameConstants::default() };
        assert_eq!(AttackRoll::resolve(25, true, false, &constants).damage, 37);
        assert_eq!(AttackRoll::resolve(25, true, true, &constants).damage, 0);

        let constants = GameConstants { crit_multiplier: 1.0, ..GameConstants::default() };
        assert_eq!(AttackRoll::resolve(0, true, false, &constants).damage, 1);
    }

    #[test]
    fn test_always_crit() {
        let constants = GameConstants { crit_chance: 1.0, dodge_chance: 0.0, ..GameConstants::default() };
        let mut rng = StdRng::seed_from_u64(1);
        let roll = AttackRoll::player(25, &constants, &mut rng);
        assert!(roll.critical);
        assert_eq!(roll.damage, 50);
    }

    #[test]
    fn test_mage_defeats_goblin_in_two_attacks() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "mage", "goblin", now);
        let mut rng = StdRng::seed_from_u64(2);

        let first = resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng).unwrap();
        assert_eq!(first.enemy_hp, 5);
        assert!(!first.enemy_defeated);
        assert_eq!(first.player_hp, 75);
        assert!(session.active_enemy.is_some());

        let second = resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng).unwrap();
        assert!(second.enemy_defeated);
        assert_eq!(second.enemy_hp, 0);
        assert_eq!(second.xp_gained, 10);
        assert_eq!(second.player_hp, 75); // no counter-attack on the killing turn
        assert!(second.level_ups.is_empty());
        assert_eq!(session.experience, 10);
        assert_eq!(session.kill_counts["goblin"], 1);
        assert!(session.active_enemy.is_none());

        let response = second.into_response();
        assert_eq!(response.enemy_defeated, Some(true));
        assert_eq!(response.xp_gained, Some(10));
        assert_eq!(response.leveled_up, Some(false));
    }

    #[test]
    fn test_player_defeat_clears_encounter() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "mage", "dragon", now);
        session.health = 3;
        let mut rng = StdRng::seed_from_u64(3);

        let result = resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng).unwrap();
        assert!(result.player_defeated);
        assert_eq!(result.player_hp, 0);
        assert_eq!(result.enemy_hp, 75);
        assert!(session.active_enemy.is_none());
        assert!(session.concluded);

        // Defeat concludes the session
        assert_eq!(
            resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng),
            Err(GameError::SessionConcluded)
        );
    }

    #[test]
    fn test_no_active_encounter() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = PlayerSession::new("p1".into(), data.character("rogue").unwrap(), now);
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(
            resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng),
            Err(GameError::NoActiveEncounter)
        );
        assert_eq!(escape(&mut session), Err(GameError::NoActiveEncounter));
    }

    #[test]
    fn test_unknown_character_on_session() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "mage", "goblin", now);
        session.character_class_id = "bard".into();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng),
            Err(GameError::UnknownCharacter("bard".into()))
        );
        assert_eq!(session.active_enemy.as_ref().unwrap().health, 30);
    }

    #[test]
    fn test_two_level_ups_in_one_kill() {
        let constants = GameConstants { xp_per_level: 5, ..certain_constants() };
        let data = data_with(constants);
        let now = Instant::now();
        let mut session = fighting(&data, "warrior", "goblin", now);
        session.active_enemy.as_mut().unwrap().health = 1;
        let mut rng = StdRng::seed_from_u64(6);

        let result = resolve_turn(&mut session, &TurnAction::Attack, &data, now, &mut rng).unwrap();
        assert!(result.enemy_defeated);
        assert_eq!(result.level_ups, vec![2, 3]);
        assert_eq!(session.level, 3);
        assert_eq!(session.max_health, 140);
        assert_eq!(session.health, 140);
        assert_eq!(result.into_response().levels_gained, Some(2));
    }

    #[test]
    fn test_attack_skill_and_cooldown() {
        let data = data_with(certain_constants());
        let start = Instant::now();
        let mut session = fighting(&data, "mage", "dragon", start);
        let mut rng = StdRng::seed_from_u64(7);
        let fireball = TurnAction::Skill("Fireball".into());

        let result = resolve_turn(&mut session, &fireball, &data, start, &mut rng).unwrap();
        assert_eq!(result.enemy_hp, 38);
        assert_eq!(result.player_hp, 65);

        let later = start + Duration::from_secs(5);
        let err = resolve_turn(&mut session, &fireball, &data, later, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::UnknownSkill { cooldown_remaining: Some(_), .. }));
        assert_eq!(session.active_enemy.as_ref().unwrap().health, 38);
        assert_eq!(session.health, 65);

        let ready = start + Duration::from_secs(12);
        let result = resolve_turn(&mut session, &fireball, &data, ready, &mut rng).unwrap();
        assert!(result.enemy_defeated);
    }

    #[test]
    fn test_unknown_skill() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "mage", "goblin", now);
        let mut rng = StdRng::seed_from_u64(8);

        let err = resolve_turn(&mut session, &TurnAction::Skill("Battle Heal".into()), &data, now, &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::UnknownSkill { name: "Battle Heal".into(), cooldown_remaining: None });
    }

    #[test]
    fn test_heal_skill_leaves_enemy_alone() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "warrior", "orc", now);
        session.health = 100;
        let mut rng = StdRng::seed_from_u64(9);

        let result = resolve_turn(&mut session, &TurnAction::Skill("Battle Heal".into()), &data, now, &mut rng)
            .unwrap();
        // Healed to the 120 cap, then hit for 10
        assert_eq!(result.enemy_hp, 50);
        assert_eq!(result.player_hp, 110);
        assert!(result.messages.iter().any(|m| m == "Healed for 20 HP!"));
    }

    #[test]
    fn test_buff_consumes_turn_only() {
        let data = data_with(certain_constants());
        let start = Instant::now();
        let mut session = fighting(&data, "mage", "goblin", start);
        let mut rng = StdRng::seed_from_u64(10);
        let mutya = TurnAction::Skill("Mutya".into());

        let result = resolve_turn(&mut session, &mutya, &data, start, &mut rng).unwrap();
        assert_eq!(result.enemy_hp, 30);
        assert_eq!(result.player_hp, 75);
        assert!(resolve_turn(&mut session, &mutya, &data, start + Duration::from_secs(1), &mut rng).is_err());
    }

    #[test]
    fn test_heal_action_in_combat_shares_cooldown() {
        let data = data_with(certain_constants());
        let start = Instant::now();
        let mut session = fighting(&data, "mage", "goblin", start);
        session.health = 40;
        let mut rng = StdRng::seed_from_u64(11);

        let result = resolve_turn(&mut session, &TurnAction::Heal, &data, start, &mut rng).unwrap();
        assert_eq!(result.player_hp, 60);

        let soon = start + Duration::from_secs(3);
        assert!(matches!(heal(&mut session, &data, soon), Err(GameError::OnCooldown { .. })));
        assert!(matches!(
            resolve_turn(&mut session, &TurnAction::Heal, &data, soon, &mut rng),
            Err(GameError::OnCooldown { .. })
        ));
        assert_eq!(session.health, 60);
    }

    #[test]
    fn test_standalone_heal_cooldown() {
        let data = data_with(certain_constants());
        let start = Instant::now();
        let mut session = PlayerSession::new("p1".into(), data.character("mage").unwrap(), start);
        session.health = 20;

        let first = heal(&mut session, &data, start).unwrap();
        assert_eq!(first.healed, 25);
        assert_eq!(first.current_hp, 45);

        let second = heal(&mut session, &data, start + Duration::from_secs(2));
        assert!(matches!(second, Err(GameError::OnCooldown { .. })));
        assert_eq!(session.health, 45);

        let third = heal(&mut session, &data, start + Duration::from_secs(10)).unwrap();
        assert_eq!(third.current_hp, 70);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = PlayerSession::new("p1".into(), data.character("mage").unwrap(), now);
        session.health = 70;

        let result = heal(&mut session, &data, now).unwrap();
        assert_eq!(result.healed, 10);
        assert_eq!(result.current_hp, 80);
        assert_eq!(result.max_hp, 80);
    }

    #[test]
    fn test_escape_resets_distance() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = fighting(&data, "archer", "orc", now);
        session.distance_since_last_spawn = 42.0;

        assert_eq!(escape(&mut session).unwrap(), "Escaped from Orc!");
        assert!(session.active_enemy.is_none());
        assert_eq!(session.distance_since_last_spawn, 0.0);
    }

    #[test]
    fn test_hp_stays_in_bounds() {
        let data = data_with(GameConstants::default());
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(12);

        for round in 0..200 {
            let enemy = ["goblin", "orc", "dragon"][round % 3];
            let mut session = fighting(&data, "healer", enemy, now);
            let mut turn = 0u64;
            while session.active_enemy.is_some() {
                let action = if turn % 4 == 3 {
                    TurnAction::Skill("Aldub Forever".into())
                } else {
                    TurnAction::Attack
                };
                let at = now + Duration::from_secs(turn * 20);
                let result = resolve_turn(&mut session, &action, &data, at, &mut rng).unwrap();
                assert!(result.player_hp <= result.player_max_hp);
                assert!(result.enemy_hp <= result.enemy_max_hp);
                if let Some(enemy) = &session.active_enemy {
                    assert!(enemy.health > 0);
                }
                turn += 1;
            }
        }
    }

    #[test]
    fn test_upgrade_skill() {
        let data = data_with(certain_constants());
        let now = Instant::now();
        let mut session = PlayerSession::new("p1".into(), data.character("mage").unwrap(), now);

        assert_eq!(upgrade_skill(&mut session, "Fireball", &data), Err(GameError::NoSkillPoints));

        session.skill_points = 2;
        let upgraded = upgrade_skill(&mut session, "Fireball", &data).unwrap();
        assert_eq!(upgraded.new_level, 1);
        assert_eq!(upgraded.skill_points_remaining, 1);

        assert_eq!(
            upgrade_skill(&mut session, "Mutya", &data),
            Err(GameError::SkillMaxLevel("Mutya".into()))
        );
        assert!(matches!(
            upgrade_skill(&mut session, "Go Manny", &data),
            Err(GameError::UnknownSkill { .. })
        ));

        // Upgraded power is used in combat: 62 + 8
        session.active_enemy = Some(EnemyEncounter::new(data.enemy("dragon").unwrap(), SpawnSource::Manual));
        let mut rng = StdRng::seed_from_u64(13);
        let result = resolve_turn(&mut session, &TurnAction::Skill("Fireball".into()), &data, now, &mut rng)
            .unwrap();
        assert_eq!(result.enemy_hp, 30);
    }
}
