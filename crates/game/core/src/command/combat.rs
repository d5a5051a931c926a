//! Combat encounter transitions.
//!
//! The encounter is a small state machine:
//! `idle -> in_combat -> (victory | defeat | revived) -> idle`
//! where a revival keeps the encounter alive. Answers to trivia questions
//! arrive here as `hit` (correct) or miss (wrong).

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{AdventureSkillKind, ModeKind};

use super::{CommandOutcome, roll_seed};

const CTX_ENEMY: u32 = 0;
const CTX_SKILL_OFFER: u32 = 1;

/// What a single attack resolved to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackOutcome {
    /// Damage dealt to the enemy (hit) or taken by the player (miss).
    pub damage: u32,
    pub enemy_defeated: bool,
    pub player_defeated: bool,
    pub revived: bool,
    pub coins_awarded: u64,
    pub gems_awarded: u64,
}

/// Begins an encounter against a fresh enemy for the current zone.
pub(crate) fn start_combat(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    if state.in_combat {
        return Err(CommandError::AlreadyInCombat);
    }

    let content = env.content()?;
    let rng = env.rng()?;

    let enemy = content.generate_enemy(roll_seed(state, CTX_ENEMY), state.zone);
    state.combat_log = vec![format!(
        "A wild {} appears in zone {}!",
        enemy.name, state.zone
    )];
    state.current_enemy = Some(enemy);
    state.in_combat = true;

    // Offer a hand of adventure skills for this encounter.
    let all = AdventureSkillKind::ALL;
    let start = rng.range(roll_seed(state, CTX_SKILL_OFFER), 0, all.len() as u32 - 1) as usize;
    state.adventure_skills.available = (0..GameConfig::ADVENTURE_SKILL_CHOICES)
        .map(|i| all[(start + i) % all.len()])
        .collect();
    state.adventure_skills.selected = None;
    state.adventure_skills.show_selection = true;

    Ok(CommandOutcome::None)
}

/// Resolves one answered question against the current enemy.
pub(crate) fn attack(
    state: &mut GameState,
    hit: bool,
    category: Option<&str>,
) -> Result<CommandOutcome, CommandError> {
    if !state.combat_active() {
        return Err(CommandError::NotInCombat);
    }
    let Some(mut enemy) = state.current_enemy.take() else {
        return Err(CommandError::NotInCombat);
    };

    let mut outcome = AttackOutcome::default();

    if hit {
        let damage = state.player_stats.atk.saturating_sub(enemy.def).max(1);
        enemy.hp = enemy.hp.saturating_sub(damage);
        outcome.damage = damage;

        state.statistics.total_damage_dealt += u64::from(damage);
        state.knowledge_streak.record_correct();
        state.statistics.record_answer(category, true);
        state.push_combat_log(format!(
            "You strike the {} for {} damage!",
            enemy.name, damage
        ));

        if enemy.is_defeated() {
            resolve_victory(state, &enemy.name, &mut outcome);
        } else {
            state.current_enemy = Some(enemy);
        }
    } else {
        let damage = enemy.atk.saturating_sub(state.player_stats.def).max(1);
        state.player_stats.hp = state.player_stats.hp.saturating_sub(damage);
        outcome.damage = damage;

        state.statistics.total_damage_taken += u64::from(damage);
        state.knowledge_streak.reset();
        state.statistics.record_answer(category, false);
        state.push_combat_log(format!("The {} hits you for {} damage!", enemy.name, damage));

        if state.player_stats.hp == 0 {
            if !state.revival_used {
                // One free revival per life; the flag only clears on victory.
                state.revival_used = true;
                state.player_stats.hp = state.player_stats.max_hp;
                state.statistics.revivals += 1;
                state.push_combat_log("A mysterious force restores you to full health!".to_owned());
                state.current_enemy = Some(enemy);
                outcome.revived = true;
            } else {
                resolve_defeat(state, &mut outcome);
            }
        } else {
            state.current_enemy = Some(enemy);
        }
    }

    Ok(CommandOutcome::Attack(outcome))
}

fn resolve_victory(state: &mut GameState, enemy_name: &str, outcome: &mut AttackOutcome) {
    state.zone += 1;
    state.statistics.zones_reached = state.statistics.zones_reached.max(state.zone);

    let mult = state.knowledge_streak.multiplier;
    let coins = ((50 + u64::from(state.zone) * 5) as f64 * mult).floor() as u64;
    let gems = ((u64::from(state.zone) / 5 + 1) as f64 * mult).floor() as u64;
    state.coins += coins;
    state.gems += gems;
    state.statistics.coins_earned += coins;
    state.statistics.gems_earned += gems;
    state.statistics.total_victories += 1;

    if state.zone >= GameConfig::PREMIUM_UNLOCK_ZONE {
        state.progression.is_premium = true;
    }

    state.in_combat = false;
    state.revival_used = false;
    state.adventure_skills.end_encounter();
    state.push_combat_log(format!(
        "You defeated the {}! Zone {} reached (+{} coins, +{} gems).",
        enemy_name, state.zone, coins, gems
    ));

    outcome.enemy_defeated = true;
    outcome.coins_awarded = coins;
    outcome.gems_awarded = gems;
}

fn resolve_defeat(state: &mut GameState, outcome: &mut AttackOutcome) {
    state.in_combat = false;
    state.statistics.total_deaths += 1;
    if state.game_mode.current == ModeKind::Survival {
        state.game_mode.survival_lives = state.game_mode.survival_lives.saturating_sub(1);
    }
    state.adventure_skills.end_encounter();
    state.push_combat_log("You have been defeated...".to_owned());

    outcome.player_defeated = true;
}
