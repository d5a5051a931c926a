//! Progression transitions: skills, prestige, offline rewards,
//! experience.

use crate::config::GameConfig;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::level_for;

use super::CommandOutcome;

/// Spends one skill point to unlock a named skill.
pub(crate) fn upgrade_skill(
    state: &mut GameState,
    skill_id: &str,
) -> Result<CommandOutcome, CommandError> {
    if state
        .progression
        .unlocked_skills
        .iter()
        .any(|s| s == skill_id)
    {
        return Err(CommandError::SkillAlreadyUnlocked);
    }
    if state.progression.skill_points == 0 {
        return Err(CommandError::NoSkillPoints);
    }
    state.progression.skill_points -= 1;
    state.progression.unlocked_skills.push(skill_id.to_owned());
    Ok(CommandOutcome::None)
}

/// Resets level/experience/skills in exchange for permanent prestige
/// points: `floor(level / 10)`.
pub(crate) fn prestige(state: &mut GameState) -> Result<CommandOutcome, CommandError> {
    if state.progression.level < GameConfig::PRESTIGE_MIN_LEVEL {
        return Err(CommandError::LevelTooLow {
            required: GameConfig::PRESTIGE_MIN_LEVEL,
            current: state.progression.level,
        });
    }

    let gained = state.progression.level / GameConfig::PRESTIGE_LEVELS_PER_POINT;
    state.progression.prestige_points += gained;
    state.progression.times_prestiged += 1;
    state.progression.level = 1;
    state.progression.experience = 0;
    state.progression.skill_points = 0;
    state.progression.unlocked_skills.clear();
    Ok(CommandOutcome::None)
}

/// Credits whatever accumulated while the game was closed.
pub(crate) fn claim_offline_rewards(state: &mut GameState) -> Result<CommandOutcome, CommandError> {
    let offline = &state.offline_progress;
    if offline.accumulated_coins == 0 && offline.accumulated_gems == 0 {
        return Err(CommandError::NothingToClaim);
    }

    let coins = state.offline_progress.accumulated_coins;
    let gems = state.offline_progress.accumulated_gems;
    state.coins += coins;
    state.gems += gems;
    state.statistics.coins_earned += coins;
    state.statistics.gems_earned += gems;

    state.offline_progress.accumulated_coins = 0;
    state.offline_progress.accumulated_gems = 0;
    state.offline_progress.accumulated_seconds = 0;
    Ok(CommandOutcome::None)
}

/// Sets the experience total and re-derives level. Level-ups grant one
/// skill point each; experience accrual itself happens outside this core.
pub(crate) fn set_experience(
    state: &mut GameState,
    value: u64,
) -> Result<CommandOutcome, CommandError> {
    state.progression.experience = value;
    let new_level = level_for(value);
    if new_level > state.progression.level {
        state.progression.skill_points += new_level - state.progression.level;
    }
    state.progression.level = new_level;
    Ok(CommandOutcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prestige_below_gate_is_rejected() {
        let mut state = GameState::default();
        state.progression.level = 49;
        let before = state.clone();
        assert!(matches!(
            prestige(&mut state).unwrap_err(),
            CommandError::LevelTooLow { required: 50, .. }
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn prestige_converts_levels_to_points_and_resets() {
        let mut state = GameState::default();
        state.progression.level = 57;
        state.progression.experience = 999_999;
        state.progression.skill_points = 4;
        state.progression.unlocked_skills = vec!["focus".to_owned()];

        prestige(&mut state).unwrap();
        assert_eq!(state.progression.prestige_points, 5);
        assert_eq!(state.progression.level, 1);
        assert_eq!(state.progression.experience, 0);
        assert_eq!(state.progression.skill_points, 0);
        assert!(state.progression.unlocked_skills.is_empty());
        assert_eq!(state.progression.times_prestiged, 1);
    }

    #[test]
    fn skill_unlock_spends_a_point_once() {
        let mut state = GameState::default();
        state.progression.skill_points = 1;
        upgrade_skill(&mut state, "focus").unwrap();
        assert_eq!(state.progression.skill_points, 0);
        assert_eq!(
            upgrade_skill(&mut state, "focus").unwrap_err(),
            CommandError::SkillAlreadyUnlocked
        );
        assert_eq!(
            upgrade_skill(&mut state, "grit").unwrap_err(),
            CommandError::NoSkillPoints
        );
    }

    #[test]
    fn offline_claim_credits_then_empties() {
        let mut state = GameState::default();
        state.offline_progress.accumulated_coins = 300;
        state.offline_progress.accumulated_gems = 7;
        state.offline_progress.accumulated_seconds = 3600;

        claim_offline_rewards(&mut state).unwrap();
        assert_eq!(state.coins, 400);
        assert_eq!(state.gems, 7);
        assert_eq!(state.offline_progress.accumulated_coins, 0);
        assert_eq!(state.offline_progress.accumulated_seconds, 0);

        let before = state.clone();
        assert_eq!(
            claim_offline_rewards(&mut state).unwrap_err(),
            CommandError::NothingToClaim
        );
        assert_eq!(state, before);
    }

    #[test]
    fn experience_levels_grant_skill_points() {
        let mut state = GameState::default();
        // level = floor(sqrt(2500/100)) + 1 = 6
        set_experience(&mut state, 2_500).unwrap();
        assert_eq!(state.progression.level, 6);
        assert_eq!(state.progression.skill_points, 5);

        // Lowering experience lowers level but never claws back points.
        set_experience(&mut state, 0).unwrap();
        assert_eq!(state.progression.level, 1);
        assert_eq!(state.progression.skill_points, 5);
    }
}
