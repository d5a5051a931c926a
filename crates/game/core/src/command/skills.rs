//! Menu skill rolls and adventure skill selection.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::CommandError;
use crate::state::GameState;
use crate::state::types::{ActiveMenuSkill, AdventureSkillKind, MenuSkillKind};

use super::{CommandOutcome, charge_coins, roll_seed};

const CTX_SKILL_KIND: u32 = 0;
const CTX_SKILL_HOURS: u32 = 1;

/// Rolls a random timed buff, replacing any active one.
pub(crate) fn roll_skill(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<CommandOutcome, CommandError> {
    let rng = env.rng()?;
    let now = env.clock()?.now();

    charge_coins(state, GameConfig::SKILL_ROLL_COST)?;

    let all = MenuSkillKind::ALL;
    let kind = all[rng.range(roll_seed(state, CTX_SKILL_KIND), 0, all.len() as u32 - 1) as usize];
    let hours = rng.range(
        roll_seed(state, CTX_SKILL_HOURS),
        GameConfig::SKILL_DURATION_MIN_H,
        GameConfig::SKILL_DURATION_MAX_H,
    );

    let active = ActiveMenuSkill {
        kind,
        activated_at: now,
        expires_at: now.add_hours(i64::from(hours)),
    };
    state.skills.active = Some(active.clone());
    state.skills.total_rolls += 1;

    Ok(CommandOutcome::SkillRolled(active))
}

/// Picks one skill from the encounter's offer and closes it.
pub(crate) fn select_adventure_skill(
    state: &mut GameState,
    kind: AdventureSkillKind,
) -> Result<CommandOutcome, CommandError> {
    if !state.adventure_skills.show_selection
        || !state.adventure_skills.available.contains(&kind)
    {
        return Err(CommandError::NoAdventureSkillOffer);
    }
    state.adventure_skills.selected = Some(kind);
    state.adventure_skills.available.clear();
    state.adventure_skills.show_selection = false;
    Ok(CommandOutcome::None)
}

/// Declines the encounter's offer.
pub(crate) fn skip_adventure_skills(state: &mut GameState) -> Result<CommandOutcome, CommandError> {
    if !state.adventure_skills.show_selection {
        return Err(CommandError::NoAdventureSkillOffer);
    }
    state.adventure_skills.available.clear();
    state.adventure_skills.show_selection = false;
    state.adventure_skills.selected = None;
    Ok(CommandOutcome::None)
}

/// Consumes the Skip-Card effect once per encounter.
pub(crate) fn use_skip_card(state: &mut GameState) -> Result<CommandOutcome, CommandError> {
    if state.adventure_skills.selected != Some(AdventureSkillKind::SkipCard)
        || state.adventure_skills.effects.skip_card_used
    {
        return Err(CommandError::SkipCardUnavailable);
    }
    state.adventure_skills.effects.skip_card_used = true;
    Ok(CommandOutcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedClock, PcgRng};
    use crate::state::types::Timestamp;

    fn env<'a>(rng: &'a PcgRng, clock: &'a FixedClock) -> GameEnv<'a> {
        GameEnv::new(None, Some(rng), Some(clock))
    }

    #[test]
    fn roll_costs_coins_and_replaces_active_buff() {
        let mut state = GameState::default();
        state.coins = 250;
        let rng = PcgRng;
        let clock = FixedClock::at_millis(10_000);

        let CommandOutcome::SkillRolled(first) =
            roll_skill(&mut state, &env(&rng, &clock)).unwrap()
        else {
            panic!("expected skill outcome");
        };
        assert_eq!(state.coins, 150);
        assert_eq!(state.skills.active.as_ref(), Some(&first));

        let duration_h = (first.expires_at.as_millis() - first.activated_at.as_millis())
            / 3_600_000;
        assert!((1..=12).contains(&duration_h));

        state.nonce += 1;
        roll_skill(&mut state, &env(&rng, &clock)).unwrap();
        assert_eq!(state.coins, 50);
        assert_eq!(state.skills.total_rolls, 2);
    }

    #[test]
    fn roll_without_coins_is_rejected() {
        let mut state = GameState::default();
        state.coins = 99;
        let rng = PcgRng;
        let clock = FixedClock::default();
        let before = state.clone();
        assert!(roll_skill(&mut state, &env(&rng, &clock)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn expired_buff_is_dropped_by_sync() {
        let mut state = GameState::default();
        state.skills.active = Some(ActiveMenuSkill {
            kind: MenuSkillKind::CoinVacuum,
            activated_at: Timestamp::from_millis(0),
            expires_at: Timestamp::from_millis(1_000),
        });
        state.skills.sync(Timestamp::from_millis(999));
        assert!(state.skills.active.is_some());
        state.skills.sync(Timestamp::from_millis(1_000));
        assert!(state.skills.active.is_none());
    }

    #[test]
    fn adventure_selection_requires_an_open_offer() {
        let mut state = GameState::default();
        let before = state.clone();
        assert!(select_adventure_skill(&mut state, AdventureSkillKind::Dodge).is_err());
        assert_eq!(state, before);

        state.adventure_skills.available =
            vec![AdventureSkillKind::Dodge, AdventureSkillKind::Berserker];
        state.adventure_skills.show_selection = true;

        // Offered kinds only.
        assert!(select_adventure_skill(&mut state, AdventureSkillKind::Healer).is_err());
        select_adventure_skill(&mut state, AdventureSkillKind::Dodge).unwrap();
        assert_eq!(
            state.adventure_skills.selected,
            Some(AdventureSkillKind::Dodge)
        );
        assert!(!state.adventure_skills.show_selection);
    }

    #[test]
    fn skip_card_is_single_use() {
        let mut state = GameState::default();
        assert!(use_skip_card(&mut state).is_err());

        state.adventure_skills.selected = Some(AdventureSkillKind::SkipCard);
        use_skip_card(&mut state).unwrap();
        assert!(state.adventure_skills.effects.skip_card_used);
        assert_eq!(
            use_skip_card(&mut state).unwrap_err(),
            CommandError::SkipCardUnavailable
        );
    }
}
