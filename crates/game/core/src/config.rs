//! Centralized game tuning constants.

/// Static rule constants shared by every transition.
///
/// Values live in one place so balance changes never require hunting
/// through the command modules.
pub struct GameConfig;

impl GameConfig {
    /// Maximum number of retained combat log entries (FIFO-trimmed).
    pub const COMBAT_LOG_LIMIT: usize = 10;

    /// Consecutive correct answers per streak multiplier step.
    pub const STREAK_STEP: u32 = 5;

    /// Multiplier gained per completed streak step.
    pub const STREAK_STEP_BONUS: f64 = 0.1;

    /// Zone at which premium content unlocks permanently.
    pub const PREMIUM_UNLOCK_ZONE: u32 = 50;

    /// Minimum level required to prestige.
    pub const PRESTIGE_MIN_LEVEL: u32 = 50;

    /// Levels per permanent prestige point granted on prestige.
    pub const PRESTIGE_LEVELS_PER_POINT: u32 = 10;

    /// Bonus gems granted by every chest, rolled uniformly in this range.
    pub const CHEST_BONUS_GEMS_MIN: u32 = 5;
    pub const CHEST_BONUS_GEMS_MAX: u32 = 14;

    /// Coin price of a guaranteed mythical item.
    pub const MYTHICAL_PURCHASE_COST: u64 = 50_000;

    /// Upgrade cost growth factor, applied as `floor(cost * 1.5)`.
    pub const UPGRADE_COST_NUM: u64 = 3;
    pub const UPGRADE_COST_DEN: u64 = 2;

    /// Flat attack added per weapon level above 1.
    pub const WEAPON_LEVEL_ATK: u32 = 10;

    /// Flat defense added per armor level above 1.
    pub const ARMOR_LEVEL_DEF: u32 = 5;

    /// Relic upgrade stat deltas (applied only to stats the relic defines).
    pub const RELIC_UPGRADE_ATK: u32 = 22;
    pub const RELIC_UPGRADE_DEF: u32 = 15;

    /// Gems refunded for a sold relic: `floor(cost / 2)`.
    pub const RELIC_SELL_REFUND_DEN: u64 = 2;

    /// Relics on offer in the Yojef Market at any time.
    pub const MARKET_SIZE: usize = 3;

    /// Milliseconds between Yojef Market rotations (4 hours).
    pub const MARKET_REFRESH_INTERVAL_MS: i64 = 4 * 60 * 60 * 1000;

    /// Shiny gem exchange rate (gems per shiny gem).
    pub const SHINY_EXCHANGE_RATE: u64 = 10;

    /// Chance (percent) that a mine action yields a shiny gem.
    pub const SHINY_MINE_CHANCE_PCT: u32 = 5;

    /// Coin cost of rolling a menu skill.
    pub const SKILL_ROLL_COST: u64 = 100;

    /// Menu skill duration bounds, in hours.
    pub const SKILL_DURATION_MIN_H: u32 = 1;
    pub const SKILL_DURATION_MAX_H: u32 = 12;

    /// Adventure skills offered when combat starts.
    pub const ADVENTURE_SKILL_CHOICES: usize = 3;

    /// Merchant fragment cost per reward roll.
    pub const MERCHANT_FRAGMENT_COST: u32 = 5;

    /// Garden tuning: seed price, water price per 24h, growth rate and cap.
    pub const GARDEN_SEED_COST: u64 = 100;
    pub const GARDEN_WATER_COST_PER_DAY: u64 = 40;
    pub const GARDEN_GROWTH_CM_PER_HOUR: f64 = 1.0;
    pub const GARDEN_MAX_GROWTH_CM: f64 = 100.0;

    /// Stat bonus percent per centimeter of growth.
    pub const GARDEN_BONUS_PCT_PER_CM: f64 = 5.0;

    /// Offline accrual: coins per offline minute scale with zone, plus a
    /// flat gem trickle, both capped by the offline window.
    pub const OFFLINE_GEMS_PER_HOUR: u64 = 1;
    pub const OFFLINE_MAX_HOURS: u32 = 12;

    /// Default survival mode lives.
    pub const SURVIVAL_LIVES: u32 = 3;

    /// Experience curve divisor: `level = floor(sqrt(xp / 100)) + 1`.
    pub const XP_CURVE_DIVISOR: u64 = 100;
}
