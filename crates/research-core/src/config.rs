//! Tunable constants shared by every analysis crate.
//!
//! List and detail surfaces must agree on these numbers, so they live in
//! exactly one place.

/// Distance thresholds (percent gap to the cheap target) that split the
/// valuation tiers.
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    /// Gaps up to this magnitude still classify as green.
    pub green_max: f64,
    /// Gaps up to this magnitude classify as yellow; beyond it, red.
    pub yellow_max: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green_max: 15.0,
            yellow_max: 30.0,
        }
    }
}

/// Forward-looking window for the options chain expiration index.
pub const CHAIN_WINDOW_MONTHS: u32 = 2;

/// Bucket for securities with no sector assignment.
pub const DEFAULT_SECTOR: &str = "Outros";

/// Representative tickers shown per sector card.
pub const SECTOR_ICON_LIMIT: usize = 5;

/// Entries per market-movers list (highs, lows, dividends).
pub const MOVERS_LIMIT: usize = 5;

/// Rule set for the opportunity screener and the low-premium scanner.
///
/// Falta cutoffs are percent distances; yields are fractions of spot
/// (0.01 = 1%); windows are business days.
#[derive(Debug, Clone, Copy)]
pub struct ScreenerRules {
    /// Falta at or above this classifies the underlying as cheap.
    pub cheap_min_falta: f64,
    /// Falta at or below this classifies the underlying as expensive.
    pub expensive_max_falta: f64,
    /// Income legs (put sale, covered call) need more yield than this.
    pub income_min_yield: f64,
    /// Income legs must expire within this many business days.
    pub income_max_bdays: i64,
    /// Upside legs (call buy, put buy) must cost at most this yield.
    pub upside_max_yield: f64,
    /// Upside legs must expire beyond this many business days.
    pub upside_min_bdays: i64,
    /// Put sales accept strikes up to cheap target times this factor.
    pub put_sale_strike_mult: f64,
    /// Call buys require strikes above spot times this factor.
    pub call_buy_strike_mult: f64,
    /// Put buys require strikes below spot times this factor.
    pub put_buy_strike_mult: f64,
    /// Premium ceiling for the "pozinho" low-premium scan.
    pub pozinho_max_premium: f64,
    /// Contracts with |delta| below this are considered dead and skipped.
    pub pozinho_min_delta: f64,
}

impl Default for ScreenerRules {
    fn default() -> Self {
        Self {
            cheap_min_falta: -15.0,
            expensive_max_falta: -50.0,
            income_min_yield: 0.01,
            income_max_bdays: 40,
            upside_max_yield: 0.02,
            upside_min_bdays: 60,
            put_sale_strike_mult: 1.08,
            call_buy_strike_mult: 1.10,
            put_buy_strike_mult: 0.90,
            pozinho_max_premium: 0.05,
            pozinho_min_delta: 0.01,
        }
    }
}
