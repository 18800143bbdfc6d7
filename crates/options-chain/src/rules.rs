//! Strategy eligibility rules.
//!
//! Pure predicates over one contract and its underlying's derived values.
//! Premium yields and pricing metrics arrive pre-computed from upstream;
//! nothing here prices an option.

use chrono::NaiveDate;
use locale_numeric::parse_locale_number;
use research_core::config::ScreenerRules;
use research_core::OptionContract;

use crate::busdays::{business_days_until, parse_expiration};

/// Per-contract values the rules operate on, derived once.
#[derive(Debug, Clone)]
pub struct ContractView<'a> {
    pub contract: &'a OptionContract,
    /// Uppercased contract kind for substring matching.
    pub kind: String,
    pub strike: f64,
    /// Premium over spot as a fraction.
    pub premium_yield: f64,
    /// Last traded premium in currency units.
    pub premium_price: f64,
    pub business_days: i64,
}

impl<'a> ContractView<'a> {
    /// Derive the view, or None when the expiration cannot be read.
    pub fn new(contract: &'a OptionContract, today: NaiveDate) -> Option<Self> {
        let expiry = parse_expiration(&contract.expiration)?;
        Some(Self {
            contract,
            kind: contract.contract_type.to_uppercase(),
            strike: parse_locale_number(&contract.strike),
            premium_yield: parse_locale_number(&contract.premium_yield),
            premium_price: parse_locale_number(&contract.price_val),
            business_days: business_days_until(today, expiry),
        })
    }

    /// A contract the screener can reason about at all: a real strike and
    /// an expiry still ahead of us.
    pub fn is_tradeable(&self) -> bool {
        self.strike > 0.0 && self.business_days > 0
    }

    fn is_put_side(&self) -> bool {
        self.kind.contains("PUT") || self.kind.contains("VENDA")
    }

    fn is_call_side(&self) -> bool {
        self.kind.contains("CALL") || self.kind.contains("COMPRA")
    }

    fn is_covered_call_side(&self) -> bool {
        self.kind.contains("CALL") || self.kind.contains("VENDA")
    }

    fn is_protective_put_side(&self) -> bool {
        self.kind.contains("PUT") || self.kind.contains("COMPRA")
    }
}

/// Cheap underlying, income leg: sell a put close to the cheap target.
pub fn eligible_put_sale(
    view: &ContractView,
    cheap_target: f64,
    rules: &ScreenerRules,
) -> bool {
    view.is_put_side()
        && view.premium_yield > rules.income_min_yield
        && view.business_days <= rules.income_max_bdays
        && view.strike <= cheap_target * rules.put_sale_strike_mult
}

/// Cheap underlying, upside leg: buy a cheap long-dated call above spot.
pub fn eligible_call_buy(view: &ContractView, spot: f64, rules: &ScreenerRules) -> bool {
    view.is_call_side()
        && view.premium_yield <= rules.upside_max_yield
        && view.business_days > rules.upside_min_bdays
        && view.strike > spot * rules.call_buy_strike_mult
}

/// Expensive underlying, income leg: sell a covered call above both the
/// high target and spot.
pub fn eligible_covered_call(
    view: &ContractView,
    spot: f64,
    high_target: f64,
    rules: &ScreenerRules,
) -> bool {
    view.is_covered_call_side()
        && view.premium_yield > rules.income_min_yield
        && view.business_days <= rules.income_max_bdays
        && view.strike > high_target
        && view.strike > spot
}

/// Expensive underlying, downside leg: buy a cheap long-dated put well
/// below spot.
pub fn eligible_put_buy(view: &ContractView, spot: f64, rules: &ScreenerRules) -> bool {
    view.is_protective_put_side()
        && view.premium_yield <= rules.upside_max_yield
        && view.business_days > rules.upside_min_bdays
        && view.strike < spot * rules.put_buy_strike_mult
}
