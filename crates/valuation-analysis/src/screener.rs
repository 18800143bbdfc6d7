//! Opportunity screener.
//!
//! Crosses the stock list with the full options feed: cheap underlyings
//! get income puts and upside calls, expensive underlyings get covered
//! calls and protective puts. All pricing metrics on the contracts are
//! upstream pass-throughs.

use std::collections::HashMap;

use chrono::NaiveDate;
use locale_numeric::parse_locale_number;
use options_chain::{
    eligible_call_buy, eligible_covered_call, eligible_put_buy, eligible_put_sale, ContractView,
};
use research_core::config::ScreenerRules;
use research_core::{OptionContract, Security};
use serde::{Deserialize, Serialize};

/// Valuation bucket a screened security falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Cheap,
    Expensive,
}

/// One screened security with its eligible option legs.
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub security: Security,
    pub category: Category,
    pub puts: Vec<OptionContract>,
    pub calls: Vec<OptionContract>,
    /// Falta as a fraction of price, 0 when the security has no cheap
    /// target to measure against.
    pub distance_cost: f64,
}

pub fn screen_opportunities(
    securities: &[Security],
    contracts: &[OptionContract],
    today: NaiveDate,
    rules: &ScreenerRules,
) -> Vec<Opportunity> {
    tracing::debug!(
        stocks = securities.len(),
        options = contracts.len(),
        "screening opportunities"
    );

    let mut by_underlying: HashMap<String, Vec<&OptionContract>> = HashMap::new();
    for contract in contracts {
        let Some(underlying) = contract.underlying.as_deref() else {
            continue;
        };
        let key = underlying.trim().to_uppercase();
        if key.is_empty() {
            continue;
        }
        by_underlying.entry(key).or_default().push(contract);
    }

    let mut opportunities = Vec::new();

    for security in securities {
        // Rows the sheet has not priced yet carry no falta; the sentinel
        // keeps them out of the cheap bucket.
        let falta = security.falta_val.unwrap_or(-999.0);
        let category = if falta >= rules.cheap_min_falta {
            Category::Cheap
        } else if falta <= rules.expensive_max_falta {
            Category::Expensive
        } else {
            continue;
        };

        let spot = parse_locale_number(&security.price);
        let cheap_target = parse_locale_number(&security.min_val);
        let high_target = parse_locale_number(&security.max_val);
        if cheap_target <= 0.0 && high_target <= 0.0 {
            continue;
        }

        let ticker = security.ticker.trim().to_uppercase();
        let Some(stock_contracts) = by_underlying.get(&ticker) else {
            continue;
        };

        let mut puts = Vec::new();
        let mut calls = Vec::new();

        for contract in stock_contracts {
            let Some(view) = ContractView::new(contract, today) else {
                continue;
            };
            if !view.is_tradeable() {
                continue;
            }

            match category {
                Category::Cheap => {
                    if eligible_put_sale(&view, cheap_target, rules) {
                        puts.push((*contract).clone());
                    } else if eligible_call_buy(&view, spot, rules) {
                        calls.push((*contract).clone());
                    }
                }
                Category::Expensive => {
                    if eligible_covered_call(&view, spot, high_target, rules) {
                        calls.push((*contract).clone());
                    } else if eligible_put_buy(&view, spot, rules) {
                        puts.push((*contract).clone());
                    }
                }
            }
        }

        if puts.is_empty() && calls.is_empty() {
            continue;
        }

        let distance_cost = if cheap_target > 0.0 { falta / 100.0 } else { 0.0 };
        opportunities.push(Opportunity {
            security: security.clone(),
            category,
            puts,
            calls,
            distance_cost,
        });
    }

    tracing::debug!(found = opportunities.len(), "screening complete");
    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::RawNumeric;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn stock(ticker: &str, falta_val: f64, price: f64, min_val: f64, max_val: f64) -> Security {
        Security {
            ticker: ticker.to_string(),
            falta_val: Some(falta_val),
            price: RawNumeric::Number(price),
            min_val: RawNumeric::Number(min_val),
            max_val: RawNumeric::Number(max_val),
            ..Security::default()
        }
    }

    fn option(
        underlying: &str,
        kind: &str,
        strike: f64,
        premium_yield: f64,
        expiration: &str,
    ) -> OptionContract {
        OptionContract {
            ticker: format!("{underlying}X{strike}"),
            underlying: Some(underlying.to_string()),
            contract_type: kind.to_string(),
            strike: RawNumeric::Number(strike),
            premium_yield: RawNumeric::Number(premium_yield),
            expiration: expiration.to_string(),
            ..OptionContract::default()
        }
    }

    #[test]
    fn cheap_stock_collects_income_puts_and_upside_calls() {
        let securities = vec![stock("PETR4", -9.0, 38.0, 36.0, 48.0)];
        let contracts = vec![
            option("PETR4", "PUT", 37.0, 0.015, "2026-08-21"),
            option("PETR4", "CALL", 43.0, 0.018, "2026-12-18"),
            // Premium too thin for an income put.
            option("PETR4", "PUT", 37.0, 0.005, "2026-08-21"),
        ];

        let opportunities =
            screen_opportunities(&securities, &contracts, today(), &ScreenerRules::default());
        assert_eq!(opportunities.len(), 1);
        let opp = &opportunities[0];
        assert_eq!(opp.category, Category::Cheap);
        assert_eq!(opp.puts.len(), 1);
        assert_eq!(opp.calls.len(), 1);
        assert!((opp.distance_cost - (-0.09)).abs() < 1e-12);
    }

    #[test]
    fn expensive_stock_collects_covered_calls_and_protective_puts() {
        let securities = vec![stock("MGLU3", -60.0, 50.0, 20.0, 52.0)];
        let contracts = vec![
            option("MGLU3", "CALL", 55.0, 0.02, "2026-08-21"),
            option("MGLU3", "PUT", 43.0, 0.01, "2026-12-18"),
        ];

        let opportunities =
            screen_opportunities(&securities, &contracts, today(), &ScreenerRules::default());
        assert_eq!(opportunities.len(), 1);
        let opp = &opportunities[0];
        assert_eq!(opp.category, Category::Expensive);
        assert_eq!(opp.calls.len(), 1);
        assert_eq!(opp.puts.len(), 1);
    }

    #[test]
    fn middle_of_the_road_faltas_are_skipped() {
        let securities = vec![stock("ITUB4", -30.0, 30.0, 25.0, 35.0)];
        let contracts = vec![option("ITUB4", "PUT", 26.0, 0.015, "2026-08-21")];

        let opportunities =
            screen_opportunities(&securities, &contracts, today(), &ScreenerRules::default());
        assert!(opportunities.is_empty());
    }

    #[test]
    fn stocks_without_targets_or_eligible_legs_drop_out() {
        // No targets at all.
        let no_targets = vec![stock("AAAA3", -5.0, 10.0, 0.0, 0.0)];
        let contracts = vec![option("AAAA3", "PUT", 9.0, 0.02, "2026-08-21")];
        assert!(screen_opportunities(&no_targets, &contracts, today(), &ScreenerRules::default())
            .is_empty());

        // Targets, but nothing passes the rules.
        let securities = vec![stock("BBBB3", -5.0, 10.0, 9.0, 12.0)];
        let dull = vec![option("BBBB3", "PUT", 20.0, 0.02, "2026-08-21")];
        assert!(screen_opportunities(&securities, &dull, today(), &ScreenerRules::default())
            .is_empty());
    }

    #[test]
    fn missing_falta_lands_in_the_expensive_bucket() {
        // The sentinel keeps unpriced rows out of "cheap", but a row with
        // valid targets can still screen as expensive, as upstream does.
        let mut sec = stock("CCCC3", 0.0, 50.0, 20.0, 52.0);
        sec.falta_val = None;
        let contracts = vec![option("CCCC3", "CALL", 55.0, 0.02, "2026-08-21")];

        let opportunities =
            screen_opportunities(&[sec], &contracts, today(), &ScreenerRules::default());
        assert_eq!(opportunities.len(), 1);
        assert_eq!(opportunities[0].category, Category::Expensive);
    }
}
