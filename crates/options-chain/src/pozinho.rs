//! Low-premium ("pozinho") scanner.
//!
//! Surfaces cents-priced contracts with enough delta to still be alive,
//! grouped under their underlying security. Delta arrives pre-computed
//! from upstream; a contract with no usable delta is treated as dead.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use locale_numeric::parse_locale_number;
use research_core::config::ScreenerRules;
use research_core::{OptionContract, Security};
use serde::Serialize;

use crate::rules::ContractView;

/// All surviving low-premium contracts for one underlying.
#[derive(Debug, Clone, Serialize)]
pub struct PozinhoGroup {
    pub security: Security,
    pub options: Vec<OptionContract>,
}

pub fn scan_pozinho(
    securities: &[Security],
    contracts: &[OptionContract],
    today: NaiveDate,
    rules: &ScreenerRules,
) -> Vec<PozinhoGroup> {
    let by_ticker: BTreeMap<String, &Security> = securities
        .iter()
        .map(|s| (s.ticker.clone(), s))
        .collect();

    let mut groups: BTreeMap<String, PozinhoGroup> = BTreeMap::new();

    for contract in contracts {
        let Some(view) = ContractView::new(contract, today) else {
            continue;
        };
        if view.premium_price > rules.pozinho_max_premium {
            continue;
        }

        let Some(parent) = resolve_underlying(contract, &by_ticker) else {
            continue;
        };
        let spot = parse_locale_number(&parent.price);
        if spot <= 0.0 || !view.is_tradeable() {
            continue;
        }

        let delta = parse_locale_number(&contract.delta_val);
        if delta.abs() < rules.pozinho_min_delta {
            continue;
        }

        groups
            .entry(parent.ticker.clone())
            .or_insert_with(|| PozinhoGroup {
                security: parent.clone(),
                options: Vec::new(),
            })
            .options
            .push(contract.clone());
    }

    let mut result: Vec<PozinhoGroup> = groups.into_values().collect();
    for group in &mut result {
        group.options.sort_by(|a, b| {
            let sa = parse_locale_number(&a.strike);
            let sb = parse_locale_number(&b.strike);
            sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    tracing::debug!(groups = result.len(), "pozinho scan complete");
    result
}

/// Resolve a contract to its underlying: the explicit `underlying` field
/// when present, otherwise the B3 convention that an option symbol opens
/// with the stock's 4-character root (PETRH40 -> PETR4). Root matches
/// take the alphabetically first candidate, so resolution is stable.
fn resolve_underlying<'a>(
    contract: &OptionContract,
    by_ticker: &BTreeMap<String, &'a Security>,
) -> Option<&'a Security> {
    if let Some(underlying) = contract.underlying.as_deref() {
        let key = underlying.trim().to_uppercase();
        if let Some(sec) = by_ticker.get(key.as_str()) {
            return Some(sec);
        }
    }
    let root = contract.ticker.get(..4)?;
    by_ticker
        .range::<str, _>((std::ops::Bound::Included(root), std::ops::Bound::Unbounded))
        .take_while(|(ticker, _)| ticker.starts_with(root))
        .map(|(_, sec)| *sec)
        .next()
}
