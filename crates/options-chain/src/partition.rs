use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use research_core::config::CHAIN_WINDOW_MONTHS;
use research_core::OptionContract;
use serde::Serialize;

use crate::busdays::parse_expiration;

/// Calls/puts split for a single expiration date.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChainSlice {
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

/// An options chain indexed by expiration.
///
/// The expiration index is restricted to the forward-looking window
/// `[today, end of today + CHAIN_WINDOW_MONTHS]`, but [`Self::by_expiration`]
/// resolves against the full contract list, so a caller holding an
/// out-of-window date still gets the correct split.
#[derive(Debug, Clone)]
pub struct OptionsChain {
    contracts: Vec<OptionContract>,
    expirations: Vec<String>,
}

impl OptionsChain {
    pub fn partition(contracts: Vec<OptionContract>, today: NaiveDate) -> Self {
        let window_end = today
            .checked_add_months(Months::new(CHAIN_WINDOW_MONTHS))
            .unwrap_or(NaiveDate::MAX);

        let mut in_window = BTreeSet::new();
        for contract in &contracts {
            match parse_expiration(&contract.expiration) {
                Some(date) if date >= today && date <= window_end => {
                    in_window.insert(contract.expiration.clone());
                }
                Some(_) => {}
                None => {
                    if !contract.expiration.trim().is_empty() {
                        tracing::debug!(
                            expiration = %contract.expiration,
                            ticker = %contract.ticker,
                            "skipping contract with unparseable expiration"
                        );
                    }
                }
            }
        }

        Self {
            contracts,
            expirations: in_window.into_iter().collect(),
        }
    }

    /// Unique in-window expirations, ascending. Lexicographic order is
    /// chronological for the ISO dates the index is built from.
    pub fn expirations(&self) -> &[String] {
        &self.expirations
    }

    /// Earliest in-window expiration, the one a fresh view selects.
    pub fn default_expiration(&self) -> Option<&str> {
        self.expirations.first().map(String::as_str)
    }

    /// Exact-match calls/puts split for one expiration date, windowed or
    /// not. Matching is by case-insensitive substring so variants like
    /// "CALL_LONG" or lowercase feeds land in the right column.
    pub fn by_expiration(&self, date: &str) -> ChainSlice {
        let mut slice = ChainSlice::default();
        for contract in &self.contracts {
            if contract.expiration != date {
                continue;
            }
            let kind = contract.contract_type.to_uppercase();
            if kind.contains("CALL") {
                slice.calls.push(contract.clone());
            } else if kind.contains("PUT") {
                slice.puts.push(contract.clone());
            }
        }
        slice
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
