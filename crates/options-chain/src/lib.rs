//! Options Chain Module
//!
//! Partitions a flat contract list into an expiration-indexed chain,
//! provides business-day math for expiry windows, and screens contracts
//! against the strategy eligibility rules and the low-premium scan.

pub mod busdays;
pub mod partition;
pub mod pozinho;
pub mod rules;

pub use busdays::{business_days_until, parse_expiration};
pub use partition::{ChainSlice, OptionsChain};
pub use pozinho::{scan_pozinho, PozinhoGroup};
pub use rules::{
    eligible_call_buy, eligible_covered_call, eligible_put_buy, eligible_put_sale, ContractView,
};
