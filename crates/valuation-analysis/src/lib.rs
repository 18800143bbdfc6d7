//! Valuation Analysis Module
//!
//! Classifies securities into valuation tiers from their distance to the
//! cheap target, ranks sectors by best available opportunity, surfaces
//! market movers, and screens stocks+options into strategy opportunities.

pub mod classifier;
pub mod movers;
pub mod screener;
pub mod sector;

pub use classifier::{classify, classify_with, Classification, ValuationTier};
pub use movers::{market_movers, Movers};
pub use screener::{screen_opportunities, Category, Opportunity};
pub use sector::{rank_sectors, SectorRank};
