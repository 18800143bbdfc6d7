use std::collections::HashMap;

use research_core::config::{DEFAULT_SECTOR, SECTOR_ICON_LIMIT};
use research_core::Security;
use serde::Serialize;

/// One sector card: member count, representative icons, and the
/// opportunity score that orders the cards.
#[derive(Debug, Clone, Serialize)]
pub struct SectorRank {
    pub sector: String,
    pub count: usize,
    /// Up to [`SECTOR_ICON_LIMIT`] representative icons, best
    /// opportunity first: the security's image URL when the sheet has
    /// one, its ticker otherwise.
    pub top_icons: Vec<String>,
    /// Best falta_val in the group; securities with no falta contribute
    /// negative infinity.
    pub score: f64,
}

/// Group securities by sector and order the groups by their best
/// opportunity, descending.
///
/// Ordering is deterministic: groups keep first-encounter order on score
/// ties, members keep input order on falta ties (stable sorts all the
/// way down), so shuffled upstream iteration cannot reorder equal rows.
pub fn rank_sectors(securities: &[Security]) -> Vec<SectorRank> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&Security>> = HashMap::new();

    for security in securities {
        let sector = security
            .sector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SECTOR)
            .to_string();
        let members = groups.entry(sector.clone()).or_default();
        if members.is_empty() {
            order.push(sector);
        }
        members.push(security);
    }

    let mut ranks: Vec<SectorRank> = order
        .into_iter()
        .map(|sector| {
            let members = &groups[&sector];
            let score = members
                .iter()
                .map(|s| opportunity(s))
                .fold(f64::NEG_INFINITY, f64::max);

            let mut by_opportunity = members.clone();
            by_opportunity.sort_by(|a, b| {
                opportunity(b)
                    .partial_cmp(&opportunity(a))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            SectorRank {
                count: members.len(),
                top_icons: by_opportunity
                    .iter()
                    .take(SECTOR_ICON_LIMIT)
                    .map(|s| s.image_url.clone().unwrap_or_else(|| s.ticker.clone()))
                    .collect(),
                score,
                sector,
            }
        })
        .collect();

    ranks.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranks
}

fn opportunity(security: &Security) -> f64 {
    security.falta_val.unwrap_or(f64::NEG_INFINITY)
}
