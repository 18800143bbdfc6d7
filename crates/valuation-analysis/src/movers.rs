use locale_numeric::parse_locale_number;
use research_core::config::MOVERS_LIMIT;
use research_core::Security;
use serde::Serialize;

/// Dashboard movers: biggest daily gainers, biggest losers, and top
/// dividend payers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Movers {
    pub highs: Vec<Security>,
    pub lows: Vec<Security>,
    pub dividends: Vec<Security>,
}

pub fn market_movers(securities: &[Security]) -> Movers {
    let mut by_change: Vec<&Security> = securities.iter().collect();
    by_change.sort_by(|a, b| {
        let va = parse_locale_number(&a.change_day);
        let vb = parse_locale_number(&b.change_day);
        vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut by_change_asc: Vec<&Security> = securities.iter().collect();
    by_change_asc.sort_by(|a, b| {
        let va = parse_locale_number(&a.change_day);
        let vb = parse_locale_number(&b.change_day);
        va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut by_dividend: Vec<&Security> = securities.iter().collect();
    by_dividend.sort_by(|a, b| {
        let va = parse_locale_number(&a.dividend);
        let vb = parse_locale_number(&b.dividend);
        vb.partial_cmp(&va).unwrap_or(std::cmp::Ordering::Equal)
    });

    Movers {
        highs: by_change
            .iter()
            .take(MOVERS_LIMIT)
            .map(|s| (*s).clone())
            .collect(),
        lows: by_change_asc
            .iter()
            .take(MOVERS_LIMIT)
            .map(|s| (*s).clone())
            .collect(),
        dividends: by_dividend
            .iter()
            .take(MOVERS_LIMIT)
            .map(|s| (*s).clone())
            .collect(),
    }
}
