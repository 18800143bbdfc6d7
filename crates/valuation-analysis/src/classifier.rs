use research_core::config::TierThresholds;
use serde::{Deserialize, Serialize};

/// Risk tier derived from the distance to the cheap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationTier {
    Green,
    Yellow,
    Red,
}

impl ValuationTier {
    pub fn name(&self) -> &'static str {
        match self {
            ValuationTier::Green => "green",
            ValuationTier::Yellow => "yellow",
            ValuationTier::Red => "red",
        }
    }
}

/// Display-ready classification: progress-bar fill plus tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub fill_percent: f64,
    pub tier: ValuationTier,
}

/// Classify a signed distance to target with the default thresholds.
///
/// Non-negative falta means the price is at or below the cheap target:
/// full bar, green. Negative falta reduces the fill by the gap magnitude
/// and walks the tiers down as the gap widens.
pub fn classify(falta_val: f64) -> Classification {
    classify_with(falta_val, TierThresholds::default())
}

pub fn classify_with(falta_val: f64, thresholds: TierThresholds) -> Classification {
    if falta_val >= 0.0 {
        return Classification {
            fill_percent: 100.0,
            tier: ValuationTier::Green,
        };
    }

    let distance = falta_val.abs();
    let tier = if distance <= thresholds.green_max {
        ValuationTier::Green
    } else if distance <= thresholds.yellow_max {
        ValuationTier::Yellow
    } else {
        ValuationTier::Red
    };

    Classification {
        fill_percent: (100.0 - distance).clamp(0.0, 100.0),
        tier,
    }
}
