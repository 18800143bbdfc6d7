use serde::{Deserialize, Serialize};

/// Numeric field as delivered by the upstream spreadsheet-backed service.
///
/// The same column may arrive as a raw JSON number (`12.34`), a Brazilian
/// locale string (`"1.234,56"`, `"R$ 12,34"`, `"3,21%"`), or be absent
/// entirely. Deserialization is total: any JSON shape maps to one of the
/// three variants, so a partially filled row never fails a whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawNumeric {
    pub fn is_missing(&self) -> bool {
        matches!(self, RawNumeric::Missing)
    }

    /// Raw JSON number, if that is what arrived. Locale strings are not
    /// parsed here; that is the locale-numeric crate's job.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawNumeric::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawNumeric::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for RawNumeric {
    fn from(value: f64) -> Self {
        RawNumeric::Number(value)
    }
}

impl From<&str> for RawNumeric {
    fn from(value: &str) -> Self {
        RawNumeric::Text(value.to_string())
    }
}

/// One listed security as returned by `GET /stocks`.
///
/// `falta_val` is the signed distance (in percent) between the current
/// price and the computed cheap target: non-negative means the price is
/// at or below the target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Security {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub price: RawNumeric,
    #[serde(default, alias = "variation")]
    pub change_day: RawNumeric,
    #[serde(default)]
    pub falta_val: Option<f64>,
    #[serde(default)]
    pub falta_pct: Option<String>,
    #[serde(default, alias = "dy")]
    pub dividend: RawNumeric,
    #[serde(default)]
    pub payout: RawNumeric,
    /// Annualized historical volatility, e.g. "32,5%".
    #[serde(default, rename = "vol_ano")]
    pub vol_year: RawNumeric,
    /// Cheap ("low cost") target price.
    #[serde(default)]
    pub min_val: RawNumeric,
    /// Expensive ("high cost") target price.
    #[serde(default)]
    pub max_val: RawNumeric,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One option contract as returned by `GET /stocks/{ticker}/options`.
///
/// Pricing metrics (delta, Black-Scholes fair price, probability of
/// success, edge) are computed upstream and only passed through here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionContract {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub underlying: Option<String>,
    /// Free-form contract kind: "CALL", "PUT", but also variants such as
    /// "CALL_LONG" or the Portuguese "VENDA"/"COMPRA" labels.
    #[serde(default, rename = "type")]
    pub contract_type: String,
    #[serde(default)]
    pub strike: RawNumeric,
    /// "YYYY-MM-DD" or "DD/MM/YYYY".
    #[serde(default)]
    pub expiration: String,
    /// Last traded premium in currency units.
    #[serde(default, alias = "price", alias = "last_price")]
    pub price_val: RawNumeric,
    /// Premium over spot, as a fraction (0.01 = 1%).
    #[serde(default, rename = "premium_val")]
    pub premium_yield: RawNumeric,
    #[serde(default, alias = "dist_val")]
    pub distance: RawNumeric,
    #[serde(default)]
    pub delta_val: RawNumeric,
    #[serde(default)]
    pub prob_success: Option<String>,
    #[serde(default)]
    pub bs_price_val: Option<String>,
    #[serde(default)]
    pub edge_formatted: Option<String>,
}

/// One reporting period from `GET /stocks/{ticker}/fundamentals`.
/// Index position within the series is the independent variable for
/// trend fitting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalsPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "lucro")]
    pub profit: Option<f64>,
    #[serde(default, rename = "patrimonio")]
    pub equity: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
}

/// One point from `GET /stocks/{ticker}/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub price: RawNumeric,
}
