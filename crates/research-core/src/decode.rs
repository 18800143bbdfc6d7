//! Decoding of Market Data Service payloads.
//!
//! The upstream schema is owned externally; these wrappers are the only
//! fallible surface in the workspace. Everything downstream of a decoded
//! record is total.

use crate::error::ResearchError;
use crate::types::{FundamentalsPoint, HistoryPoint, OptionContract, Security};

pub fn decode_securities(payload: &str) -> Result<Vec<Security>, ResearchError> {
    serde_json::from_str(payload)
        .map_err(|e| ResearchError::InvalidPayload(format!("securities: {e}")))
}

pub fn decode_contracts(payload: &str) -> Result<Vec<OptionContract>, ResearchError> {
    serde_json::from_str(payload)
        .map_err(|e| ResearchError::InvalidPayload(format!("options: {e}")))
}

pub fn decode_fundamentals(payload: &str) -> Result<Vec<FundamentalsPoint>, ResearchError> {
    serde_json::from_str(payload)
        .map_err(|e| ResearchError::InvalidPayload(format!("fundamentals: {e}")))
}

pub fn decode_history(payload: &str) -> Result<Vec<HistoryPoint>, ResearchError> {
    serde_json::from_str(payload)
        .map_err(|e| ResearchError::InvalidPayload(format!("history: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_shape_securities() {
        let payload = r#"[
            {"ticker": "PETR4", "sector": "Petróleo", "price": "R$ 38,12", "falta_val": -9.0},
            {"ticker": "VALE3", "price": 61.5, "change_day": "0,0005"}
        ]"#;

        let securities = decode_securities(payload).unwrap();
        assert_eq!(securities.len(), 2);
        assert_eq!(securities[0].falta_val, Some(-9.0));
        assert_eq!(securities[1].price.as_number(), Some(61.5));
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = decode_securities("{\"error\": \"quota\"}").unwrap_err();
        assert!(err.to_string().contains("securities"));
    }
}
