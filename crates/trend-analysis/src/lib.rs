//! Trend Analysis Module
//!
//! Ordinary-least-squares line fits over ordered series, used to overlay
//! trend lines on fundamentals and price-history charts.

use locale_numeric::parse_locale_number;
use research_core::{FundamentalsPoint, HistoryPoint};
use serde::Serialize;

/// A fitted trend line and its values over the input index range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    pub fitted: Vec<f64>,
}

/// Independent fits for each fundamentals metric over the same index
/// domain. Metrics are never mixed into one regression.
#[derive(Debug, Clone, Serialize)]
pub struct FundamentalsTrends {
    pub profit: TrendFit,
    pub equity: TrendFit,
    /// ROE arrives as a fraction and is scaled to whole percent before
    /// fitting, so the fitted line shares the display scale.
    pub roe: TrendFit,
}

/// Least-squares line fit with the element index as the independent
/// variable.
///
/// Fewer than two points is a documented degenerate case, not an error:
/// the input comes back unchanged with a flat zero line. For n >= 2 the
/// denominator cannot vanish because indices are distinct integers; do
/// not filter or reorder the series before fitting, that is what keeps
/// the guarantee.
pub fn fit_trend(series: &[f64]) -> TrendFit {
    let n = series.len();
    if n < 2 {
        return TrendFit {
            slope: 0.0,
            intercept: 0.0,
            fitted: series.to_vec(),
        };
    }

    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / nf;

    TrendFit {
        slope,
        intercept,
        fitted: (0..n).map(|i| slope * i as f64 + intercept).collect(),
    }
}

/// Fit profit, equity and ROE trends over one fundamentals series.
/// Missing values read as 0, the way the upstream charts plot them.
pub fn fundamentals_trends(points: &[FundamentalsPoint]) -> FundamentalsTrends {
    let profit: Vec<f64> = points.iter().map(|p| p.profit.unwrap_or(0.0)).collect();
    let equity: Vec<f64> = points.iter().map(|p| p.equity.unwrap_or(0.0)).collect();
    let roe: Vec<f64> = points
        .iter()
        .map(|p| p.roe.unwrap_or(0.0) * 100.0)
        .collect();

    FundamentalsTrends {
        profit: fit_trend(&profit),
        equity: fit_trend(&equity),
        roe: fit_trend(&roe),
    }
}

/// Trend over a price history, with locale-formatted prices parsed first.
pub fn history_trend(points: &[HistoryPoint]) -> TrendFit {
    let prices: Vec<f64> = points.iter().map(|p| parse_locale_number(&p.price)).collect();
    fit_trend(&prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::RawNumeric;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn fits_a_perfect_line() {
        let fit = fit_trend(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_close(fit.slope, 1.0);
        assert_close(fit.intercept, 1.0);
        for (i, &value) in fit.fitted.iter().enumerate() {
            assert_close(value, 1.0 + i as f64);
        }
    }

    #[test]
    fn fits_a_flat_line() {
        let fit = fit_trend(&[7.0, 7.0, 7.0]);
        assert_close(fit.slope, 0.0);
        assert_close(fit.intercept, 7.0);
    }

    #[test]
    fn noisy_series_splits_the_residuals() {
        // Symmetric noise around y = x leaves the fit on the midline.
        let fit = fit_trend(&[0.5, 1.5, 1.5, 3.5, 3.5, 5.5]);
        assert!(fit.slope > 0.0);
        assert_eq!(fit.fitted.len(), 6);
    }

    #[test]
    fn short_series_comes_back_unchanged() {
        let fit = fit_trend(&[42.0]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 0.0);
        assert_eq!(fit.fitted, vec![42.0]);

        let empty = fit_trend(&[]);
        assert!(empty.fitted.is_empty());
    }

    #[test]
    fn fundamentals_metrics_fit_independently() {
        let points = vec![
            FundamentalsPoint {
                date: "2024-12".to_string(),
                profit: Some(100.0),
                equity: Some(1000.0),
                roe: Some(0.10),
            },
            FundamentalsPoint {
                date: "2025-12".to_string(),
                profit: Some(200.0),
                equity: Some(1100.0),
                roe: Some(0.18),
            },
        ];

        let trends = fundamentals_trends(&points);
        assert_close(trends.profit.slope, 100.0);
        assert_close(trends.equity.slope, 100.0);
        // ROE is scaled to whole percent before the fit.
        assert_close(trends.roe.slope, 8.0);
        assert_close(trends.roe.intercept, 10.0);
    }

    #[test]
    fn missing_fundamentals_read_as_zero() {
        let points = vec![
            FundamentalsPoint {
                profit: Some(100.0),
                ..FundamentalsPoint::default()
            },
            FundamentalsPoint::default(),
        ];

        let trends = fundamentals_trends(&points);
        assert_close(trends.profit.slope, -100.0);
        assert_close(trends.equity.slope, 0.0);
    }

    #[test]
    fn history_prices_parse_locale_strings() {
        let points = vec![
            HistoryPoint {
                date: "2026-08-01".to_string(),
                price: RawNumeric::Text("R$ 10,00".to_string()),
            },
            HistoryPoint {
                date: "2026-08-02".to_string(),
                price: RawNumeric::Text("R$ 12,00".to_string()),
            },
            HistoryPoint {
                date: "2026-08-03".to_string(),
                price: RawNumeric::Number(14.0),
            },
        ];

        let fit = history_trend(&points);
        assert_close(fit.slope, 2.0);
        assert_close(fit.intercept, 10.0);
    }
}
