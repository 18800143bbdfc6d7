use crate::fmt::format_pt_br;

/// Full BRL rendering: `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_pt_br(value, 2))
}

/// Compact BRL rendering for chart axes: millions collapse to `R$ 12M`,
/// smaller magnitudes drop the cents.
pub fn format_currency_compact(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("R$ {:.0}M", value / 1_000_000.0)
    } else {
        format!("R$ {value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_currency() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(-38.1), "R$ -38,10");
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn compacts_millions() {
        assert_eq!(format_currency_compact(12_000_000.0), "R$ 12M");
        assert_eq!(format_currency_compact(987.4), "R$ 987");
        assert_eq!(format_currency_compact(-2_600_000.0), "R$ -3M");
    }
}
