use research_core::RawNumeric;

use crate::fmt::format_pt_br;
use crate::parse::try_parse_locale_str;

/// Sentinel shown when a percentage has no usable value.
pub const EMPTY_PERCENT: &str = "--";

/// Normalize a value to a whole percentage using the magnitude heuristic:
/// values strictly between -1 and 1 (and nonzero) are read as fractions
/// and scaled by 100; everything else is already a whole percentage, so
/// the function is idempotent for |v| >= 1.
///
/// Known limitation: a true sub-1% percentage stored as a whole number
/// (0.5 meaning "0.5%") is indistinguishable from a fraction (0.005
/// meaning "0.5%") and gets the fraction reading. The upstream source
/// behaves the same way; callers must not re-interpret.
pub fn to_whole_percent(value: f64) -> f64 {
    if value > -1.0 && value < 1.0 && value != 0.0 {
        value * 100.0
    } else {
        value
    }
}

/// Format an upstream percentage field for display: two decimals, comma
/// separator, pt-BR grouping, trailing `%`.
///
/// Missing input and a raw numeric zero render as the `"--"` sentinel.
/// Text that does not parse at all is passed through unchanged, matching
/// how the upstream rows display their own garbage.
pub fn format_percentage(input: &RawNumeric) -> String {
    match input {
        RawNumeric::Missing => EMPTY_PERCENT.to_string(),
        RawNumeric::Number(n) => {
            if !n.is_finite() || *n == 0.0 {
                EMPTY_PERCENT.to_string()
            } else {
                render_percent(*n)
            }
        }
        RawNumeric::Text(s) => {
            if s.trim().is_empty() {
                return EMPTY_PERCENT.to_string();
            }
            match try_parse_locale_str(s) {
                Some(v) => render_percent(v),
                None => s.clone(),
            }
        }
    }
}

/// Format a daily-change fraction as a signed percentage without digit
/// grouping: `0.0005` renders as `"+0,05%"`. The scale factor is
/// unconditional; the upstream feed always delivers the day change as a
/// fraction.
pub fn format_signed_percent(fraction: f64) -> String {
    let pct = if fraction.is_finite() {
        fraction * 100.0
    } else {
        0.0
    };
    let sign = if pct > 0.0 { "+" } else { "" };
    format!("{sign}{}%", format!("{pct:.2}").replace('.', ","))
}

fn render_percent(value: f64) -> String {
    format!("{}%", format_pt_br(to_whole_percent(value), 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_scale_to_whole_percent() {
        assert_eq!(to_whole_percent(0.03), 3.0);
        assert_eq!(to_whole_percent(-0.095), -9.5);
    }

    #[test]
    fn whole_percentages_are_idempotent() {
        assert_eq!(to_whole_percent(3.21), 3.21);
        assert_eq!(to_whole_percent(to_whole_percent(3.21)), 3.21);
        assert_eq!(to_whole_percent(1.0), 1.0);
        assert_eq!(to_whole_percent(-1.0), -1.0);
        assert_eq!(to_whole_percent(0.0), 0.0);
    }

    #[test]
    fn formats_numbers_and_strings() {
        assert_eq!(format_percentage(&RawNumeric::Number(0.03)), "3,00%");
        assert_eq!(format_percentage(&RawNumeric::Number(3.21)), "3,21%");
        assert_eq!(format_percentage(&RawNumeric::Text("3,21".into())), "3,21%");
        assert_eq!(format_percentage(&RawNumeric::Text("0,03".into())), "3,00%");
    }

    #[test]
    fn empty_and_zero_map_to_sentinel() {
        assert_eq!(format_percentage(&RawNumeric::Missing), "--");
        assert_eq!(format_percentage(&RawNumeric::Number(0.0)), "--");
        assert_eq!(format_percentage(&RawNumeric::Text("".into())), "--");
    }

    #[test]
    fn string_zero_is_a_real_value() {
        // A textual "0" is an actual reading from the sheet, not absence.
        assert_eq!(format_percentage(&RawNumeric::Text("0".into())), "0,00%");
    }

    #[test]
    fn unparseable_text_passes_through() {
        assert_eq!(
            format_percentage(&RawNumeric::Text("em revisão".into())),
            "em revisão"
        );
    }

    #[test]
    fn grouped_output_for_large_values() {
        assert_eq!(format_percentage(&RawNumeric::Number(1234.5)), "1.234,50%");
    }

    #[test]
    fn signed_percent_scales_and_signs() {
        assert_eq!(format_signed_percent(0.0005), "+0,05%");
        assert_eq!(format_signed_percent(-0.0123), "-1,23%");
        assert_eq!(format_signed_percent(0.0), "0,00%");
    }
}
