use research_core::RawNumeric;

/// Parse a Brazilian locale numeric string into an `f64`.
///
/// Strips the `R$` currency marker, a trailing `%`, and whitespace, then
/// removes the `.` thousands separators before swapping the decimal comma
/// for a dot. The order matters: `"1.234,56"` is always thousands-separated
/// pt-BR notation, never `1.234` with three decimals. Anything that still
/// fails to parse yields `0.0`; this function never panics.
pub fn parse_locale_str(input: &str) -> f64 {
    try_parse_locale_str(input).unwrap_or(0.0)
}

/// Fallible variant of [`parse_locale_str`], for callers that must tell a
/// genuine zero apart from unparseable text.
pub fn try_parse_locale_str(input: &str) -> Option<f64> {
    let stripped = input.replace("R$", "");
    let stripped = stripped.trim().trim_end_matches('%').trim();
    if stripped.is_empty() {
        return None;
    }

    let normalized = stripped.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Total parse of an upstream numeric field, defaulting to `0.0`.
///
/// Raw numbers pass through unchanged (non-finite coerces to 0); strings
/// go through [`parse_locale_str`]; missing values map to the default.
pub fn parse_locale_number(input: &RawNumeric) -> f64 {
    parse_or(input, 0.0)
}

/// Same as [`parse_locale_number`] with an explicit fallback for missing
/// or unparseable input, for call sites where 0 is a meaningful value.
pub fn parse_or(input: &RawNumeric, fallback: f64) -> f64 {
    match input {
        RawNumeric::Number(n) if n.is_finite() => *n,
        RawNumeric::Number(_) => fallback,
        RawNumeric::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return fallback;
            }
            try_parse_locale_str(trimmed).unwrap_or(fallback)
        }
        RawNumeric::Missing => fallback,
    }
}
