use chrono::{Datelike, NaiveDate};

/// Parse an expiration string in either upstream format: ISO
/// `"YYYY-MM-DD"` or the sheet's `"DD/MM/YYYY"`.
pub fn parse_expiration(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.contains('/') {
        NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok()
    } else if trimmed.contains('-') {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// Count Monday-to-Friday business days in `[today, expiry)`.
///
/// Expired or same-day contracts count 0. Exchange holidays are not
/// modeled; the strategy windows tolerate the off-by-a-few.
pub fn business_days_until(today: NaiveDate, expiry: NaiveDate) -> i64 {
    if expiry <= today {
        return 0;
    }

    let mut count = 0;
    let mut day = today;
    while day < expiry {
        if day.weekday().number_from_monday() <= 5 {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}
