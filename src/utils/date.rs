use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` string. This is the single place where date strings
/// from CSV files or the command line enter the typed world; everything past
/// the ingestion boundary works on NaiveDate and needs no validation.
pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Display form used on the printed sheet: `DD.MM.YYYY`.
pub fn display_date(d: &NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}
