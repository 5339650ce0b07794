//! Calendar utilities: canonical day keys and ISO-8601 week numbers.

use chrono::{Datelike, NaiveDate};

/// Canonical `YYYY-MM-DD` key for a calendar day. Merge lookups and the
/// by-day grouping both key on this string.
pub fn day_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// ISO-8601 (year, week) pair.
///
/// The year is the week-numbering year of the date's Thursday, which can
/// differ from the calendar year at year boundaries: Dec 31 may fall into
/// week 1 of the following year, Jan 1-3 into week 52/53 of the previous
/// one. That boundary behavior is load-bearing for the by-week grouping.
pub fn iso_week(d: &NaiveDate) -> (i32, u32) {
    let iw = d.iso_week();
    (iw.year(), iw.week())
}

/// Week label as printed on the sheet, e.g. `KW 02/2024`.
pub fn week_label(d: &NaiveDate) -> String {
    let (year, week) = iso_week(d);
    format!("KW {:02}/{}", week, year)
}
