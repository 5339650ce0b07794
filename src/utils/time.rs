//! Duration formatting: whole minutes to HH:MM display.

/// Format a minute count as `HH:MM`.
/// Hours truncate via integer division, the remainder becomes the minutes.
/// No upper bound: group totals above 24h render as e.g. "26:15".
pub fn minutes_to_hhmm(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
