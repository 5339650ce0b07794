use chrono::NaiveDate;
use serde::Serialize;

/// Authoritative staff-planning row for one employee on one day.
///
/// `seq` is the recency discriminator (the monotonically increasing row id):
/// when several overrides share an (employee, day) key, the one with the
/// greatest `seq` wins. Override fields are optional; a missing field falls
/// back to the raw entry's value during reconciliation rather than blanking
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffplanOverride {
    pub employee_id: String,
    pub day: NaiveDate,
    pub project: Option<String>,
    pub project_id: Option<String>,
    pub project_short: Option<String>,
    pub customer: Option<String>,
    pub customer_po: Option<String>,
    pub internal_po: Option<String>,
    pub seq: i64,
}
