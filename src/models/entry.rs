use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the displayed fields of a reconciled entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Raw,
    Staffplan,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Raw => "raw",
            Provenance::Staffplan => "staffplan",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "raw" => Some(Provenance::Raw),
            "staffplan" => Some(Provenance::Staffplan),
            _ => None,
        }
    }
}

/// One time-tracking row, raw or reconciled.
///
/// Duration is whole minutes (non-negative); display conversion to HH:MM
/// truncates hours via integer division. The merge engine never mutates
/// these in place, it produces new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub employee_id: String,
    pub day: NaiveDate,
    pub project: Option<String>,
    pub project_id: Option<String>,
    pub project_short: Option<String>,
    pub customer: Option<String>,
    pub customer_po: Option<String>,
    pub internal_po: Option<String>,
    pub task: Option<String>,
    pub minutes: u32,
    pub source: Provenance,
}

impl TimeEntry {
    pub fn day_str(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}
