//! CSV ingestion of time-tracking rows and staffplan rows.
//!
//! This is the boundary where date strings are validated; everything past
//! it works on typed dates.

use std::path::Path;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::{Provenance, StaffplanOverride, TimeEntry};
use crate::utils::date::parse_day;

#[derive(Debug, Deserialize)]
struct EntryRecord {
    employee: String,
    day: String,
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    project_short: Option<String>,
    #[serde(default)]
    customer: Option<String>,
    #[serde(default)]
    customer_po: Option<String>,
    #[serde(default)]
    internal_po: Option<String>,
    #[serde(default)]
    task: Option<String>,
    minutes: String,
}

#[derive(Debug, Deserialize)]
struct StaffplanRecord {
    employee: String,
    day: String,
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    project_short: Option<String>,
    #[serde(default)]
    customer: Option<String>,
    #[serde(default)]
    customer_po: Option<String>,
    #[serde(default)]
    internal_po: Option<String>,
}

fn clean(v: Option<String>) -> Option<String> {
    v.and_then(|s| {
        let t = s.trim();
        if t.is_empty() { None } else { Some(t.to_string()) }
    })
}

fn parse_minutes(raw: &str) -> AppResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidMinutes(raw.to_string()))
}

/// Read raw time entries from a CSV file with headers.
pub fn read_entries_csv(path: &Path) -> AppResult<Vec<TimeEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();

    for record in reader.deserialize::<EntryRecord>() {
        let rec = record?;
        out.push(TimeEntry {
            employee_id: rec.employee.trim().to_string(),
            day: parse_day(&rec.day)?,
            project: clean(rec.project),
            project_id: clean(rec.project_id),
            project_short: clean(rec.project_short),
            customer: clean(rec.customer),
            customer_po: clean(rec.customer_po),
            internal_po: clean(rec.internal_po),
            task: clean(rec.task),
            minutes: parse_minutes(&rec.minutes)?,
            source: Provenance::Raw,
        });
    }

    Ok(out)
}

/// Read staffplan override rows from a CSV file with headers.
/// `seq` is assigned by the database on insert; rows read here carry 0.
pub fn read_staffplan_csv(path: &Path) -> AppResult<Vec<StaffplanOverride>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();

    for record in reader.deserialize::<StaffplanRecord>() {
        let rec = record?;
        out.push(StaffplanOverride {
            employee_id: rec.employee.trim().to_string(),
            day: parse_day(&rec.day)?,
            project: clean(rec.project),
            project_id: clean(rec.project_id),
            project_short: clean(rec.project_short),
            customer: clean(rec.customer),
            customer_po: clean(rec.customer_po),
            internal_po: clean(rec.internal_po),
            seq: 0,
        });
    }

    Ok(out)
}
