use serde::Serialize;

use crate::models::TimeEntry;
use crate::utils::minutes_to_hhmm;

/// Flat record for the tabular export formats.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub employee: String,
    pub day: String,
    pub project: String,
    pub project_id: String,
    pub project_short: String,
    pub customer: String,
    pub customer_po: String,
    pub internal_po: String,
    pub task: String,
    pub minutes: u32,
    pub time: String,
    pub source: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        let flat = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            employee: e.employee_id.clone(),
            day: e.day_str(),
            project: flat(&e.project),
            project_id: flat(&e.project_id),
            project_short: flat(&e.project_short),
            customer: flat(&e.customer),
            customer_po: flat(&e.customer_po),
            internal_po: flat(&e.internal_po),
            task: flat(&e.task),
            minutes: e.minutes,
            time: minutes_to_hhmm(e.minutes),
            source: e.source.as_str().to_string(),
        }
    }
}

/// Header for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee",
        "day",
        "project",
        "project_id",
        "project_short",
        "customer",
        "customer_po",
        "internal_po",
        "task",
        "minutes",
        "time",
        "source",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.employee.clone(),
        e.day.clone(),
        e.project.clone(),
        e.project_id.clone(),
        e.project_short.clone(),
        e.customer.clone(),
        e.customer_po.clone(),
        e.internal_po.clone(),
        e.task.clone(),
        e.minutes.to_string(),
        e.time.clone(),
        e.source.clone(),
    ]
}

pub(crate) fn entries_to_table(entries: &[EntryExport]) -> Vec<Vec<String>> {
    entries.iter().map(entry_to_row).collect()
}
