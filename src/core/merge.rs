//! Merge engine: latest-wins staff-plan overrides applied to raw entries.

use std::collections::HashMap;

use crate::core::calendar::day_key;
use crate::models::{Provenance, StaffplanOverride, TimeEntry};

/// Lookup of authoritative overrides keyed by (employee, day key).
/// At most one override per key; absence means "no override for that
/// employee/day". Built once per render, read-only thereafter.
#[derive(Debug, Default)]
pub struct OverrideIndex {
    map: HashMap<(String, String), StaffplanOverride>,
}

impl OverrideIndex {
    pub fn get(&self, employee_id: &str, day: &str) -> Option<&StaffplanOverride> {
        self.map.get(&(employee_id.to_string(), day.to_string()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Reduce override rows into one winner per (employee, day) key.
/// A candidate replaces the stored override only when its `seq` is strictly
/// greater, so the tie-break rule stays in one place.
pub fn build_override_index<I>(overrides: I) -> OverrideIndex
where
    I: IntoIterator<Item = StaffplanOverride>,
{
    let map = overrides.into_iter().fold(
        HashMap::<(String, String), StaffplanOverride>::new(),
        |mut acc, ov| {
            let key = (ov.employee_id.clone(), day_key(&ov.day));
            match acc.get(&key) {
                Some(stored) if stored.seq >= ov.seq => {}
                _ => {
                    acc.insert(key, ov);
                }
            }
            acc
        },
    );
    OverrideIndex { map }
}

/// A field override applies only when it carries an actual value.
fn coalesce(over: &Option<String>, base: &Option<String>) -> Option<String> {
    match over {
        Some(v) if !v.trim().is_empty() => Some(v.clone()),
        _ => base.clone(),
    }
}

/// Apply the override index to raw rows, producing new reconciled rows.
///
/// A row without a matching override passes through unchanged. A matching
/// override replaces project, project_id, project_short, customer_po,
/// internal_po and customer field by field; override fields that are empty
/// fall back to the row's own value. Reconciled rows carry provenance
/// `staffplan`. Pure: inputs are never mutated, and running the result
/// through the same index again yields the same rows.
pub fn reconcile(rows: &[TimeEntry], index: &OverrideIndex) -> Vec<TimeEntry> {
    if index.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .map(|row| match index.get(&row.employee_id, &day_key(&row.day)) {
            None => row.clone(),
            Some(ov) => TimeEntry {
                employee_id: row.employee_id.clone(),
                day: row.day,
                project: coalesce(&ov.project, &row.project),
                project_id: coalesce(&ov.project_id, &row.project_id),
                project_short: coalesce(&ov.project_short, &row.project_short),
                customer: coalesce(&ov.customer, &row.customer),
                customer_po: coalesce(&ov.customer_po, &row.customer_po),
                internal_po: coalesce(&ov.internal_po, &row.internal_po),
                task: row.task.clone(),
                minutes: row.minutes,
                source: Provenance::Staffplan,
            },
        })
        .collect()
}
