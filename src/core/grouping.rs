//! Grouping: bucket reconciled entries by day, ISO week or project and put
//! groups and rows into their final, deterministic order.

use std::collections::HashMap;

use clap::ValueEnum;

use crate::core::calendar::{day_key, week_label};
use crate::models::TimeEntry;
use crate::utils::compare_de;

/// Placeholder used wherever an optional field has no value.
pub const PLACEHOLDER: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupMode {
    Day,
    Week,
    Project,
}

impl GroupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupMode::Day => "day",
            GroupMode::Week => "week",
            GroupMode::Project => "project",
        }
    }
}

/// A labeled bucket of entries, rendered together with its own header and
/// summary row. Ephemeral: exists only for the duration of one render pass.
#[derive(Debug, Clone)]
pub struct Group {
    pub label: String,
    pub entries: Vec<TimeEntry>,
}

impl Group {
    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|e| e.minutes).sum()
    }
}

/// Group key of one entry under the given mode.
pub fn group_key(entry: &TimeEntry, mode: GroupMode) -> String {
    match mode {
        GroupMode::Day => day_key(&entry.day),
        GroupMode::Week => week_label(&entry.day),
        GroupMode::Project => match &entry.project_short {
            Some(short) if !short.trim().is_empty() => match &entry.internal_po {
                Some(po) if !po.trim().is_empty() => format!("{} / {}", short, po),
                _ => short.clone(),
            },
            _ => PLACEHOLDER.to_string(),
        },
    }
}

fn project_label(entry: &TimeEntry) -> &str {
    entry.project_short.as_deref().unwrap_or("")
}

/// Bucket entries into ordered groups.
///
/// Two distinct sort passes: group keys are ordered by German collation,
/// then each group's rows are ordered by day key ascending with the
/// collated project label as tie-break. Bucketing itself preserves
/// first-seen insertion order per key so the sort passes are the only
/// source of ordering.
pub fn group_entries(entries: &[TimeEntry], mode: GroupMode) -> Vec<Group> {
    let mut buckets: Vec<(String, Vec<TimeEntry>)> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = group_key(entry, mode);
        match by_key.get(&key) {
            Some(&idx) => buckets[idx].1.push(entry.clone()),
            None => {
                by_key.insert(key.clone(), buckets.len());
                buckets.push((key, vec![entry.clone()]));
            }
        }
    }

    // Pass 1: group order.
    buckets.sort_by(|a, b| compare_de(&a.0, &b.0));

    // Pass 2: row order inside each group.
    for (_, rows) in buckets.iter_mut() {
        rows.sort_by(|a, b| {
            day_key(&a.day)
                .cmp(&day_key(&b.day))
                .then_with(|| compare_de(project_label(a), project_label(b)))
        });
    }

    buckets
        .into_iter()
        .map(|(label, entries)| Group { label, entries })
        .collect()
}
