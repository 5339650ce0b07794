//! Aligned terminal listing of reconciled entries.

use unicode_width::UnicodeWidthStr;

use crate::core::grouping::PLACEHOLDER;
use crate::models::TimeEntry;
use crate::utils::minutes_to_hhmm;

fn opt(v: &Option<String>) -> &str {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => PLACEHOLDER,
    }
}

/// Print entries as an aligned table plus a total line.
pub fn print_entries_table(entries: &[TimeEntry], title: &str) {
    println!("📋 {}:", title);
    if entries.is_empty() {
        println!("(no entries)");
        return;
    }
    println!();

    let headers = ["Date", "Employee", "Project", "PO", "Task", "Time", "Src"];
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let mut cells: Vec<[String; 7]> = Vec::with_capacity(entries.len());
    for e in entries {
        let row = [
            e.day_str(),
            e.employee_id.clone(),
            opt(&e.project_short).to_string(),
            opt(&e.internal_po).to_string(),
            opt(&e.task).to_string(),
            minutes_to_hhmm(e.minutes),
            e.source.as_str().to_string(),
        ];
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
        cells.push(row);
    }

    let fmt_row = |row: &[&str]| {
        row.iter()
            .enumerate()
            .map(|(i, c)| {
                let pad = widths[i] - UnicodeWidthStr::width(*c);
                if i == 5 {
                    format!("{}{}", " ".repeat(pad), c)
                } else {
                    format!("{}{}", c, " ".repeat(pad))
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", fmt_row(&headers));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &cells {
        let r: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
        println!("{}", fmt_row(&r));
    }

    let total: u32 = entries.iter().map(|e| e.minutes).sum();
    println!();
    println!("Σ Total: {}", minutes_to_hhmm(total));
}
