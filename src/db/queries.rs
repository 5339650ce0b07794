use chrono::{Local, NaiveDate};
use rusqlite::{Result, Row, params};

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Provenance, StaffplanOverride, TimeEntry};

fn parse_day_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn map_entry_row(row: &Row<'_>) -> Result<TimeEntry> {
    let day_str: String = row.get("day")?;
    let source_str: String = row.get("source")?;
    Ok(TimeEntry {
        employee_id: row.get("employee")?,
        day: parse_day_col(&day_str)?,
        project: row.get("project")?,
        project_id: row.get("project_id")?,
        project_short: row.get("project_short")?,
        customer: row.get("customer")?,
        customer_po: row.get("customer_po")?,
        internal_po: row.get("internal_po")?,
        task: row.get("task")?,
        minutes: row.get::<_, i64>("minutes")?.max(0) as u32,
        source: Provenance::from_db_str(&source_str).unwrap_or(Provenance::Raw),
    })
}

fn map_staffplan_row(row: &Row<'_>) -> Result<StaffplanOverride> {
    let day_str: String = row.get("day")?;
    Ok(StaffplanOverride {
        employee_id: row.get("employee")?,
        day: parse_day_col(&day_str)?,
        project: row.get("project")?,
        project_id: row.get("project_id")?,
        project_short: row.get("project_short")?,
        customer: row.get("customer")?,
        customer_po: row.get("customer_po")?,
        internal_po: row.get("internal_po")?,
        seq: row.get("id")?,
    })
}

pub fn insert_entry(pool: &mut DbPool, entry: &TimeEntry) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO entries
            (employee, day, project, project_id, project_short,
             customer, customer_po, internal_po, task, minutes, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            entry.employee_id,
            entry.day_str(),
            entry.project,
            entry.project_id,
            entry.project_short,
            entry.customer,
            entry.customer_po,
            entry.internal_po,
            entry.task,
            entry.minutes,
            entry.source.as_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn insert_staffplan(pool: &mut DbPool, ov: &StaffplanOverride) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO staffplan
            (employee, day, project, project_id, project_short,
             customer, customer_po, internal_po, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ov.employee_id,
            ov.day.format("%Y-%m-%d").to_string(),
            ov.project,
            ov.project_id,
            ov.project_short,
            ov.customer,
            ov.customer_po,
            ov.internal_po,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Load raw entries, optionally bounded to `[from, to]` inclusive.
pub fn load_entries(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM entries ORDER BY day ASC, employee ASC, id ASC",
            )?;
            let rows = stmt.query_map([], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((from, to)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM entries
                 WHERE day BETWEEN ?1 AND ?2
                 ORDER BY day ASC, employee ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    from.format("%Y-%m-%d").to_string(),
                    to.format("%Y-%m-%d").to_string()
                ],
                map_entry_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Load staffplan rows for the bounded range (or everything), in insertion
/// order. One-row-per-(employee, day) resolution happens in the merge
/// engine's index build, not here.
pub fn load_staffplan(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<StaffplanOverride>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM staffplan ORDER BY id ASC")?;
            let rows = stmt.query_map([], map_staffplan_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((from, to)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM staffplan
                 WHERE day BETWEEN ?1 AND ?2
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    from.format("%Y-%m-%d").to_string(),
                    to.format("%Y-%m-%d").to_string()
                ],
                map_staffplan_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
