use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it is not there yet.
///
/// `staffplan.id` doubles as the recency discriminator: rows are only ever
/// inserted, so a higher id means a later plan revision.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee      TEXT NOT NULL,
            day           TEXT NOT NULL,
            project       TEXT,
            project_id    TEXT,
            project_short TEXT,
            customer      TEXT,
            customer_po   TEXT,
            internal_po   TEXT,
            task          TEXT,
            minutes       INTEGER NOT NULL DEFAULT 0,
            source        TEXT NOT NULL DEFAULT 'raw',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_day ON entries(day);
        CREATE INDEX IF NOT EXISTS idx_entries_employee_day ON entries(employee, day);

        CREATE TABLE IF NOT EXISTS staffplan (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee      TEXT NOT NULL,
            day           TEXT NOT NULL,
            project       TEXT,
            project_id    TEXT,
            project_short TEXT,
            customer      TEXT,
            customer_po   TEXT,
            internal_po   TEXT,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_staffplan_employee_day ON staffplan(employee, day);
        "#,
    )?;
    Ok(())
}
