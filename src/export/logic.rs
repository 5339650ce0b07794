use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::grouping::GroupMode;
use crate::core::merge::{build_override_index, reconcile};
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_staffplan};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::TimeEntry;
use crate::render::{Logo, SheetOptions};
use crate::ui::messages::warning;
use crate::utils::date::display_date;
use crate::utils::path::expand_tilde;

pub struct ExportArgs {
    pub format: ExportFormat,
    pub file: String,
    pub range: Option<String>,
    pub group_by: GroupMode,
    pub title: String,
    pub logo: Option<String>,
    pub raw: bool,
    pub force: bool,
}

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Load the requested range, reconcile against the staffplan (unless
    /// `raw`), and write the selected format. Any load failure aborts
    /// before output is produced.
    pub fn export(pool: &mut DbPool, args: &ExportArgs) -> AppResult<()> {
        let path = Path::new(&args.file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {}",
                args.file
            ))));
        }

        ensure_writable(path, args.force)?;

        let bounds = resolve_bounds(&args.range)?;
        let entries = load_reconciled(pool, bounds, args.raw)?;

        if entries.is_empty() && !matches!(args.format, ExportFormat::Pdf) {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        match args.format {
            ExportFormat::Csv => {
                let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                export_csv(&flat, path)?;
            }
            ExportFormat::Json => {
                let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                export_json(&flat, path)?;
            }
            ExportFormat::Xlsx => {
                let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                export_xlsx(&flat, path)?;
            }
            ExportFormat::Pdf => {
                let opts = SheetOptions {
                    group_mode: args.group_by,
                    title: args.title.clone(),
                    period: bounds.map(period_label),
                    logo: load_logo(&args.logo),
                };
                export_pdf(&entries, path, &opts)?;
            }
        }

        Ok(())
    }
}

/// `None` and `all` mean the entire archive.
fn resolve_bounds(range: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// Load entries and staffplan rows for the bounds, then apply the
/// latest-wins merge. `raw` skips the override pass entirely.
pub fn load_reconciled(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
    raw: bool,
) -> AppResult<Vec<TimeEntry>> {
    let entries = load_entries(pool, bounds)?;
    if raw {
        return Ok(entries);
    }

    let overrides = load_staffplan(pool, bounds)?;
    let index = build_override_index(overrides);
    Ok(reconcile(&entries, &index))
}

fn period_label((from, to): (NaiveDate, NaiveDate)) -> String {
    if from == to {
        format!("Zeitraum: {}", display_date(&from))
    } else {
        format!("Zeitraum: {} - {}", display_date(&from), display_date(&to))
    }
}

/// Decorative asset: every failure path degrades to "no logo".
fn load_logo(path: &Option<String>) -> Option<Logo> {
    let p = path.as_ref()?;
    let expanded = expand_tilde(p);
    let logo = Logo::from_jpeg_path(&expanded);
    if logo.is_none() {
        warning(format!("Logo not usable, skipping: {}", expanded.display()));
    }
    logo
}
