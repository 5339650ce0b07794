use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::TimeEntry;
use crate::render::{SheetOptions, render_pdf};
use crate::ui::messages::info;

/// Render the Erfassungsbogen and write the finalized bytes.
pub(crate) fn export_pdf(entries: &[TimeEntry], path: &Path, opts: &SheetOptions) -> AppResult<()> {
    info(format!("Rendering Erfassungsbogen: {}", path.display()));

    let bytes = render_pdf(entries, opts);

    let mut f = File::create(path)?;
    f.write_all(&bytes)?;

    notify_export_success("PDF", path);
    Ok(())
}
