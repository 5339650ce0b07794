//! Sheet layout engine: streams ordered groups onto a paginated drawing
//! surface with a fixed column layout, shaded header rows and per-group
//! totals.
//!
//! One render is a single forward pass: header block, then per group a
//! title line, the table header, the entry rows (with a per-row page-break
//! check) and a bold summary row. A mid-group page break does not repeat
//! the table header.

use crate::core::grouping::{GroupMode, PLACEHOLDER, group_entries};
use crate::models::TimeEntry;
use crate::render::pdf::PdfSurface;
use crate::render::surface::{Align, DrawSurface, Logo, TextStyle};
use crate::utils::date::display_date;
use crate::utils::minutes_to_hhmm;

const FONT_SIZE: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 14.0;

/// Kept below the bottom margin so a row never prints flush with the edge.
const BOTTOM_RESERVE: f32 = 20.0;

const LOGO_WIDTH: f32 = 80.0;

/// Fixed column widths; the task column absorbs whatever remains.
const DATE_W: f32 = 70.0;
const PROJECT_W: f32 = 130.0;
const PO_W: f32 = 90.0;
const TIME_W: f32 = 45.0;

pub struct SheetOptions {
    pub group_mode: GroupMode,
    pub title: String,
    pub period: Option<String>,
    pub logo: Option<Logo>,
}

struct Columns {
    date_x: f32,
    project_x: f32,
    po_x: f32,
    task_x: f32,
    task_w: f32,
    time_x: f32,
}

impl Columns {
    fn new(margin: f32, content_width: f32) -> Self {
        let date_x = margin;
        let project_x = date_x + DATE_W;
        let po_x = project_x + PROJECT_W;
        let task_x = po_x + PO_W;
        let task_w = content_width - DATE_W - PROJECT_W - PO_W - TIME_W;
        let time_x = task_x + task_w;
        Self {
            date_x,
            project_x,
            po_x,
            task_x,
            task_w,
            time_x,
        }
    }
}

fn opt_text(v: &Option<String>) -> &str {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => PLACEHOLDER,
    }
}

/// Render the full sheet onto any drawing surface.
pub fn render_sheet<S: DrawSurface>(surface: &mut S, entries: &[TimeEntry], opts: &SheetOptions) {
    let m = surface.metrics();
    let cols = Columns::new(m.margin, m.content_width());
    let row_h = m.row_height;

    surface.begin_page();
    let mut y = m.height - m.margin;

    // -----------------------------
    // Title / period / logo block, first page only
    // -----------------------------
    if let Some(logo) = &opts.logo {
        let h = logo.height_for_width(LOGO_WIDTH);
        surface.place_logo(logo, m.width - m.margin - LOGO_WIDTH, y - h, LOGO_WIDTH, h);
    }
    y -= row_h;
    surface.place_text(&opts.title, m.margin, y, m.content_width(), Align::Left, TextStyle::Bold, TITLE_FONT_SIZE);
    if let Some(period) = &opts.period {
        y -= row_h * 0.8;
        surface.place_text(period, m.margin, y, m.content_width(), Align::Left, TextStyle::Regular, FONT_SIZE);
    }
    y -= row_h;

    for group in group_entries(entries, opts.group_mode) {
        // Group title line.
        y -= row_h;
        surface.place_text(&group.label, m.margin, y, m.content_width(), Align::Left, TextStyle::Bold, HEADER_FONT_SIZE);
        y -= row_h;

        // Shaded table header with a thin rule underneath. Drawn once per
        // group, not repeated after a mid-group page break.
        surface.fill_rect(m.margin, y, m.content_width(), row_h, 0.88);
        let ty = y + 6.0;
        surface.place_text("Datum", cols.date_x, ty, DATE_W, Align::Left, TextStyle::Bold, HEADER_FONT_SIZE);
        surface.place_text("Projekt", cols.project_x, ty, PROJECT_W, Align::Left, TextStyle::Bold, HEADER_FONT_SIZE);
        surface.place_text("Bestell-Nr.", cols.po_x, ty, PO_W, Align::Left, TextStyle::Bold, HEADER_FONT_SIZE);
        surface.place_text("Tätigkeit", cols.task_x, ty, cols.task_w, Align::Left, TextStyle::Bold, HEADER_FONT_SIZE);
        surface.place_text("Zeit", cols.time_x, ty, TIME_W, Align::Right, TextStyle::Bold, HEADER_FONT_SIZE);
        surface.stroke_line(m.margin, y, m.margin + m.content_width(), y, 0.5);
        y -= row_h;

        for entry in &group.entries {
            // Per-row page break; the check never runs for titles, headers
            // or summary rows.
            if y < m.margin + BOTTOM_RESERVE {
                surface.begin_page();
                y = m.height - m.margin - row_h;
            }

            let ty = y + 6.0;
            surface.place_text(&display_date(&entry.day), cols.date_x, ty, DATE_W, Align::Left, TextStyle::Regular, FONT_SIZE);
            surface.place_text(opt_text(&entry.project_short), cols.project_x, ty, PROJECT_W, Align::Left, TextStyle::Regular, FONT_SIZE);
            surface.place_text(opt_text(&entry.internal_po), cols.po_x, ty, PO_W, Align::Left, TextStyle::Regular, FONT_SIZE);
            surface.place_text(opt_text(&entry.task), cols.task_x, ty, cols.task_w, Align::Left, TextStyle::Regular, FONT_SIZE);
            surface.place_text(&minutes_to_hhmm(entry.minutes), cols.time_x, ty, TIME_W, Align::Right, TextStyle::Regular, FONT_SIZE);
            y -= row_h;
        }

        // Bold summary row with the group total.
        surface.stroke_line(m.margin, y + row_h, m.margin + m.content_width(), y + row_h, 0.5);
        let ty = y + 6.0;
        surface.place_text("Summe", cols.date_x, ty, DATE_W, Align::Left, TextStyle::Bold, FONT_SIZE);
        surface.place_text(
            &minutes_to_hhmm(group.total_minutes()),
            cols.time_x,
            ty,
            TIME_W,
            Align::Right,
            TextStyle::Bold,
            FONT_SIZE,
        );
        y -= row_h;
    }
}

/// Render the sheet to finalized PDF bytes.
pub fn render_pdf(entries: &[TimeEntry], opts: &SheetOptions) -> Vec<u8> {
    let mut surface = PdfSurface::new();
    render_sheet(&mut surface, entries, opts);
    surface.finish()
}
