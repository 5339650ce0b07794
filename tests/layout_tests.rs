use chrono::NaiveDate;

use erfassungsbogen::core::grouping::GroupMode;
use erfassungsbogen::models::{Provenance, TimeEntry};
use erfassungsbogen::render::sheet::{SheetOptions, render_pdf, render_sheet};
use erfassungsbogen::render::surface::{Align, DrawSurface, Logo, PageMetrics, TextStyle};

// ---------------------------------------------------------------------------
// Recording surface: captures every drawing call so tests can assert exact
// placement and page-break points without a PDF backend.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    BeginPage,
    Text(String),
    Rect,
    Line,
    Logo,
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl DrawSurface for RecordingSurface {
    fn metrics(&self) -> PageMetrics {
        PageMetrics::default()
    }

    fn begin_page(&mut self) {
        self.ops.push(Op::BeginPage);
    }

    fn place_text(&mut self, text: &str, _x: f32, _y: f32, _width: f32, _align: Align, _style: TextStyle, _size: f32) {
        self.ops.push(Op::Text(text.to_string()));
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _gray: f32) {
        self.ops.push(Op::Rect);
    }

    fn stroke_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _width: f32) {
        self.ops.push(Op::Line);
    }

    fn place_logo(&mut self, _logo: &Logo, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.ops.push(Op::Logo);
    }
}

impl RecordingSurface {
    fn page_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::BeginPage))
            .count()
    }

    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Count of entry rows, recognized by their DD.MM.YYYY date cell.
    fn entry_row_count(&self) -> usize {
        self.texts()
            .iter()
            .filter(|t| is_display_date(t))
            .count()
    }

    /// Sum of all group summary rows in minutes.
    fn summary_total(&self) -> u32 {
        let mut total = 0;
        let mut take_next = false;
        for op in &self.ops {
            if let Op::Text(text) = op {
                if take_next {
                    total += parse_hhmm(text);
                    take_next = false;
                } else if text == "Summe" {
                    take_next = true;
                }
            }
        }
        total
    }
}

fn is_display_date(t: &str) -> bool {
    t.len() == 10 && t.as_bytes()[2] == b'.' && t.as_bytes()[5] == b'.'
}

fn parse_hhmm(t: &str) -> u32 {
    let (h, m) = t.split_once(':').expect("HH:MM");
    h.parse::<u32>().expect("hours") * 60 + m.parse::<u32>().expect("minutes")
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn entry(day: NaiveDate, minutes: u32) -> TimeEntry {
    TimeEntry {
        employee_id: "anna".to_string(),
        day,
        project: Some("Website Relaunch".to_string()),
        project_id: Some("P-100".to_string()),
        project_short: Some("WEB".to_string()),
        customer: None,
        customer_po: None,
        internal_po: Some("IPO-1".to_string()),
        task: Some("Frontend".to_string()),
        minutes,
        source: Provenance::Raw,
    }
}

fn opts(mode: GroupMode) -> SheetOptions {
    SheetOptions {
        group_mode: mode,
        title: "Erfassungsbogen".to_string(),
        period: None,
        logo: None,
    }
}

// ---------------------------------------------------------------------------

#[test]
fn test_single_group_spans_pages_without_losing_rows() {
    // 60 rows of one day exceed one page's printable area.
    let rows: Vec<TimeEntry> = (0..60).map(|_| entry(d(2025, 9, 1), 30)).collect();

    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &rows, &opts(GroupMode::Day));

    assert!(surface.page_count() > 1, "expected a page break");
    assert_eq!(surface.entry_row_count(), 60);
    // Every minute shows up in exactly one summary row.
    assert_eq!(surface.summary_total(), 60 * 30);
    // The table header is drawn once per group, not re-drawn mid-group.
    let rects = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Rect))
        .count();
    assert_eq!(rects, 1);
}

#[test]
fn test_totals_across_multiple_groups() {
    let rows = vec![
        entry(d(2025, 9, 1), 480),
        entry(d(2025, 9, 2), 90),
        entry(d(2025, 9, 2), 30),
        entry(d(2025, 9, 3), 15),
    ];

    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &rows, &opts(GroupMode::Day));

    let summaries = surface.texts().iter().filter(|t| **t == "Summe").count();
    assert_eq!(summaries, 3);
    assert_eq!(surface.summary_total(), 480 + 90 + 30 + 15);
}

#[test]
fn test_empty_input_renders_header_only_document() {
    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &[], &opts(GroupMode::Week));

    assert_eq!(surface.page_count(), 1);
    assert!(surface.texts().contains(&"Erfassungsbogen"));
    assert!(!surface.texts().contains(&"Summe"));
}

#[test]
fn test_title_block_only_on_first_page() {
    let rows: Vec<TimeEntry> = (0..60).map(|_| entry(d(2025, 9, 1), 30)).collect();

    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &rows, &opts(GroupMode::Day));

    assert!(surface.page_count() > 1);
    let titles = surface
        .texts()
        .iter()
        .filter(|t| **t == "Erfassungsbogen")
        .count();
    assert_eq!(titles, 1);
}

#[test]
fn test_logo_placed_when_present() {
    let logo = Logo {
        jpeg: vec![0xFF, 0xD8],
        px_width: 100,
        px_height: 40,
    };
    let mut options = opts(GroupMode::Week);
    options.logo = Some(logo);

    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &[entry(d(2025, 9, 1), 60)], &options);

    assert!(surface.ops.iter().any(|op| matches!(op, Op::Logo)));
}

#[test]
fn test_missing_optional_fields_render_placeholder() {
    let mut row = entry(d(2025, 9, 1), 60);
    row.internal_po = None;
    row.task = None;

    let mut surface = RecordingSurface::default();
    render_sheet(&mut surface, &[row], &opts(GroupMode::Day));

    let dashes = surface.texts().iter().filter(|t| **t == "-").count();
    assert_eq!(dashes, 2);
}

#[test]
fn test_render_pdf_produces_document_bytes() {
    let rows = vec![entry(d(2025, 9, 1), 480)];
    let opts = SheetOptions {
        group_mode: GroupMode::Week,
        title: "Erfassungsbogen".to_string(),
        period: Some("Zeitraum: 01.09.2025 - 30.09.2025".to_string()),
        logo: None,
    };

    let bytes = render_pdf(&rows, &opts);

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(!bytes.is_empty());
}
