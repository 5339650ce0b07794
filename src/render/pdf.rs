//! pdf-writer backend for the drawing surface.
//!
//! Object ids are managed by hand: catalog, pages tree and the two Helvetica
//! fonts get fixed ids, everything else comes from a running counter. Page
//! dictionaries are written in `finish()` so every page shares one resource
//! set (fonts plus the optional logo XObject).

use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};

use crate::render::surface::{Align, DrawSurface, Logo, PageMetrics, TextStyle};

pub struct PdfSurface {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,

    next_id: i32,
    pages: Vec<(Ref, Ref)>,
    content: Option<Content>,

    logo_id: Option<Ref>,
    logo_data: Option<Logo>,

    metrics: PageMetrics,
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSurface {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            next_id,
            pages: Vec::new(),
            content: None,
            logo_id: None,
            logo_data: None,
            metrics: PageMetrics::default(),
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Write the current page's content stream, if any.
    fn flush_content(&mut self) {
        if let Some(content) = self.content.take()
            && let Some(&(_, content_id)) = self.pages.last()
        {
            self.pdf.stream(content_id, &content.finish());
        }
    }

    fn current(&mut self) -> &mut Content {
        // Callers always begin a page first; an empty content stream on a
        // dangling draw keeps this total.
        if self.content.is_none() {
            self.begin_page();
        }
        self.content.as_mut().unwrap()
    }

    /// Finalize the document and hand back the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_content();

        if let (Some(logo_id), Some(logo)) = (self.logo_id, self.logo_data.take()) {
            let mut image = self.pdf.image_xobject(logo_id, &logo.jpeg);
            image.width(logo.px_width as i32);
            image.height(logo.px_height as i32);
            image.color_space().device_rgb();
            image.bits_per_component(8);
            image.filter(Filter::DctDecode);
            image.finish();
        }

        let m = self.metrics;
        for &(page_id, content_id) in &self.pages {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, m.width, m.height))
                .contents(content_id);

            let mut resources = page.resources();
            resources
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
            if let Some(logo_id) = self.logo_id {
                resources.x_objects().pair(Name(b"L1"), logo_id);
            }
        }

        let page_refs: Vec<Ref> = self.pages.iter().map(|&(p, _)| p).collect();
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(page_refs.len() as i32);
        pages.kids(page_refs);
        pages.finish();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf.finish()
    }
}

/// Standard Type1 fonts are 8-bit; WinAnsi covers the Latin-1 range the
/// sheet needs (umlauts, ß). Anything beyond becomes a question mark.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if cp <= 0xFF { cp as u8 } else { b'?' }
        })
        .collect()
}

/// Rough advance estimate for Helvetica, good enough for right alignment of
/// short cells.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}

impl DrawSurface for PdfSurface {
    fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    fn begin_page(&mut self) {
        self.flush_content();
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.pages.push((page_id, content_id));
        self.content = Some(Content::new());
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, width: f32, align: Align, style: TextStyle, size: f32) {
        let draw_x = match align {
            Align::Left => x,
            Align::Right => x + width - text_width(text, size),
        };
        let font = match style {
            TextStyle::Regular => Name(b"F1"),
            TextStyle::Bold => Name(b"F2"),
        };
        let bytes = to_winansi(text);

        let content = self.current();
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, draw_x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, gray: f32) {
        let content = self.current();
        content.save_state();
        content.set_fill_gray(gray);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        let content = self.current();
        content.save_state();
        content.set_stroke_gray(0.4);
        content.set_line_width(width);
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
        content.restore_state();
    }

    fn place_logo(&mut self, logo: &Logo, x: f32, y: f32, w: f32, h: f32) {
        if self.logo_id.is_none() {
            let id = self.fresh_ref();
            self.logo_id = Some(id);
            self.logo_data = Some(logo.clone());
        }
        let content = self.current();
        content.save_state();
        content.transform([w, 0.0, 0.0, h, x, y]);
        content.x_object(Name(b"L1"));
        content.restore_state();
    }
}
