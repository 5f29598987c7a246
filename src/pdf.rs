//! PDF export of the event page.
//!
//! The layout pass is pure: it walks the document and produces
//! positioned lines grouped into pages, using the same cursor flow the
//! page export had (A4 in points, 40pt margins, page break once the
//! cursor passes 780pt). The printpdf writer then just paints those
//! lines with the builtin Helvetica fonts.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eventdesk_core::event::{EventDocument, ItineraryItem, Speaker};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_PT: f32 = 595.0;
const PAGE_HEIGHT_PT: f32 = 842.0;
const MARGIN_PT: f32 = 40.0;
const PAGE_BREAK_PT: f32 = 780.0;
const BODY_LINE_HEIGHT_PT: f32 = 14.0;

const TITLE_SIZE: f32 = 22.0;
const SUBTITLE_SIZE: f32 = 14.0;
const HEADING_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

/// One positioned line of text. `y` is measured from the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Default)]
pub struct Layout {
    pub pages: Vec<Vec<Line>>,
}

/// Approximate Helvetica advance width. Good enough for centering and
/// greedy wrapping; the export is not typographically exact.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Greedy word wrap against the estimated text width. Always yields at
/// least one line so empty text still advances the cursor.
pub fn wrap_to_width(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || text_width(&candidate, size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub fn itinerary_line(item: &ItineraryItem) -> String {
    format!("{} — {}: {}", item.time, item.title, item.details)
}

pub fn speaker_line(speaker: &Speaker) -> String {
    format!("{} — {}", speaker.name, speaker.role)
}

/// Output file name: the event name with whitespace collapsed to
/// underscores, plus the extension.
pub fn file_name(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}.pdf")
}

struct LayoutBuilder {
    pages: Vec<Vec<Line>>,
    y: f32,
}

impl LayoutBuilder {
    fn new() -> Self {
        LayoutBuilder {
            pages: vec![Vec::new()],
            y: MARGIN_PT,
        }
    }

    fn push(&mut self, text: &str, size: f32, bold: bool, x: f32, y: f32) {
        // pages always holds at least one page
        self.pages.last_mut().unwrap().push(Line {
            text: text.to_string(),
            size,
            bold,
            x,
            y,
        });
    }

    fn centered(&mut self, text: &str, size: f32, bold: bool) {
        let x = ((PAGE_WIDTH_PT - text_width(text, size)) / 2.0).max(MARGIN_PT);
        self.push(text, size, bold, x, self.y);
    }

    fn heading(&mut self, text: &str) {
        self.push(text, HEADING_SIZE, true, MARGIN_PT, self.y);
        self.y += 20.0;
    }

    /// Wrapped body text at the left margin. Returns the line count so
    /// callers can advance the cursor the way the original export did.
    fn body(&mut self, text: &str) -> usize {
        let wrapped = wrap_to_width(text, BODY_SIZE, PAGE_WIDTH_PT - 2.0 * MARGIN_PT);
        for (i, line) in wrapped.iter().enumerate() {
            let y = self.y + i as f32 * BODY_LINE_HEIGHT_PT;
            self.push(line, BODY_SIZE, false, MARGIN_PT, y);
        }
        wrapped.len()
    }

    fn break_page_if_needed(&mut self) {
        if self.y > PAGE_BREAK_PT {
            self.pages.push(Vec::new());
            self.y = MARGIN_PT;
        }
    }
}

/// Compute the full export layout for one event document.
pub fn layout(event: &EventDocument) -> Layout {
    let mut builder = LayoutBuilder::new();

    builder.centered(&event.name, TITLE_SIZE, true);
    builder.y += 30.0;

    builder.centered(&event.date_location(), SUBTITLE_SIZE, false);
    builder.y += 30.0;

    builder.heading("Overview");
    let lines = builder.body(&event.description);
    builder.y += lines as f32 * BODY_LINE_HEIGHT_PT + 20.0;

    builder.heading("Itinerary");
    for item in &event.itinerary {
        let lines = builder.body(&itinerary_line(item));
        builder.y += lines as f32 * BODY_LINE_HEIGHT_PT + 6.0;
        builder.break_page_if_needed();
    }
    builder.y += 20.0;

    builder.heading("Speakers");
    for speaker in &event.speakers {
        builder.body(&speaker_line(speaker));
        builder.y += 20.0;
        builder.break_page_if_needed();
    }

    Layout {
        pages: builder.pages,
    }
}

const PT_TO_MM: f32 = 25.4 / 72.0;

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * PT_TO_MM)
}

/// Write the export to `<dir>/<file_name>`. Reads only the document;
/// stored data is never touched.
pub fn export(event: &EventDocument, dir: &Path) -> Result<PathBuf> {
    let computed = layout(event);

    let (doc, first_page, first_layer) = PdfDocument::new(
        &event.name,
        pt_to_mm(PAGE_WIDTH_PT),
        pt_to_mm(PAGE_HEIGHT_PT),
        "Page 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    for (index, lines) in computed.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(
                pt_to_mm(PAGE_WIDTH_PT),
                pt_to_mm(PAGE_HEIGHT_PT),
                format!("Page {}", index + 1),
            );
            doc.get_page(page).get_layer(layer)
        };

        for line in lines {
            let font = if line.bold { &bold } else { &regular };
            layer.use_text(
                &line.text,
                line.size,
                pt_to_mm(line.x),
                // printpdf measures from the bottom of the page
                pt_to_mm(PAGE_HEIGHT_PT - line.y),
                font,
            );
        }
    }

    let path = dir.join(file_name(&event.name));
    let file =
        File::create(&path).with_context(|| format!("Could not create {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(path)
}
