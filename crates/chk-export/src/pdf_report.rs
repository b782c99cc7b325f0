//! PDF attendance sheet.
//!
//! Layout is A4 portrait: a centered title and subtitle, then a single table
//! with a bold header row and a bold date row before each day's records. The
//! table continues on new pages (header repeated) when it runs out of room.

use chk_core::{DayView, display_cells, format_date};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::{COLUMNS, ExportError};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const TABLE_TOP: f32 = PAGE_HEIGHT - 30.0;
const ROW_HEIGHT: f32 = 6.0;
const FONT_SIZE: f32 = 8.0;

/// Column widths in millimetres, summing to the printable width.
const COLUMN_WIDTHS: [f32; 6] = [22.0, 48.0, 22.0, 35.0, 35.0, 28.0];

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const MM_PER_PT: f32 = 0.3528;

/// Document heading.
#[derive(Debug, Clone)]
pub struct PdfOptions {
    pub title: String,
    pub subtitle: String,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            title: "PASTELERIA CAFE CHOCOLATE".to_string(),
            subtitle: "Control de Personal".to_string(),
        }
    }
}

/// Renders `view` to PDF bytes.
pub fn render_pdf(view: &DayView<'_>, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let mut sheet = Sheet::new(&options.title)?;

    sheet.centered(&options.title, 14.0, PAGE_HEIGHT - 15.0, true);
    sheet.centered(&options.subtitle, 11.0, PAGE_HEIGHT - 22.0, false);
    sheet.header_row();

    for group in view.groups() {
        sheet.ensure_room();
        sheet.text(&format!(" {}", format_date(group.date)), MARGIN, true);
        sheet.advance();

        for record in &group.records {
            sheet.ensure_room();
            sheet.cells(&display_cells(record), false);
            sheet.advance();
        }
    }

    tracing::debug!(pages = sheet.pages, records = view.len(), "pdf rendered");
    Ok(sheet.doc.save_to_bytes()?)
}

/// Writing position within the current page.
struct Sheet {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl Sheet {
    fn new(title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: TABLE_TOP,
            pages: 1,
        })
    }

    const fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold { &self.bold } else { &self.regular }
    }

    fn centered(&self, text: &str, size: f32, y: f32, bold: bool) {
        let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(MARGIN);
        self.layer
            .use_text(text, size, Mm(x), Mm(y), self.font(bold));
    }

    fn text(&self, text: &str, x: f32, bold: bool) {
        self.layer
            .use_text(text, FONT_SIZE, Mm(x), Mm(self.y), self.font(bold));
    }

    fn cells<S: AsRef<str>>(&self, cells: &[S], bold: bool) {
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
            self.text(&fit(cell.as_ref(), width - 1.0), x + 0.5, bold);
            x += width;
        }
    }

    fn header_row(&mut self) {
        self.cells(&COLUMNS, true);
        self.advance();
    }

    fn advance(&mut self) {
        self.y -= ROW_HEIGHT;
    }

    /// Starts a new page when the next row would cross the bottom margin.
    fn ensure_room(&mut self) {
        if self.y >= MARGIN + ROW_HEIGHT {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        self.y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
        self.header_row();
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "cell text is far shorter than f32 precision"
    )]
    let chars = text.chars().count() as f32;
    chars * size * AVG_GLYPH_EM * MM_PER_PT
}

/// Truncates `text` so it fits in `width` millimetres.
fn fit(text: &str, width: f32) -> String {
    if text_width(text, FONT_SIZE) <= width {
        return text.to_string();
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "width and font size are small positive constants"
    )]
    let max_chars = (width / (FONT_SIZE * AVG_GLYPH_EM * MM_PER_PT)) as usize;
    let mut fitted: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    fitted.push('.');
    fitted
}
