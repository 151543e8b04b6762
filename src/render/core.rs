use std::io::Write;

use unicode_width::UnicodeWidthChar;

use crate::export::{ExportRegion, ExportResult, RegionSink};
use crate::geometry::{Rect, Size};
use crate::theme::{Alignment, ShapeKind};
use crate::width::{display_width, truncate_to_width};

/// Marks the right half of a double-width glyph.
const CONTINUATION: char = '\0';

/// Character-cell density of the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeSettings {
    pub cols_per_inch: f64,
    pub rows_per_inch: f64,
}

impl Default for WireframeSettings {
    fn default() -> Self {
        Self {
            cols_per_inch: 10.0,
            rows_per_inch: 4.0,
        }
    }
}

/// Cell rectangle on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    col: usize,
    row: usize,
    cols: usize,
    rows: usize,
}

/// Rasterizes regions into a plain-text preview, one page per slide.
///
/// Later regions overwrite earlier ones, so the preview follows paint order.
#[derive(Debug, Default)]
pub struct WireframeRenderer {
    settings: WireframeSettings,
    grid: Vec<Vec<char>>,
    pages: Vec<String>,
}

impl WireframeRenderer {
    pub fn new(settings: WireframeSettings) -> Self {
        Self {
            settings,
            grid: Vec::new(),
            pages: Vec::new(),
        }
    }

    pub fn with_default() -> Self {
        Self::new(WireframeSettings::default())
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Write every rendered page, separated by a rule line.
    pub fn render(&self, writer: &mut impl Write) -> ExportResult<()> {
        for (index, page) in self.pages.iter().enumerate() {
            writeln!(writer, "── slide {:02} ──", index + 1)?;
            writeln!(writer, "{page}")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn cell_rect(&self, rect: &Rect) -> Option<CellRect> {
        let rows = self.grid.len();
        let cols = self.grid.first().map(Vec::len).unwrap_or(0);
        let to_col = |x: f64| ((x * self.settings.cols_per_inch).round().max(0.0) as usize).min(cols);
        let to_row = |y: f64| ((y * self.settings.rows_per_inch).round().max(0.0) as usize).min(rows);

        let (left, right) = (to_col(rect.x), to_col(rect.right()));
        let (top, bottom) = (to_row(rect.y), to_row(rect.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        Some(CellRect {
            col: left,
            row: top,
            cols: right - left,
            rows: bottom - top,
        })
    }

    fn put(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = ch;
        }
    }

    fn draw_outline(&mut self, cell: CellRect, shape: ShapeKind) {
        let (corner_top, corner_bottom, side_left, side_right) = match shape {
            ShapeKind::TextBox => return,
            ShapeKind::Rectangle => (('+', '+'), ('+', '+'), '|', '|'),
            ShapeKind::RoundedRectangle => (('.', '.'), ('\'', '\''), '|', '|'),
            ShapeKind::Oval => (('(', ')'), ('(', ')'), '(', ')'),
            ShapeKind::RightArrow => (('=', '>'), ('=', '>'), '=', '>'),
            ShapeKind::DownArrow => (('\\', '/'), ('\\', '/'), 'v', 'v'),
            ShapeKind::Diamond => (('/', '\\'), ('\\', '/'), '<', '>'),
        };
        let last_col = cell.col + cell.cols - 1;
        let last_row = cell.row + cell.rows - 1;

        for col in cell.col..=last_col {
            self.put(cell.row, col, '-');
            self.put(last_row, col, '-');
        }
        for row in cell.row..=last_row {
            self.put(row, cell.col, side_left);
            self.put(row, last_col, side_right);
        }
        self.put(cell.row, cell.col, corner_top.0);
        self.put(cell.row, last_col, corner_top.1);
        self.put(last_row, cell.col, corner_bottom.0);
        self.put(last_row, last_col, corner_bottom.1);
    }

    fn clear(&mut self, cell: CellRect) {
        for row in cell.row..cell.row + cell.rows {
            for col in cell.col..cell.col + cell.cols {
                self.put(row, col, ' ');
            }
        }
    }

    fn draw_text(&mut self, cell: CellRect, framed: bool, paragraphs: &[String], alignment: Alignment) {
        let pad = usize::from(framed);
        if cell.cols <= 2 * pad || cell.rows <= 2 * pad {
            return;
        }
        let width = cell.cols - 2 * pad;
        let height = cell.rows - 2 * pad;

        for (offset, paragraph) in paragraphs.iter().take(height).enumerate() {
            let line = truncate_to_width(paragraph, width);
            let slack = width - display_width(&line);
            let indent = match alignment {
                Alignment::Left => 0,
                Alignment::Center => slack / 2,
                Alignment::Right => slack,
            };
            let row = cell.row + pad + offset;
            let mut col = cell.col + pad + indent;
            for ch in line.chars() {
                let w = ch.width().unwrap_or(0);
                if w == 0 {
                    continue;
                }
                self.put(row, col, ch);
                if w == 2 {
                    self.put(row, col + 1, CONTINUATION);
                }
                col += w;
            }
        }
    }
}

impl RegionSink for WireframeRenderer {
    fn begin_slide(&mut self, _index: usize, size: Size) -> ExportResult<()> {
        let cols = (size.width * self.settings.cols_per_inch).round() as usize;
        let rows = (size.height * self.settings.rows_per_inch).round() as usize;
        self.grid = vec![vec![' '; cols]; rows];
        Ok(())
    }

    fn emit_region(&mut self, region: &ExportRegion<'_>) -> ExportResult<()> {
        let Some(cell) = self.cell_rect(&region.rect) else {
            return Ok(());
        };
        let shape = region.style.shape;
        let framed = shape != ShapeKind::TextBox && cell.cols > 1 && cell.rows > 1;
        if framed {
            self.clear(cell);
            self.draw_outline(cell, shape);
        }
        if let Some(text) = region.text {
            self.draw_text(cell, framed, text.paragraphs(), region.style.alignment);
        }
        Ok(())
    }

    fn end_slide(&mut self, _index: usize) -> ExportResult<()> {
        let page = self
            .grid
            .drain(..)
            .map(|line| {
                let text: String = line.into_iter().filter(|ch| *ch != CONTINUATION).collect();
                text.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.pages.push(page);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;
    use crate::export::export_deck;
    use crate::slide::{Card, DeckBuilder};

    fn render_one(build: impl FnOnce(&mut crate::slide::SlideBuilder)) -> String {
        let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
        let mut slide = deck.new_slide().unwrap();
        build(&mut slide);
        deck.push(slide);

        let mut renderer = WireframeRenderer::with_default();
        export_deck(&deck.build(), &mut renderer).unwrap();
        renderer.pages()[0].clone()
    }

    #[test]
    fn text_lands_at_scaled_position() {
        let page = render_one(|slide| {
            slide.title("Scope").unwrap();
        });
        let lines: Vec<&str> = page.lines().collect();
        // title at y = 0.35in -> row 1, x = 0.6in -> col 6
        assert_eq!(lines[1], "      Scope");
    }

    #[test]
    fn cards_draw_outlines_with_text_inside() {
        let page = render_one(|slide| {
            slide
                .card(
                    Rect::new(1.0, 2.0, 3.0, 1.5),
                    &Card::new().heading("Analyze").body(["latency"]),
                )
                .unwrap();
        });
        let lines: Vec<&str> = page.lines().collect();
        assert!(lines[8].starts_with("          ."));
        assert!(lines[8].ends_with('.'));
        assert_eq!(display_width(lines[8]), 40);
        assert!(lines.iter().any(|line| line.contains("Analyze")));
        assert!(lines.iter().any(|line| line.contains("latency")));
    }

    #[test]
    fn arrows_point_right() {
        let page = render_one(|slide| {
            slide
                .place(
                    crate::slide::RegionSpec::new(Rect::new(1.0, 1.0, 1.0, 0.5), crate::theme::StyleRole::Accent)
                        .styled(crate::theme::StyleOverride::default().with_shape(ShapeKind::RightArrow)),
                )
                .unwrap();
        });
        let lines: Vec<&str> = page.lines().collect();
        // two rows tall, so both rows are edges
        assert_eq!(lines[4], "          =-------->");
        assert_eq!(lines[5], "          =-------->");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let page = render_one(|slide| {
            slide
                .text_box(
                    Rect::new(0.0, 0.0, 1.0, 0.25),
                    crate::theme::StyleRole::Body,
                    ["a very long sentence"],
                )
                .unwrap();
        });
        assert_eq!(page.lines().next(), Some("a very lo…"));
    }

    #[test]
    fn render_writes_every_page() {
        let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
        for title in ["One", "Two"] {
            let mut slide = deck.new_slide().unwrap();
            slide.title(title).unwrap();
            deck.push(slide);
        }
        let mut renderer = WireframeRenderer::with_default();
        export_deck(&deck.build(), &mut renderer).unwrap();

        let mut out = Vec::new();
        renderer.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("── slide 01 ──"));
        assert!(text.contains("── slide 02 ──"));
        assert!(text.contains("Two"));
    }
}
