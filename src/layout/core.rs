use serde::{Deserialize, Serialize};

use super::grid::{allocate_grid, allocate_table};
use crate::canvas::Canvas;
use crate::error::{LayoutError, Result};
use crate::geometry::{EPSILON, Point, Rect, Size};

/// Horizontal and vertical spacing between grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gutter {
    pub x: f64,
    pub y: f64,
}

impl Gutter {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }
}

/// Vertical extent shared by every cell of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub top: f64,
    pub height: f64,
}

impl Band {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// What the caller wants laid out, before coordinates exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LayoutIntent {
    SingleBox(Rect),
    Grid {
        rows: usize,
        cols: usize,
        content: Rect,
        gutter: Gutter,
    },
    Timeline {
        step_count: usize,
        step_width: f64,
        start_x: f64,
        band: Band,
    },
    Table {
        row_count: usize,
        col_widths: Vec<f64>,
        row_height: f64,
        origin: Point,
    },
}

impl LayoutIntent {
    pub fn single(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::SingleBox(Rect::new(x, y, width, height))
    }

    pub fn grid(rows: usize, cols: usize, content: Rect, gutter: Gutter) -> Self {
        Self::Grid {
            rows,
            cols,
            content,
            gutter,
        }
    }

    pub fn timeline(step_count: usize, step_width: f64, start_x: f64, band: Band) -> Self {
        Self::Timeline {
            step_count,
            step_width,
            start_x,
            band,
        }
    }

    pub fn table(row_count: usize, col_widths: Vec<f64>, row_height: f64, origin: Point) -> Self {
        Self::Table {
            row_count,
            col_widths,
            row_height,
            origin,
        }
    }
}

/// How far an allocation extends past the canvas. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Overflow {
    pub right: f64,
    pub bottom: f64,
    /// First cell (in allocation order) whose extent crosses the canvas edge.
    pub first_cell: Option<usize>,
}

impl Overflow {
    pub fn is_none(&self) -> bool {
        self.first_cell.is_none()
    }

    fn measure(rects: &[Rect], bounds: &Rect) -> Self {
        let mut overflow = Overflow::default();
        for (idx, rect) in rects.iter().enumerate() {
            let right = rect.right() - bounds.right();
            let bottom = rect.bottom() - bounds.bottom();
            if right > EPSILON || bottom > EPSILON {
                overflow.first_cell.get_or_insert(idx);
                overflow.right = overflow.right.max(right);
                overflow.bottom = overflow.bottom.max(bottom);
            }
        }
        overflow
    }
}

/// Rectangles computed for one intent, in a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub rects: Vec<Rect>,
    pub overflow: Overflow,
    /// A single box was shrunk to fit the canvas.
    pub clipped: bool,
}

impl Allocation {
    fn measured(rects: Vec<Rect>, bounds: &Rect) -> Self {
        let overflow = Overflow::measure(&rects, bounds);
        Self {
            rects,
            overflow,
            clipped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Cells of row `row` for a row-major allocation with `cols` columns.
    pub fn row(&self, row: usize, cols: usize) -> &[Rect] {
        let start = (row * cols).min(self.rects.len());
        let end = (start + cols).min(self.rects.len());
        &self.rects[start..end]
    }

    pub fn cell(&self, row: usize, col: usize, cols: usize) -> Option<Rect> {
        if col >= cols {
            return None;
        }
        self.rects.get(row * cols + col).copied()
    }

    /// Bounding box of every cell.
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, rect| acc.union(rect)))
    }
}

/// Turns [`LayoutIntent`]s into rectangles for a fixed canvas size.
///
/// Every call is a pure function of the intent and the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocator {
    bounds: Rect,
}

impl Allocator {
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect::from_size(size),
        }
    }

    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.size())
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn allocate(&self, intent: &LayoutIntent) -> Result<Allocation> {
        match intent {
            LayoutIntent::SingleBox(rect) => self.single_box(rect),
            LayoutIntent::Grid {
                rows,
                cols,
                content,
                gutter,
            } => {
                let rects = allocate_grid(*rows, *cols, content, *gutter)?;
                Ok(Allocation::measured(rects, &self.bounds))
            }
            LayoutIntent::Timeline {
                step_count,
                step_width,
                start_x,
                band,
            } => {
                let rects = allocate_timeline(*step_count, *step_width, *start_x, *band)?;
                Ok(Allocation::measured(rects, &self.bounds))
            }
            LayoutIntent::Table {
                row_count,
                col_widths,
                row_height,
                origin,
            } => {
                let rects = allocate_table(*row_count, col_widths, *row_height, *origin)?;
                Ok(Allocation::measured(rects, &self.bounds))
            }
        }
    }

    fn single_box(&self, rect: &Rect) -> Result<Allocation> {
        let rect = rect.validate()?;
        if self.bounds.contains(&rect) {
            return Ok(Allocation {
                rects: vec![rect],
                overflow: Overflow::default(),
                clipped: false,
            });
        }
        Ok(Allocation {
            rects: vec![rect.clip_to(&self.bounds)],
            overflow: Overflow::default(),
            clipped: true,
        })
    }
}

/// Cells laid left to right at a fixed pitch; never wraps. The first cell
/// must sit at a non-negative position.
pub fn allocate_timeline(
    step_count: usize,
    step_width: f64,
    start_x: f64,
    band: Band,
) -> Result<Vec<Rect>> {
    if !step_width.is_finite() || step_width <= 0.0 {
        return Err(LayoutError::dimension("step_width", step_width));
    }
    if !start_x.is_finite() || start_x < 0.0 {
        return Err(LayoutError::dimension("start_x", start_x));
    }
    if !band.top.is_finite() || band.top < 0.0 {
        return Err(LayoutError::dimension("band.top", band.top));
    }
    Rect::checked(start_x, band.top, 0.0, band.height)?;

    Ok((0..step_count)
        .map(|i| Rect::new(start_x + i as f64 * step_width, band.top, step_width, band.height))
        .collect())
}
