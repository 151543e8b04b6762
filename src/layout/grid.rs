//! Grid-shaped allocators: uniform card grids and explicit-width tables.
//!
//! Both return cells in row-major order. Arithmetic stays in `f64`; nothing is
//! snapped, so callers get exactly the values the formulas produce.
//!
//! # Example
//! ```
//! use slide_canvas::geometry::Rect;
//! use slide_canvas::layout::{Gutter, grid::allocate_grid};
//!
//! let cells = allocate_grid(3, 2, &Rect::new(0.6, 1.6, 8.8, 4.8), Gutter::uniform(0.2))?;
//! assert_eq!(cells.len(), 6);
//! # Ok::<(), slide_canvas::LayoutError>(())
//! ```

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rect};

use super::Gutter;

/// Split `content` into `rows * cols` equal cells separated by `gutter`.
///
/// Fails with [`LayoutError::DegenerateGrid`] when a cell would have no
/// positive extent, including when `rows` or `cols` is zero.
pub fn allocate_grid(rows: usize, cols: usize, content: &Rect, gutter: Gutter) -> Result<Vec<Rect>> {
    let content = content.validate()?;
    if content.x < 0.0 {
        return Err(LayoutError::dimension("content.x", content.x));
    }
    if content.y < 0.0 {
        return Err(LayoutError::dimension("content.y", content.y));
    }
    if !gutter.x.is_finite() || gutter.x < 0.0 {
        return Err(LayoutError::dimension("gutter.x", gutter.x));
    }
    if !gutter.y.is_finite() || gutter.y < 0.0 {
        return Err(LayoutError::dimension("gutter.y", gutter.y));
    }

    let (cell_width, cell_height) = cell_extent(rows, cols, &content, gutter);
    if !(cell_width > 0.0 && cell_height > 0.0) {
        return Err(LayoutError::DegenerateGrid {
            rows,
            cols,
            cell_width,
            cell_height,
        });
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            cells.push(Rect::new(
                content.x + c as f64 * (cell_width + gutter.x),
                content.y + r as f64 * (cell_height + gutter.y),
                cell_width,
                cell_height,
            ));
        }
    }
    Ok(cells)
}

fn cell_extent(rows: usize, cols: usize, content: &Rect, gutter: Gutter) -> (f64, f64) {
    if rows == 0 || cols == 0 {
        return (0.0, 0.0);
    }
    let width = (content.width - (cols - 1) as f64 * gutter.x) / cols as f64;
    let height = (content.height - (rows - 1) as f64 * gutter.y) / rows as f64;
    (width, height)
}

/// Lay out `row_count` rows of cells with explicit column widths.
///
/// Rows are stacked with no spacing, so `row[r].y + row_height == row[r + 1].y`.
pub fn allocate_table(
    row_count: usize,
    col_widths: &[f64],
    row_height: f64,
    origin: Point,
) -> Result<Vec<Rect>> {
    if col_widths.is_empty() {
        return Err(LayoutError::EmptyColumnSpec);
    }
    if let Some(width) = col_widths.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(LayoutError::dimension("col_width", *width));
    }
    if !row_height.is_finite() || row_height <= 0.0 {
        return Err(LayoutError::dimension("row_height", row_height));
    }
    Rect::checked(origin.x, origin.y, 0.0, 0.0)?;
    if origin.x < 0.0 {
        return Err(LayoutError::dimension("origin.x", origin.x));
    }
    if origin.y < 0.0 {
        return Err(LayoutError::dimension("origin.y", origin.y));
    }

    let offsets = column_offsets(col_widths);
    let mut cells = Vec::with_capacity(row_count * col_widths.len());
    for r in 0..row_count {
        let y = origin.y + r as f64 * row_height;
        for (offset, width) in offsets.iter().zip(col_widths) {
            cells.push(Rect::new(origin.x + offset, y, *width, row_height));
        }
    }
    Ok(cells)
}

/// Running prefix sums: `offsets[c] = sum(widths[0..c])`.
pub fn column_offsets(widths: &[f64]) -> Vec<f64> {
    widths
        .iter()
        .scan(0.0, |acc, width| {
            let offset = *acc;
            *acc += width;
            Some(offset)
        })
        .collect()
}
