use thiserror::Error;

use crate::canvas::ZIndex;
use crate::theme::StyleRole;

/// Unified result type for the layout core.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the canvas, allocator, and style resolver.
///
/// All variants are deterministic: retrying with the same input fails the
/// same way, so callers recover by correcting the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid dimension `{name}`: {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("degenerate grid: {rows}x{cols} cells would measure {cell_width}x{cell_height}")]
    DegenerateGrid {
        rows: usize,
        cols: usize,
        cell_width: f64,
        cell_height: f64,
    },
    #[error("table layout requires at least one column width")]
    EmptyColumnSpec,
    #[error("theme `{theme}` has no style for role {role:?}")]
    UnknownRole { theme: String, role: StyleRole },
    #[error("unknown theme preset `{0}`")]
    UnknownTheme(String),
    #[error("table row {row} has {found} cells but {expected} columns")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("region {0} not found on canvas")]
    RegionNotFound(ZIndex),
}

impl LayoutError {
    pub(crate) fn dimension(name: &'static str, value: f64) -> Self {
        Self::InvalidDimension { name, value }
    }
}
