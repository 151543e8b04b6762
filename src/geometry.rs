//! Geometry primitives measured in real-valued physical units.
//!
//! Layout math runs on `f64` inches; the fixed-point EMU conversion is only
//! applied at the export boundary.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Internal fixed-point unit (English Metric Unit).
pub type Emu = i64;

pub const EMU_PER_INCH: f64 = 914_400.0;
pub const EMU_PER_POINT: f64 = 12_700.0;
pub const EMU_PER_CENTIMETER: f64 = 360_000.0;

/// Tolerance used when comparing computed coordinates.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inch,
    Point,
    Centimeter,
    Emu,
}

impl Unit {
    fn emu_factor(self) -> f64 {
        match self {
            Unit::Inch => EMU_PER_INCH,
            Unit::Point => EMU_PER_POINT,
            Unit::Centimeter => EMU_PER_CENTIMETER,
            Unit::Emu => 1.0,
        }
    }
}

/// Convert a physical measurement to EMUs, rounding to the nearest unit.
pub fn to_internal_units(value: f64, unit: Unit) -> Result<Emu> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::dimension("value", value));
    }
    Ok((value * unit.emu_factor()).round() as Emu)
}

pub fn from_internal_units(value: Emu, unit: Unit) -> f64 {
    value as f64 / unit.emu_factor()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Strictly positive, finite size.
    pub fn checked(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(LayoutError::dimension("width", width));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(LayoutError::dimension("height", height));
        }
        Ok(Self { width, height })
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Finite coordinates and non-negative extents.
    pub fn checked(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(LayoutError::dimension("x", x));
        }
        if !y.is_finite() {
            return Err(LayoutError::dimension("y", y));
        }
        if !width.is_finite() || width < 0.0 {
            return Err(LayoutError::dimension("width", width));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(LayoutError::dimension("height", height));
        }
        Ok(Self::new(x, y, width, height))
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Re-run [`Rect::checked`] on an existing value.
    pub fn validate(&self) -> Result<Self> {
        Self::checked(self.x, self.y, self.width, self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True when `other` lies fully inside `self`, edges inclusive within [`EPSILON`].
    pub fn contains(&self, other: &Rect) -> bool {
        other.x + EPSILON >= self.x
            && other.y + EPSILON >= self.y
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Interiors overlap. Rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() - EPSILON
            && other.x < self.right() - EPSILON
            && self.y < other.bottom() - EPSILON
            && other.y < self.bottom() - EPSILON
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Bounding box of both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Shrink by `dx` on the left/right and `dy` on the top/bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.x + dx,
            self.y + dy,
            (self.width - 2.0 * dx).max(0.0),
            (self.height - 2.0 * dy).max(0.0),
        )
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Clamp into `bounds`. A rect entirely outside collapses to a zero-sized
    /// rect on the nearest edge.
    pub fn clip_to(&self, bounds: &Rect) -> Rect {
        let x = self.x.clamp(bounds.x, bounds.right());
        let y = self.y.clamp(bounds.y, bounds.bottom());
        let right = self.right().clamp(bounds.x, bounds.right());
        let bottom = self.bottom().clamp(bounds.y, bounds.bottom());
        Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }

    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }

    /// Convert to fixed-point coordinates, treating `self` as measured in `unit`.
    pub fn to_emu(&self, unit: Unit) -> Result<EmuRect> {
        Ok(EmuRect {
            x: to_internal_units(self.x, unit)?,
            y: to_internal_units(self.y, unit)?,
            width: to_internal_units(self.width, unit)?,
            height: to_internal_units(self.height, unit)?,
        })
    }
}

/// Rectangle in EMUs, as handed to export adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmuRect {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}
