use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Size};
use crate::theme::{StyleProfile, StyleRole};

/// Position of a region in its canvas' paint order.
pub type ZIndex = usize;

/// Ordered paragraphs of a text region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBody {
    paragraphs: Vec<String>,
}

impl TextBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![text.into()],
        }
    }

    /// The first line sets the first paragraph and every later line appends
    /// one. An empty iterator yields a single empty paragraph.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines = lines.into_iter();
        let mut body = Self::new(lines.next().map(Into::into).unwrap_or_default());
        for line in lines {
            body.push(line);
        }
        body
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.paragraphs.push(line.into());
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn first(&self) -> &str {
        self.paragraphs.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(|p| p.trim().is_empty())
    }
}

impl From<&str> for TextBody {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextBody {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// One visual element placed on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRegion {
    pub rect: Rect,
    pub role: StyleRole,
    /// Resolved style; `None` when placed directly without a theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextBody>,
    /// Region this one decorates, such as the card behind a header strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ZIndex>,
}

impl PlacedRegion {
    pub fn new(rect: Rect, role: StyleRole) -> Self {
        Self {
            rect,
            role,
            style: None,
            text: None,
            parent: None,
        }
    }

    pub fn with_style(mut self, style: StyleProfile) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_text(mut self, text: impl Into<TextBody>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_parent(mut self, parent: ZIndex) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Fixed-size drawing surface owning its regions in paint order.
///
/// Regions are only ever appended; a region's z-index is its position.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    regions: Arc<Vec<PlacedRegion>>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self::with_size(Size::checked(width, height)?))
    }

    pub(crate) fn with_size(size: Size) -> Self {
        Self {
            size,
            regions: Arc::new(Vec::new()),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Append `region` on top of everything placed so far.
    ///
    /// Bounds are not checked here; regions from the allocator already honour them.
    pub fn place(&mut self, region: PlacedRegion) -> ZIndex {
        let regions = Arc::make_mut(&mut self.regions);
        regions.push(region);
        regions.len() - 1
    }

    /// Snapshot of the current regions. Later `place` calls copy the list
    /// instead of mutating what the snapshot sees.
    pub fn regions(&self) -> RegionSnapshot {
        RegionSnapshot {
            regions: Arc::clone(&self.regions),
        }
    }

    pub fn get(&self, z: ZIndex) -> Option<&PlacedRegion> {
        self.regions.get(z)
    }

    pub fn region(&self, z: ZIndex) -> Result<&PlacedRegion> {
        self.get(z).ok_or(LayoutError::RegionNotFound(z))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Read-only, restartable view of a canvas' regions in z-order.
#[derive(Debug, Clone)]
pub struct RegionSnapshot {
    regions: Arc<Vec<PlacedRegion>>,
}

impl RegionSnapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, z: ZIndex) -> Option<&PlacedRegion> {
        self.regions.get(z)
    }

    pub fn as_slice(&self) -> &[PlacedRegion] {
        &self.regions
    }
}

impl<'a> IntoIterator for &'a RegionSnapshot {
    type Item = &'a PlacedRegion;
    type IntoIter = std::slice::Iter<'a, PlacedRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
