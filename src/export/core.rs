use serde::Serialize;
use thiserror::Error;

use crate::canvas::{TextBody, ZIndex};
use crate::error::LayoutError;
use crate::geometry::{EmuRect, Rect, Size, Unit};
use crate::slide::Deck;
use crate::theme::{StyleProfile, StyleRole};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// One region as seen by an export adapter.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRegion<'a> {
    pub slide: usize,
    pub z: ZIndex,
    pub rect: Rect,
    pub emu: EmuRect,
    pub role: StyleRole,
    pub style: &'a StyleProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a TextBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ZIndex>,
}

/// Consumer of a deck's regions, e.g. a presentation writer.
pub trait RegionSink {
    fn begin_slide(&mut self, _index: usize, _size: Size) -> ExportResult<()> {
        Ok(())
    }

    fn emit_region(&mut self, region: &ExportRegion<'_>) -> ExportResult<()>;

    fn end_slide(&mut self, _index: usize) -> ExportResult<()> {
        Ok(())
    }

    /// Called once after the last slide.
    fn finish(&mut self) -> ExportResult<()> {
        Ok(())
    }
}

/// Stream every slide of `deck` into `sink`.
///
/// Regions placed without an explicit style are resolved against the deck
/// theme here.
pub fn export_deck<S>(deck: &Deck, sink: &mut S) -> ExportResult<()>
where
    S: RegionSink + ?Sized,
{
    for (index, slide) in deck.slides().iter().enumerate() {
        sink.begin_slide(index, slide.size())?;
        let regions = slide.regions();
        for (z, region) in regions.iter().enumerate() {
            let style = match region.style.as_ref() {
                Some(style) => style,
                None => deck.theme().resolve(region.role)?,
            };
            let export = ExportRegion {
                slide: index,
                z,
                rect: region.rect,
                emu: region.rect.to_emu(Unit::Inch)?,
                role: region.role,
                style,
                text: region.text.as_ref(),
                parent: region.parent,
            };
            sink.emit_region(&export)?;
        }
        sink.end_slide(index)?;
    }
    sink.finish()
}
