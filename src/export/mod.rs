//! Export boundary.
//!
//! Finished decks are streamed region by region into a [`RegionSink`]. The
//! sink sees every region exactly once, in paint order, with its geometry in
//! both inches and EMUs and its style already resolved.

mod core;
mod manifest;

pub use core::{ExportError, ExportRegion, ExportResult, RegionSink, export_deck};
pub use manifest::JsonManifestSink;
