//! Canvas module orchestrator.
//!
//! A canvas is the append-only drawing surface of one slide; paint order is
//! insertion order.

mod core;

pub use core::{Canvas, PlacedRegion, RegionSnapshot, TextBody, ZIndex};
