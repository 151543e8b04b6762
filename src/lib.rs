//! Slide canvas layout engine.
//!
//! Slides are built by placing regions on a fixed-size canvas. Positions come
//! from a small allocator (single boxes, grids, timelines and tables) and
//! appearance comes from a theme that maps each semantic role to a style, so
//! the same deck can be re-skinned by swapping the theme. Finished decks are
//! handed to a [`RegionSink`] for export.

pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod slide;
pub mod theme;
pub mod width;

pub use canvas::{Canvas, PlacedRegion, RegionSnapshot, TextBody, ZIndex};
pub use config::{CardConfig, ConfigError, DeckConfig, FrameConfig, ThemeSelection};
pub use error::{LayoutError, Result};
pub use export::{ExportError, ExportRegion, JsonManifestSink, RegionSink, export_deck};
pub use geometry::{Emu, EmuRect, Point, Rect, Size, Unit, from_internal_units, to_internal_units};
pub use layout::{Allocation, Allocator, Gutter, LayoutIntent, Overflow};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{DeckMetrics, MetricSnapshot};
pub use render::{WireframeRenderer, WireframeSettings};
pub use slide::{
    Card, Comparison, Deck, DeckBuilder, Gantt, GanttTask, RegionSpec, Slide, SlideBuilder, Table, Timeline,
    TimelineStep,
};
pub use theme::{Color, StyleOverride, StyleProfile, StyleRole, Theme, ThemeKind, resolve};
pub use width::display_width;
