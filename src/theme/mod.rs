//! Theme module orchestrator.
//!
//! Themes are plain data handed to the slide builder; nothing here holds
//! global state, so swapping a theme means passing a different value.

mod core;
pub mod presets;

pub use core::{
    Alignment, Band, Chrome, Color, FontWeight, ShapeKind, StyleOverride, StyleProfile, StyleRole,
    Theme, resolve,
};
pub use presets::ThemeKind;
