//! Plain-text wireframe preview of a deck.

mod core;

pub use core::{WireframeRenderer, WireframeSettings};
