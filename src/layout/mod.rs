//! Region allocator.
//!
//! Every visual on a slide is one of four intents: a single box, a uniform
//! grid, a horizontal timeline, or a table. The allocator turns an intent into
//! concrete rectangles; the slide builder decides what to draw in them.

mod core;
pub mod grid;

pub use core::{Allocation, Allocator, Band, Gutter, LayoutIntent, Overflow, allocate_timeline};
pub use grid::{allocate_grid, allocate_table, column_offsets};
