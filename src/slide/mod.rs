//! Slide composition.
//!
//! A [`SlideBuilder`] turns titles, cards, timelines and tables into placed
//! regions on one canvas; a [`DeckBuilder`] hands out builders that share a
//! theme and frame geometry and collects the finished slides.

mod blocks;
mod core;
mod deck;

pub use blocks::{
    Comparison, ComparisonRegions, Gantt, GanttRegions, GanttTask, Table, TableRegions, Timeline,
    TimelineRegions, TimelineStep,
};
pub use core::{Card, CardLayout, CardRegions, RegionSpec, Slide, SlideBuilder};
pub use deck::{Deck, DeckBuilder};
