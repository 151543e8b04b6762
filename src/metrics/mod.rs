use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters collected while building a deck.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeckMetrics {
    slides: u64,
    regions: u64,
    allocations: u64,
    overflow_reports: u64,
    clipped_boxes: u64,
}

impl DeckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_slide(&mut self, region_count: usize) {
        self.slides = self.slides.saturating_add(1);
        self.regions = self.regions.saturating_add(region_count as u64);
    }

    pub fn record_allocation(&mut self, overflowed: bool, clipped: bool) {
        self.allocations = self.allocations.saturating_add(1);
        if overflowed {
            self.overflow_reports = self.overflow_reports.saturating_add(1);
        }
        if clipped {
            self.clipped_boxes = self.clipped_boxes.saturating_add(1);
        }
    }

    /// Fold per-slide counters into the running totals.
    pub fn merge(&mut self, other: &DeckMetrics) {
        self.slides = self.slides.saturating_add(other.slides);
        self.regions = self.regions.saturating_add(other.regions);
        self.allocations = self.allocations.saturating_add(other.allocations);
        self.overflow_reports = self.overflow_reports.saturating_add(other.overflow_reports);
        self.clipped_boxes = self.clipped_boxes.saturating_add(other.clipped_boxes);
    }

    pub fn snapshot(&self, elapsed: Duration) -> MetricSnapshot {
        MetricSnapshot {
            elapsed_us: elapsed.as_micros() as u64,
            slides: self.slides,
            regions: self.regions,
            allocations: self.allocations,
            overflow_reports: self.overflow_reports,
            clipped_boxes: self.clipped_boxes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub elapsed_us: u64,
    pub slides: u64,
    pub regions: u64,
    pub allocations: u64,
    pub overflow_reports: u64,
    pub clipped_boxes: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "deck_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("elapsed_us".to_string(), json!(self.elapsed_us));
        map.insert("slides".to_string(), json!(self.slides));
        map.insert("regions".to_string(), json!(self.regions));
        map.insert("allocations".to_string(), json!(self.allocations));
        map.insert("overflow_reports".to_string(), json!(self.overflow_reports));
        map.insert("clipped_boxes".to_string(), json!(self.clipped_boxes));
        map
    }
}
