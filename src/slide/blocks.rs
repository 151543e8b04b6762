//! Compound blocks built on the timeline and table intents.

use crate::canvas::ZIndex;
use crate::error::{LayoutError, Result};
use crate::geometry::{EPSILON, Point, Rect};
use crate::layout::{Band, LayoutIntent, Overflow};
use crate::theme::{Alignment, Color, ShapeKind, StyleOverride, StyleRole};
use crate::width::clip_to_capacity;

use super::core::{Card, Pending, RegionSpec, SlideBuilder, extend_batch};

/// One phase of a timeline: a label strip, a heading and bullet items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineStep {
    pub label: String,
    pub heading: String,
    pub items: Vec<String>,
}

impl TimelineStep {
    pub fn new<I, S>(label: impl Into<String>, heading: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            heading: heading.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub steps: Vec<TimelineStep>,
    pub start_x: f64,
    /// Distance between the left edges of consecutive steps.
    pub step_width: f64,
    /// Horizontal gap left between step cards.
    pub gap: f64,
    pub band: Band,
    /// Thin rule drawn behind the steps at this offset from the band top.
    pub track_offset: Option<f64>,
}

impl Timeline {
    pub fn new(steps: Vec<TimelineStep>) -> Self {
        Self {
            steps,
            start_x: 0.5,
            step_width: 1.8,
            gap: 0.1,
            band: Band::new(1.6, 4.5),
            track_offset: Some(2.25),
        }
    }

    pub fn at(mut self, start_x: f64, step_width: f64) -> Self {
        self.start_x = start_x;
        self.step_width = step_width;
        self
    }

    pub fn band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    pub fn without_track(mut self) -> Self {
        self.track_offset = None;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRegions {
    pub track: Option<ZIndex>,
    /// Card background of every step, in step order.
    pub steps: Vec<ZIndex>,
    pub overflow: Overflow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f64>,
    pub row_height: f64,
    pub origin: Point,
    /// Fill for every other body row.
    pub stripe: Option<Color>,
}

impl Table {
    pub fn new(col_widths: Vec<f64>, row_height: f64, origin: Point) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            col_widths,
            row_height,
            origin,
            stripe: None,
        }
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn striped(mut self, color: Color) -> Self {
        self.stripe = Some(color);
        self
    }

    fn cols(&self) -> usize {
        self.col_widths.len()
    }

    /// Header first, then body rows padded to the column count.
    fn text_rows(&self) -> Result<Vec<Vec<String>>> {
        let cols = self.cols();
        let header = (!self.headers.is_empty()).then_some(&self.headers);
        header
            .into_iter()
            .chain(self.rows.iter())
            .enumerate()
            .map(|(row, cells)| {
                if cells.len() > cols {
                    return Err(LayoutError::ColumnMismatch {
                        row,
                        expected: cols,
                        found: cells.len(),
                    });
                }
                let mut padded = cells.clone();
                padded.resize(cols, String::new());
                Ok(padded)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRegions {
    pub cells: Vec<ZIndex>,
    pub cols: usize,
    pub has_header: bool,
    pub overflow: Overflow,
}

impl TableRegions {
    /// Cell at `row`/`col`, where row 0 is the header when there is one.
    pub fn cell(&self, row: usize, col: usize) -> Option<ZIndex> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GanttTask {
    pub label: String,
    pub start: usize,
    pub duration: usize,
}

impl GanttTask {
    pub fn new(label: impl Into<String>, start: usize, duration: usize) -> Self {
        Self {
            label: label.into(),
            start,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gantt {
    pub periods: Vec<String>,
    pub tasks: Vec<GanttTask>,
    pub label_x: f64,
    pub start_x: f64,
    pub step_width: f64,
    pub top: f64,
    pub header_height: f64,
    /// Vertical distance between consecutive task rows.
    pub row_pitch: f64,
    pub bar_height: f64,
    /// Space trimmed from the end of each bar and header cell.
    pub bar_gap: f64,
}

impl Gantt {
    pub fn new<I, S>(periods: I, tasks: Vec<GanttTask>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            periods: periods.into_iter().map(Into::into).collect(),
            tasks,
            label_x: 0.5,
            start_x: 3.5,
            step_width: 1.2,
            top: 1.5,
            header_height: 0.4,
            row_pitch: 0.55,
            bar_height: 0.35,
            bar_gap: 0.1,
        }
    }

    fn task_top(&self, row: usize) -> f64 {
        self.top + self.header_height + 0.3 + row as f64 * self.row_pitch
    }

    fn bar_rect(&self, row: usize, task: &GanttTask) -> Rect {
        Rect::new(
            self.start_x + task.start as f64 * self.step_width,
            self.task_top(row),
            (task.duration as f64 * self.step_width - self.bar_gap).max(0.0),
            self.bar_height,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GanttRegions {
    pub headers: Vec<ZIndex>,
    pub labels: Vec<ZIndex>,
    pub bars: Vec<ZIndex>,
}

/// Current-versus-target panel: a titled background, two bars side by side
/// and an arrow carrying the improvement caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub title: String,
    pub current: String,
    pub target: String,
    pub improvement: Option<String>,
    pub rect: Rect,
    pub arrow_width: f64,
    pub bar_height: f64,
}

impl Comparison {
    pub fn new(title: impl Into<String>, current: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            current: current.into(),
            target: target.into(),
            improvement: None,
            rect: Rect::new(0.6, 1.5, 8.8, 1.0),
            arrow_width: 1.3,
            bar_height: 0.35,
        }
    }

    pub fn improvement(mut self, caption: impl Into<String>) -> Self {
        self.improvement = Some(caption.into());
        self
    }

    pub fn at(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRegions {
    pub background: ZIndex,
    pub current: ZIndex,
    pub target: ZIndex,
    pub arrow: ZIndex,
}

fn centered() -> StyleOverride {
    StyleOverride::default().with_alignment(Alignment::Center)
}

impl SlideBuilder {
    /// Step cards laid on a timeline intent. Steps past the right edge keep
    /// their geometry; their copy is shortened to what stays visible.
    pub fn timeline(&mut self, timeline: &Timeline) -> Result<TimelineRegions> {
        let allocation = self.allocate(&LayoutIntent::timeline(
            timeline.steps.len(),
            timeline.step_width,
            timeline.start_x,
            timeline.band,
        ))?;
        if allocation.is_empty() {
            return Ok(TimelineRegions {
                track: None,
                steps: Vec::new(),
                overflow: allocation.overflow,
            });
        }

        let bounds = self.canvas().bounds();
        let body_pt = self.theme().resolve(StyleRole::CardBackground)?.font_size_pt;
        let mut batch = Vec::new();

        let track = match (timeline.track_offset, allocation.bounding_box()) {
            (Some(offset), Some(extent)) => {
                let right = extent.right().min(bounds.right());
                let rect = Rect::new(
                    extent.x,
                    timeline.band.top + offset,
                    (right - extent.x).max(0.0),
                    0.02,
                );
                batch.push(Pending::root(self.prepare(
                    RegionSpec::new(rect, StyleRole::CardBorder)
                        .styled(StyleOverride::default().with_shape(ShapeKind::Rectangle)),
                )?));
                true
            }
            _ => false,
        };

        let mut starts = Vec::with_capacity(timeline.steps.len());
        for (i, (step, cell)) in timeline.steps.iter().zip(&allocation.rects).enumerate() {
            let rect = Rect::new(
                cell.x,
                cell.y,
                (cell.width - timeline.gap).max(0.0),
                cell.height,
            );
            let visible = (bounds.right() - rect.x).clamp(0.0, rect.width);
            let past_edge = rect.right() > bounds.right() + EPSILON;
            let clip = |text: &str| {
                if past_edge {
                    clip_to_capacity(text, visible, body_pt)
                } else {
                    text.to_string()
                }
            };
            let card = Card::new()
                .header_strip(clip(step.label.as_str()))
                .heading(clip(step.heading.as_str()))
                .body(step.items.iter().map(|item| clip(item.as_str())));
            starts.push(batch.len());
            extend_batch(&mut batch, self.prepare_card(rect, &card, self.theme().accent(i))?);
        }

        let placed = self.commit(batch);
        Ok(TimelineRegions {
            track: track.then(|| placed[0]),
            steps: starts.iter().map(|start| placed[*start]).collect(),
            overflow: allocation.overflow,
        })
    }

    /// Header row and padded body rows, one text cell per table rectangle.
    pub fn table(&mut self, table: &Table) -> Result<TableRegions> {
        if table.col_widths.is_empty() {
            return Err(LayoutError::EmptyColumnSpec);
        }
        let rows = table.text_rows()?;
        let has_header = !table.headers.is_empty();
        let cols = table.cols();
        let allocation = self.allocate(&LayoutIntent::table(
            rows.len(),
            table.col_widths.clone(),
            table.row_height,
            table.origin,
        ))?;

        let mut batch = Vec::with_capacity(allocation.len());
        for (idx, (rect, text)) in allocation.rects.iter().zip(rows.iter().flatten()).enumerate() {
            let row = idx / cols;
            let header = has_header && row == 0;
            let role = if header {
                StyleRole::TableHeader
            } else {
                StyleRole::TableCell
            };
            let body_row = if has_header { row.wrapping_sub(1) } else { row };
            let style = match table.stripe {
                Some(color) if !header && body_row % 2 == 1 => StyleOverride::fill(color),
                _ => StyleOverride::default(),
            };
            let spec = RegionSpec::new(*rect, role)
                .text(text.as_str())
                .styled(style);
            batch.push(Pending::root(self.prepare(spec)?));
        }

        Ok(TableRegions {
            cells: self.commit(batch),
            cols,
            has_header,
            overflow: allocation.overflow,
        })
    }

    /// Period headers on a timeline track, then a label and an accent bar per
    /// task spanning `start..start + duration` periods.
    pub fn gantt(&mut self, gantt: &Gantt) -> Result<GanttRegions> {
        for task in &gantt.tasks {
            if task.duration == 0 {
                return Err(LayoutError::dimension("duration", 0.0));
            }
        }
        let header = self.allocate(&LayoutIntent::timeline(
            gantt.periods.len(),
            gantt.step_width,
            gantt.start_x,
            Band::new(gantt.top, gantt.header_height),
        ))?;

        let mut batch = Vec::new();
        for (cell, period) in header.rects.iter().zip(&gantt.periods) {
            let rect = Rect::new(cell.x, cell.y, (cell.width - gantt.bar_gap / 2.0).max(0.0), cell.height);
            let spec = RegionSpec::new(rect, StyleRole::TableHeader)
                .text(period.as_str())
                .styled(centered());
            batch.push(Pending::root(self.prepare(spec)?));
        }
        let header_count = batch.len();

        let mut bar_rects = Vec::with_capacity(gantt.tasks.len());
        for (row, task) in gantt.tasks.iter().enumerate() {
            bar_rects.push(self.single(gantt.bar_rect(row, task))?);
        }
        let label_width = (gantt.start_x - gantt.label_x - 0.2).max(0.0);
        for (row, (task, bar)) in gantt.tasks.iter().zip(bar_rects).enumerate() {
            let top = gantt.task_top(row);
            let label = Rect::new(gantt.label_x, top + 0.1, label_width, gantt.bar_height);
            batch.push(Pending::root(self.prepare(
                RegionSpec::new(label, StyleRole::Body).text(task.label.as_str()),
            )?));

            let mut style = StyleOverride::default().with_shape(ShapeKind::Rectangle);
            if let Some(color) = self.theme().accent(row) {
                style = style.with_fill(color);
            }
            batch.push(Pending::root(self.prepare(
                RegionSpec::new(bar, StyleRole::Accent).styled(style),
            )?));
        }

        let placed = self.commit(batch);
        let (headers, tasks) = placed.split_at(header_count);
        Ok(GanttRegions {
            headers: headers.to_vec(),
            labels: tasks.iter().step_by(2).copied().collect(),
            bars: tasks.iter().skip(1).step_by(2).copied().collect(),
        })
    }

    /// Comparison panel. Bars split the width left after the arrow; children
    /// are parented to the background.
    pub fn comparison(&mut self, comparison: &Comparison) -> Result<ComparisonRegions> {
        let panel = self.single(comparison.rect)?;
        let inner_x = panel.x + 0.2;
        let bar_top = panel.y + 0.5;
        let bar_width = (panel.width - 0.5 - comparison.arrow_width) / 2.0;
        if !(bar_width > 0.0) {
            return Err(LayoutError::dimension("bar_width", bar_width));
        }
        let current = Rect::new(inner_x, bar_top, bar_width, comparison.bar_height);
        let target = Rect::new(current.right() + 0.1, bar_top, bar_width, comparison.bar_height);
        let arrow = Rect::new(target.right(), bar_top + 0.05, comparison.arrow_width, 0.25);

        let caption = centered()
            .bold()
            .with_font_size(10.0)
            .with_text_color(Color::WHITE);
        let text_rect = |bar: &Rect| Rect::new(bar.x, bar.y + 0.05, bar.width, 0.3);

        let mut batch = vec![Pending::root(self.prepare(RegionSpec::new(panel, StyleRole::CardBackground))?)];
        batch.push(Pending::child(
            self.prepare(
                RegionSpec::new(Rect::new(inner_x, panel.y + 0.1, 4.0, 0.3), StyleRole::Subtitle)
                    .text(comparison.title.as_str())
                    .styled(StyleOverride::font_size(11.0).bold()),
            )?,
            0,
        ));

        let current_bar = batch.len();
        batch.push(Pending::child(
            self.prepare(
                RegionSpec::new(current, StyleRole::Warning)
                    .styled(StyleOverride::default().with_shape(ShapeKind::Rectangle)),
            )?,
            0,
        ));
        batch.push(Pending::child(
            self.prepare(
                RegionSpec::new(text_rect(&current), StyleRole::Body)
                    .text(comparison.current.as_str())
                    .styled(caption),
            )?,
            current_bar,
        ));

        let target_bar = batch.len();
        let mut target_style = StyleOverride::default().with_shape(ShapeKind::Rectangle);
        if let Some(color) = self.theme().accent(1) {
            target_style = target_style.with_fill(color);
        }
        batch.push(Pending::child(
            self.prepare(RegionSpec::new(target, StyleRole::Accent).styled(target_style))?,
            0,
        ));
        batch.push(Pending::child(
            self.prepare(
                RegionSpec::new(text_rect(&target), StyleRole::Body)
                    .text(comparison.target.as_str())
                    .styled(caption),
            )?,
            target_bar,
        ));

        let arrow_idx = batch.len();
        batch.push(Pending::child(
            self.prepare(
                RegionSpec::new(arrow, StyleRole::Accent)
                    .styled(StyleOverride::default().with_shape(ShapeKind::RightArrow)),
            )?,
            0,
        ));
        if let Some(improvement) = comparison.improvement.as_ref() {
            let mut style = centered().bold().with_font_size(9.0);
            if let Some(color) = self.theme().accent(1) {
                style = style.with_text_color(color);
            }
            batch.push(Pending::child(
                self.prepare(
                    RegionSpec::new(Rect::new(arrow.x, panel.y + 0.25, arrow.width, 0.25), StyleRole::Body)
                        .text(improvement.as_str())
                        .styled(style),
                )?,
                arrow_idx,
            ));
        }

        let placed = self.commit(batch);
        Ok(ComparisonRegions {
            background: placed[0],
            current: placed[current_bar],
            target: placed[target_bar],
            arrow: placed[arrow_idx],
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::Size;
    use crate::theme::ThemeKind;
    use crate::width::display_width;

    fn builder(kind: ThemeKind) -> SlideBuilder {
        SlideBuilder::new(Size::new(10.0, 7.5), Arc::new(kind.theme())).unwrap()
    }

    fn steps(count: usize) -> Vec<TimelineStep> {
        (0..count)
            .map(|i| {
                TimelineStep::new(
                    format!("Week {i}"),
                    "Profiling & Analysis",
                    ["Load-time benchmarking across every critical flow"],
                )
            })
            .collect()
    }

    #[test]
    fn timeline_places_step_cards_at_fixed_pitch() {
        let mut slide = builder(ThemeKind::Consulting);
        let placed = slide.timeline(&Timeline::new(steps(5))).unwrap();

        assert!(placed.overflow.is_none());
        assert_eq!(placed.track, Some(0));
        assert_eq!(placed.steps.len(), 5);
        let regions = slide.canvas().regions();
        for (i, z) in placed.steps.iter().enumerate() {
            let card = regions.get(*z).unwrap();
            let expected = Rect::new(0.5 + i as f64 * 1.8, 1.6, 1.7, 4.5);
            assert!(card.rect.approx_eq(&expected, EPSILON));
            assert_eq!(card.role, StyleRole::CardBackground);
        }
    }

    #[test]
    fn overflowing_steps_keep_geometry_and_clip_copy() {
        let mut slide = builder(ThemeKind::Consulting);
        let timeline = Timeline::new(steps(7)).at(1.0, 1.7).without_track();
        let placed = slide.timeline(&timeline).unwrap();

        assert_eq!(placed.overflow.first_cell, Some(5));
        assert!((placed.overflow.right - 2.9).abs() < 1e-9);

        let regions = slide.canvas().regions();
        let last = regions.get(placed.steps[6]).unwrap();
        assert!((last.rect.x - 11.2).abs() < EPSILON);

        let visible_heading = regions.get(placed.steps[0] + 2).unwrap();
        assert_eq!(
            visible_heading.text.as_ref().unwrap().first(),
            "Profiling & Analysis"
        );
        let clipped_heading = regions.get(placed.steps[5] + 2).unwrap();
        let text = clipped_heading.text.as_ref().unwrap().first();
        assert!(text.ends_with('…'));
        assert!(display_width(text) < display_width("Profiling & Analysis"));
        let hidden_heading = regions.get(placed.steps[6] + 2).unwrap();
        assert_eq!(hidden_heading.text.as_ref().unwrap().first(), "");
    }

    #[test]
    fn timeline_past_bottom_keeps_full_copy() {
        let mut slide = builder(ThemeKind::Consulting);
        let timeline = Timeline::new(steps(1)).band(Band::new(3.5, 4.5)).without_track();
        let placed = slide.timeline(&timeline).unwrap();

        assert_eq!(placed.overflow.first_cell, Some(0));
        assert_eq!(placed.overflow.right, 0.0);
        assert!((placed.overflow.bottom - 0.5).abs() < 1e-9);

        let regions = slide.canvas().regions();
        let heading = regions.get(placed.steps[0] + 2).unwrap();
        assert_eq!(heading.text.as_ref().unwrap().first(), "Profiling & Analysis");
        let body = regions.get(placed.steps[0] + 3).unwrap();
        assert_eq!(
            body.text.as_ref().unwrap().first(),
            "Load-time benchmarking across every critical flow"
        );
    }

    #[test]
    fn comparison_splits_bars_around_arrow() {
        let mut slide = builder(ThemeKind::Consulting);
        let comparison = Comparison::new(
            "Primary Screen Load Time",
            "Current: 6.0 sec (Slow)",
            "Market Benchmark: 2.0 sec",
        )
        .improvement("67% faster");
        let placed = slide.comparison(&comparison).unwrap();

        let regions = slide.canvas().regions();
        assert_eq!(regions.len(), 8);
        let current = regions.get(placed.current).unwrap();
        assert!(current.rect.approx_eq(&Rect::new(0.8, 2.0, 3.5, 0.35), EPSILON));
        assert_eq!(current.role, StyleRole::Warning);
        let target = regions.get(placed.target).unwrap();
        assert!(target.rect.approx_eq(&Rect::new(4.4, 2.0, 3.5, 0.35), EPSILON));
        assert_eq!(target.style.as_ref().unwrap().fill, slide.theme().accent(1));

        let arrow = regions.get(placed.arrow).unwrap();
        assert!(arrow.rect.approx_eq(&Rect::new(7.9, 2.05, 1.3, 0.25), EPSILON));
        assert_eq!(arrow.style.as_ref().unwrap().shape, ShapeKind::RightArrow);
        assert_eq!(arrow.parent, Some(placed.background));

        let caption = regions.get(placed.current + 1).unwrap();
        assert_eq!(caption.parent, Some(placed.current));
        assert_eq!(caption.text.as_ref().unwrap().first(), "Current: 6.0 sec (Slow)");
    }

    #[test]
    fn comparison_too_narrow_for_arrow_fails_cleanly() {
        let mut slide = builder(ThemeKind::Classic);
        let comparison = Comparison::new("Load", "6s", "2s").at(Rect::new(0.6, 1.5, 1.5, 1.0));
        assert!(matches!(
            slide.comparison(&comparison),
            Err(LayoutError::InvalidDimension { name: "bar_width", .. })
        ));
        assert!(slide.canvas().is_empty());
    }

    #[test]
    fn empty_timeline_places_nothing() {
        let mut slide = builder(ThemeKind::Classic);
        let placed = slide.timeline(&Timeline::new(Vec::new())).unwrap();
        assert!(placed.steps.is_empty());
        assert!(slide.canvas().is_empty());
    }

    #[test]
    fn table_rows_are_contiguous_and_padded() {
        let mut slide = builder(ThemeKind::Professional);
        let table = Table::new(vec![3.3, 0.7, 4.5], 0.45, Point::new(0.6, 1.5))
            .headers(["Role", "Count", "Responsibility"])
            .row(["Engagement Lead", "1", "Owns delivery"])
            .row(["Analyst", "2"])
            .striped(Color::rgb(245, 245, 245));
        let placed = slide.table(&table).unwrap();

        assert_eq!(placed.cells.len(), 9);
        let regions = slide.canvas().regions();
        let header = regions.get(placed.cell(0, 2).unwrap()).unwrap();
        assert_eq!(header.role, StyleRole::TableHeader);
        assert!((header.rect.x - 4.6).abs() < EPSILON);

        let padded = regions.get(placed.cell(2, 2).unwrap()).unwrap();
        assert_eq!(padded.role, StyleRole::TableCell);
        assert!(padded.text.as_ref().unwrap().is_blank());
        assert!((padded.rect.y - 2.4).abs() < EPSILON);
        assert_eq!(
            padded.style.as_ref().unwrap().fill,
            Some(Color::rgb(245, 245, 245))
        );
        let first_body = regions.get(placed.cell(1, 0).unwrap()).unwrap();
        assert_ne!(
            first_body.style.as_ref().unwrap().fill,
            Some(Color::rgb(245, 245, 245))
        );
    }

    #[test]
    fn table_rejects_bad_specs_without_placing() {
        let mut slide = builder(ThemeKind::Classic);
        let empty = Table::new(Vec::new(), 0.4, Point::new(0.5, 1.5)).row(["a"]);
        assert_eq!(slide.table(&empty), Err(LayoutError::EmptyColumnSpec));

        let wide = Table::new(vec![1.0, 1.0], 0.4, Point::new(0.5, 1.5))
            .headers(["A", "B"])
            .row(["1", "2", "3"]);
        assert_eq!(
            slide.table(&wide),
            Err(LayoutError::ColumnMismatch {
                row: 1,
                expected: 2,
                found: 3,
            })
        );
        assert!(slide.canvas().is_empty());
    }

    #[test]
    fn gantt_bars_span_their_periods() {
        let mut slide = builder(ThemeKind::Consulting);
        let gantt = Gantt::new(
            ["Week 0", "Week 1", "Week 2", "Week 3", "Week 4"],
            vec![
                GanttTask::new("Setup & Access", 0, 1),
                GanttTask::new("Profiling & Analysis", 1, 2),
            ],
        );
        let placed = slide.gantt(&gantt).unwrap();

        assert_eq!(placed.headers.len(), 5);
        assert_eq!(placed.labels.len(), 2);
        let regions = slide.canvas().regions();
        let bar = regions.get(placed.bars[1]).unwrap();
        assert!(bar.rect.approx_eq(&Rect::new(4.7, 2.75, 2.3, 0.35), EPSILON));
        assert_eq!(bar.role, StyleRole::Accent);
        assert_eq!(
            bar.style.as_ref().unwrap().fill,
            slide.theme().accent(1)
        );
        assert_eq!(
            regions.get(placed.labels[0]).unwrap().text.as_ref().unwrap().first(),
            "Setup & Access"
        );
    }

    #[test]
    fn gantt_rejects_zero_duration() {
        let mut slide = builder(ThemeKind::Creative);
        let gantt = Gantt::new(["Q1"], vec![GanttTask::new("Nothing", 0, 0)]);
        assert!(matches!(
            slide.gantt(&gantt),
            Err(LayoutError::InvalidDimension { name: "duration", .. })
        ));
        assert!(slide.canvas().is_empty());
    }
}
