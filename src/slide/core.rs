use std::sync::Arc;

use crate::canvas::{Canvas, PlacedRegion, RegionSnapshot, TextBody, ZIndex};
use crate::config::{CardConfig, FrameConfig};
use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Size};
use crate::layout::{Allocation, Allocator, Gutter, LayoutIntent, Overflow};
use crate::metrics::DeckMetrics;
use crate::theme::{Alignment, Band, Color, ShapeKind, StyleOverride, StyleRole, Theme};

/// Request for one region: where, what role, and optional text.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSpec {
    pub rect: Rect,
    pub role: StyleRole,
    pub text: Option<TextBody>,
    pub parent: Option<ZIndex>,
    pub style: StyleOverride,
}

impl RegionSpec {
    pub fn new(rect: Rect, role: StyleRole) -> Self {
        Self {
            rect,
            role,
            text: None,
            parent: None,
            style: StyleOverride::default(),
        }
    }

    pub fn text(mut self, text: impl Into<TextBody>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text(TextBody::from_lines(lines))
    }

    pub fn child_of(mut self, parent: ZIndex) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn styled(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }
}

/// Parent reference of a region that has not been placed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Parent {
    None,
    /// Position within the same batch.
    Batch(usize),
}

/// Region prepared (style resolved, geometry final) awaiting placement.
#[derive(Debug, Clone)]
pub(crate) struct Pending {
    pub(crate) region: PlacedRegion,
    pub(crate) parent: Parent,
}

impl Pending {
    pub(crate) fn root(region: PlacedRegion) -> Self {
        Self {
            region,
            parent: Parent::None,
        }
    }

    pub(crate) fn child(region: PlacedRegion, parent: usize) -> Self {
        Self {
            region,
            parent: Parent::Batch(parent),
        }
    }
}

/// Append `more` to `batch`, rebasing its batch-relative parents.
pub(crate) fn extend_batch(batch: &mut Vec<Pending>, more: Vec<Pending>) {
    let shift = batch.len();
    batch.extend(more.into_iter().map(|mut pending| {
        if let Parent::Batch(idx) = pending.parent {
            pending.parent = Parent::Batch(idx + shift);
        }
        pending
    }));
}

/// Content of a card: a background plus optional strip, icon, heading and body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub heading: Option<String>,
    pub body: Vec<String>,
    /// Text for a full-width strip across the top of the card.
    pub header_strip: Option<String>,
    pub icon: bool,
    pub accent: Option<Color>,
    /// Draw the background with the warning role instead of the card role.
    pub warning: bool,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn header_strip(mut self, text: impl Into<String>) -> Self {
        self.header_strip = Some(text.into());
        self
    }

    pub fn with_icon(mut self) -> Self {
        self.icon = true;
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn warning(mut self) -> Self {
        self.warning = true;
        self
    }
}

/// Child rectangles of a card, computed from the card rect and a fixed inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub strip: Option<Rect>,
    pub icon: Option<Rect>,
    pub heading: Option<Rect>,
    pub body: Option<Rect>,
}

impl CardLayout {
    pub fn compute(rect: &Rect, card: &Card, config: &CardConfig) -> Self {
        let inset = config.inset;
        let strip = card
            .header_strip
            .as_ref()
            .map(|_| Rect::new(rect.x, rect.y, rect.width, config.header_strip_height.min(rect.height)));
        let top = strip.map(|s| s.bottom()).unwrap_or(rect.y) + inset;

        let icon = card
            .icon
            .then(|| Rect::new(rect.x + inset, top, config.icon_size, config.icon_size));
        let heading_x = icon
            .map(|i| i.right() + config.icon_gap)
            .unwrap_or(rect.x + inset);
        let heading = card.heading.as_ref().map(|_| {
            Rect::new(
                heading_x,
                top,
                (rect.right() - inset - heading_x).max(0.0),
                config.heading_height,
            )
        });

        let mut body_top = top;
        if heading.is_some() || icon.is_some() {
            body_top += config.heading_height.max(icon.map(|i| i.height).unwrap_or(0.0)) + config.icon_gap;
        }
        let body = (!card.body.is_empty()).then(|| {
            Rect::new(
                rect.x + inset,
                body_top,
                (rect.width - 2.0 * inset).max(0.0),
                (rect.bottom() - inset - body_top).max(0.0),
            )
        });

        Self {
            strip,
            icon,
            heading,
            body,
        }
    }
}

/// Z-indices of a placed card. `children` follow the card in paint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRegions {
    pub background: ZIndex,
    pub children: Vec<ZIndex>,
}

/// A finished slide: an immutable canvas plus what the allocator reported.
#[derive(Debug, Clone)]
pub struct Slide {
    canvas: Canvas,
    overflows: Vec<Overflow>,
    metrics: DeckMetrics,
}

impl Slide {
    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    pub fn regions(&self) -> RegionSnapshot {
        self.canvas.regions()
    }

    pub fn len(&self) -> usize {
        self.canvas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canvas.is_empty()
    }

    /// Non-fatal overflow reports collected while the slide was built.
    pub fn overflows(&self) -> &[Overflow] {
        &self.overflows
    }

    pub(crate) fn metrics(&self) -> &DeckMetrics {
        &self.metrics
    }

    /// Digest of every region's JSON encoding, in paint order.
    pub fn fingerprint(&self) -> serde_json::Result<blake3::Hash> {
        let mut hasher = blake3::Hasher::new();
        self.hash_into(&mut hasher)?;
        Ok(hasher.finalize())
    }

    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) -> serde_json::Result<()> {
        for region in self.canvas.regions().iter() {
            serde_json::to_writer(&mut *hasher, region)?;
            hasher.update(b"\n");
        }
        Ok(())
    }
}

/// Accumulates regions for one slide in strict call order.
///
/// Compound operations (cards, tables, timelines) resolve every style and
/// rectangle first and only then place, so a failure leaves the slide as it was.
#[derive(Debug, Clone)]
pub struct SlideBuilder {
    canvas: Canvas,
    allocator: Allocator,
    theme: Arc<Theme>,
    frame: FrameConfig,
    card: CardConfig,
    metrics: DeckMetrics,
    overflows: Vec<Overflow>,
    /// Footer page number, placed once the deck knows the slide's position.
    page_slot: Option<PlacedRegion>,
}

impl SlideBuilder {
    pub fn new(size: Size, theme: Arc<Theme>) -> Result<Self> {
        let canvas = Canvas::new(size.width, size.height)?;
        theme.validate()?;
        Ok(Self {
            allocator: Allocator::for_canvas(&canvas),
            canvas,
            theme,
            frame: FrameConfig::default(),
            card: CardConfig::default(),
            metrics: DeckMetrics::new(),
            overflows: Vec::new(),
            page_slot: None,
        })
    }

    pub fn with_frame(mut self, frame: FrameConfig) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_card_config(mut self, card: CardConfig) -> Self {
        self.card = card;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn frame(&self) -> &FrameConfig {
        &self.frame
    }

    pub fn card_config(&self) -> &CardConfig {
        &self.card
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f64 {
        (self.canvas.size().width - 2.0 * self.frame.margin_x).max(0.0)
    }

    /// Run the allocator, recording clipping and overflow for this slide.
    pub fn allocate(&mut self, intent: &LayoutIntent) -> Result<Allocation> {
        let allocation = self.allocator.allocate(intent)?;
        let overflowed = !allocation.overflow.is_none();
        self.metrics.record_allocation(overflowed, allocation.clipped);
        if overflowed {
            self.overflows.push(allocation.overflow);
        }
        Ok(allocation)
    }

    /// Single-box allocation of `rect`, clipped to the canvas.
    pub(crate) fn single(&mut self, rect: Rect) -> Result<Rect> {
        let allocation = self.allocate(&LayoutIntent::SingleBox(rect))?;
        Ok(allocation.rects.into_iter().next().unwrap_or(rect))
    }

    pub(crate) fn prepare(&self, spec: RegionSpec) -> Result<PlacedRegion> {
        // exported positions are unsigned EMUs
        if spec.rect.x < 0.0 {
            return Err(LayoutError::dimension("x", spec.rect.x));
        }
        if spec.rect.y < 0.0 {
            return Err(LayoutError::dimension("y", spec.rect.y));
        }
        if let Some(parent) = spec.parent {
            self.canvas.region(parent)?;
        }
        let style = self.theme.resolve(spec.role)?.clone().apply(&spec.style);
        Ok(PlacedRegion {
            rect: spec.rect,
            role: spec.role,
            style: Some(style),
            text: spec.text,
            parent: spec.parent,
        })
    }

    pub(crate) fn commit(&mut self, batch: Vec<Pending>) -> Vec<ZIndex> {
        let base = self.canvas.len();
        batch
            .into_iter()
            .map(|pending| {
                let mut region = pending.region;
                if let Parent::Batch(idx) = pending.parent {
                    region.parent = Some(base + idx);
                }
                self.canvas.place(region)
            })
            .collect()
    }

    /// Place a region exactly where `spec` says, without clipping.
    pub fn place(&mut self, spec: RegionSpec) -> Result<ZIndex> {
        let region = self.prepare(spec)?;
        Ok(self.canvas.place(region))
    }

    /// Place a region after clipping its rect to the canvas.
    pub fn boxed(&mut self, spec: RegionSpec) -> Result<ZIndex> {
        let rect = self.single(spec.rect)?;
        self.place(RegionSpec { rect, ..spec })
    }

    /// Text region whose first line sets the first paragraph and every later
    /// line appends one.
    pub fn text_box<I, S>(&mut self, rect: Rect, role: StyleRole, lines: I) -> Result<ZIndex>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boxed(RegionSpec::new(rect, role).lines(lines))
    }

    fn band(&self, band: &Band) -> Result<PlacedRegion> {
        let rect = Rect::new(0.0, band.top, self.canvas.size().width, band.height)
            .clip_to(&self.canvas.bounds());
        self.prepare(
            RegionSpec::new(rect, StyleRole::Accent)
                .styled(StyleOverride::fill(band.color).with_shape(ShapeKind::Rectangle)),
        )
    }

    /// Theme header band and stripe.
    pub fn header_chrome(&mut self) -> Result<Vec<ZIndex>> {
        let chrome = self.theme.chrome;
        let mut batch = Vec::new();
        for band in [chrome.header, chrome.stripe].iter().flatten() {
            batch.push(Pending::root(self.band(band)?));
        }
        Ok(self.commit(batch))
    }

    /// Footer band or rule, caption, and right-aligned page number.
    pub fn footer(&mut self, caption: Option<&str>, page: Option<usize>) -> Result<Vec<ZIndex>> {
        let frame = &self.frame;
        let mut batch = Vec::new();
        match self.theme.chrome.footer {
            Some(band) => batch.push(Pending::root(self.band(&band)?)),
            None => {
                let rule = Rect::new(frame.margin_x, frame.footer_top, self.content_width(), frame.footer_rule_height);
                batch.push(Pending::root(self.prepare(RegionSpec::new(rule, StyleRole::CardBorder))?));
            }
        }

        let (text_rect, style) = self.footer_text();
        if let Some(caption) = caption {
            batch.push(Pending::root(self.prepare(
                RegionSpec::new(text_rect, StyleRole::Subtitle).text(caption).styled(style),
            )?));
        }
        if let Some(page) = page {
            batch.push(Pending::root(self.page_region(page)?));
        }
        Ok(self.commit(batch))
    }

    /// Footer text line: centred on the footer band when the theme has one,
    /// otherwise just under the rule.
    fn footer_text(&self) -> (Rect, StyleOverride) {
        let frame = &self.frame;
        let width = self.content_width();
        let style = StyleOverride::font_size(frame.footer_font_pt);
        let (rect, style) = match self.theme.chrome.footer {
            Some(band) => {
                let offset = ((band.height - frame.footer_text_height) / 2.0).max(0.0);
                let rect = Rect::new(frame.margin_x, band.top + offset, width, frame.footer_text_height);
                (rect, style.with_text_color(Color::WHITE))
            }
            None => {
                let top = frame.footer_top + frame.footer_text_offset;
                (Rect::new(frame.margin_x, top, width, frame.footer_text_height), style)
            }
        };
        (rect.clip_to(&self.canvas.bounds()), style)
    }

    fn page_region(&self, page: usize) -> Result<PlacedRegion> {
        let (rect, style) = self.footer_text();
        self.prepare(
            RegionSpec::new(rect, StyleRole::Subtitle)
                .text(format!("{page:02}"))
                .styled(style.with_alignment(Alignment::Right)),
        )
    }

    /// Footer whose page number is placed by [`Self::finish_as_page`], once
    /// the slide's position in the deck is known.
    pub(crate) fn footer_with_deferred_page(&mut self, caption: Option<&str>) -> Result<Vec<ZIndex>> {
        let slot = self.page_region(0)?;
        let placed = self.footer(caption, None)?;
        self.page_slot = Some(slot);
        Ok(placed)
    }

    pub fn title(&mut self, text: &str) -> Result<ZIndex> {
        let rect = Rect::new(
            self.frame.margin_x,
            self.frame.title_top,
            self.content_width(),
            self.frame.title_height,
        );
        self.boxed(RegionSpec::new(rect, StyleRole::Title).text(text))
    }

    pub fn subtitle(&mut self, text: &str) -> Result<ZIndex> {
        let rect = Rect::new(
            self.frame.margin_x,
            self.frame.subtitle_top,
            self.content_width(),
            self.frame.subtitle_height,
        );
        self.boxed(RegionSpec::new(rect, StyleRole::Subtitle).text(text))
    }

    /// Body text filling the content area below the subtitle.
    pub fn bullets<I, S>(&mut self, lines: I) -> Result<ZIndex>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rect = Rect::new(
            self.frame.margin_x,
            self.frame.body_top,
            self.content_width(),
            self.frame.body_height,
        );
        self.text_box(rect, StyleRole::Body, lines)
    }

    /// Content area between the body top and the footer.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.frame.margin_x,
            self.frame.body_top,
            self.content_width(),
            (self.frame.footer_top - self.frame.body_top - self.card.gutter).max(0.0),
        )
    }

    pub(crate) fn prepare_card(&self, rect: Rect, card: &Card, accent: Option<Color>) -> Result<Vec<Pending>> {
        let role = if card.warning {
            StyleRole::Warning
        } else {
            StyleRole::CardBackground
        };
        let background = self.theme.resolve(role)?;
        let accent = card.accent.or(accent);
        let text_style = StyleOverride::font_size(background.font_size_pt).with_text_color(background.text_color);
        let layout = CardLayout::compute(&rect, card, &self.card);

        let mut batch = vec![Pending::root(self.prepare(RegionSpec::new(rect, role))?)];

        if let (Some(strip), Some(text)) = (layout.strip, card.header_strip.as_ref()) {
            let mut style = StyleOverride::default().with_shape(ShapeKind::Rectangle);
            if let Some(color) = accent {
                style = style.with_fill(color);
            }
            let region = self.prepare(RegionSpec::new(strip, StyleRole::Accent).text(text.as_str()).styled(style))?;
            batch.push(Pending::child(region, 0));
        }
        if let Some(icon) = layout.icon {
            let mut style = StyleOverride::default().with_shape(ShapeKind::Oval);
            if let Some(color) = accent {
                style = style.with_fill(color);
            }
            let region = self.prepare(RegionSpec::new(icon, StyleRole::Accent).styled(style))?;
            batch.push(Pending::child(region, 0));
        }
        if let (Some(heading_rect), Some(heading)) = (layout.heading, card.heading.as_ref()) {
            let region = self.prepare(
                RegionSpec::new(heading_rect, StyleRole::Body)
                    .text(heading.as_str())
                    .styled(text_style.bold()),
            )?;
            batch.push(Pending::child(region, 0));
        }
        if let Some(body_rect) = layout.body {
            let region = self.prepare(
                RegionSpec::new(body_rect, StyleRole::Body)
                    .lines(card.body.iter().cloned())
                    .styled(text_style),
            )?;
            batch.push(Pending::child(region, 0));
        }
        Ok(batch)
    }

    /// Card background followed by its children, positioned relative to the
    /// card with the configured inset.
    pub fn card(&mut self, rect: Rect, card: &Card) -> Result<CardRegions> {
        let rect = self.single(rect)?;
        let accent = self.theme.accent(0);
        let batch = self.prepare_card(rect, card, accent)?;
        Ok(card_regions(&self.commit(batch)))
    }

    /// Lay `cards` out row-major over `cols` columns of `content`, cycling the
    /// theme accents.
    pub fn card_grid(&mut self, cols: usize, content: Rect, cards: &[Card]) -> Result<Vec<CardRegions>> {
        if cards.is_empty() {
            return Ok(Vec::new());
        }
        let rows = cards.len().div_ceil(cols.max(1));
        let gutter = Gutter::uniform(self.card.gutter);
        let allocation = self.allocate(&LayoutIntent::grid(rows, cols, content, gutter))?;

        let mut batch = Vec::new();
        let mut starts = Vec::with_capacity(cards.len());
        for (i, (card, rect)) in cards.iter().zip(&allocation.rects).enumerate() {
            starts.push(batch.len());
            extend_batch(&mut batch, self.prepare_card(*rect, card, self.theme.accent(i))?);
        }
        let total = batch.len();
        let placed = self.commit(batch);

        Ok(starts
            .iter()
            .enumerate()
            .map(|(i, start)| {
                let end = starts.get(i + 1).copied().unwrap_or(total);
                card_regions(&placed[*start..end])
            })
            .collect())
    }

    /// Place a deferred page number, if any, then finish.
    pub(crate) fn finish_as_page(mut self, page: usize) -> Slide {
        if let Some(mut region) = self.page_slot.take() {
            region.text = Some(TextBody::new(format!("{page:02}")));
            self.canvas.place(region);
        }
        self.finish()
    }

    pub fn finish(mut self) -> Slide {
        self.metrics.record_slide(self.canvas.len());
        Slide {
            canvas: self.canvas,
            overflows: self.overflows,
            metrics: self.metrics,
        }
    }
}

fn card_regions(placed: &[ZIndex]) -> CardRegions {
    CardRegions {
        background: placed.first().copied().unwrap_or_default(),
        children: placed.iter().skip(1).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EPSILON;
    use crate::theme::ThemeKind;

    fn builder() -> SlideBuilder {
        SlideBuilder::new(Size::new(10.0, 7.5), Arc::new(ThemeKind::Consulting.theme())).unwrap()
    }

    #[test]
    fn rejects_invalid_canvas_and_incomplete_theme() {
        let theme = Arc::new(ThemeKind::Classic.theme());
        assert!(SlideBuilder::new(Size::new(0.0, 7.5), theme).is_err());

        let mut partial = ThemeKind::Classic.theme();
        partial.styles.remove(&StyleRole::Accent);
        assert!(matches!(
            SlideBuilder::new(Size::new(10.0, 7.5), Arc::new(partial)),
            Err(LayoutError::UnknownRole { role: StyleRole::Accent, .. })
        ));
    }

    #[test]
    fn regions_follow_call_order_with_resolved_styles() {
        let mut slide = builder();
        let title = slide.title("Our Understanding of Scope").unwrap();
        let subtitle = slide.subtitle("Client seeks a diagnostic").unwrap();
        let body = slide.bullets(["Analyze", "Identify", "Recommend"]).unwrap();
        assert_eq!((title, subtitle, body), (0, 1, 2));

        let slide = slide.finish();
        let regions = slide.regions();
        let roles: Vec<_> = regions.iter().map(|r| r.role).collect();
        assert_eq!(roles, vec![StyleRole::Title, StyleRole::Subtitle, StyleRole::Body]);
        assert!(regions.iter().all(|r| r.style.is_some()));
        assert!(regions
            .get(0)
            .unwrap()
            .rect
            .approx_eq(&Rect::new(0.6, 0.35, 8.8, 0.7), EPSILON));
        assert_eq!(
            regions.get(2).unwrap().text.as_ref().unwrap().paragraphs(),
            ["Analyze", "Identify", "Recommend"]
        );
    }

    #[test]
    fn body_box_matches_reference_geometry() {
        let mut slide = builder();
        let z = slide.bullets(["one"]).unwrap();
        let rect = slide.canvas().region(z).unwrap().rect;
        assert!(rect.approx_eq(&Rect::new(0.6, 1.4, 8.8, 5.5), EPSILON));
    }

    #[test]
    fn boxed_clips_overflowing_rect() {
        let mut slide = builder();
        let z = slide
            .boxed(RegionSpec::new(Rect::new(9.0, 7.0, 2.0, 1.0), StyleRole::Accent))
            .unwrap();
        let rect = slide.canvas().region(z).unwrap().rect;
        assert!(rect.approx_eq(&Rect::new(9.0, 7.0, 1.0, 0.5), EPSILON));

        let finished = slide.finish();
        assert_eq!(finished.metrics().snapshot(Default::default()).clipped_boxes, 1);
    }

    #[test]
    fn place_rejects_unknown_parent() {
        let mut slide = builder();
        let spec = RegionSpec::new(Rect::new(0.0, 0.0, 1.0, 1.0), StyleRole::Body).child_of(3);
        assert_eq!(slide.place(spec), Err(LayoutError::RegionNotFound(3)));
        assert!(slide.canvas().is_empty());
    }

    #[test]
    fn fingerprint_hashes_json_encoding() {
        let mut slide = builder();
        slide.title("Scope").unwrap();
        let finished = slide.finish();

        let region = finished.regions().get(0).unwrap().clone();
        let mut expected = serde_json::to_vec(&region).unwrap();
        expected.push(b'\n');
        assert_eq!(finished.fingerprint().unwrap(), blake3::hash(&expected));

        let mut renamed = builder();
        renamed.title("Scope!").unwrap();
        assert_ne!(finished.fingerprint().unwrap(), renamed.finish().fingerprint().unwrap());
    }

    #[test]
    fn place_rejects_negative_position() {
        let mut slide = builder();
        let spec = RegionSpec::new(Rect::new(-0.5, 1.0, 1.0, 1.0), StyleRole::Body);
        assert!(matches!(
            slide.place(spec),
            Err(LayoutError::InvalidDimension { name: "x", .. })
        ));
        assert!(slide.canvas().is_empty());
    }

    #[test]
    fn overrides_apply_after_resolution() {
        let mut slide = builder();
        let red = Color::rgb(200, 0, 0);
        let z = slide
            .place(
                RegionSpec::new(Rect::new(1.0, 1.0, 1.0, 1.0), StyleRole::CardBackground)
                    .styled(StyleOverride::fill(red)),
            )
            .unwrap();
        let style = slide.canvas().region(z).unwrap().style.clone().unwrap();
        assert_eq!(style.fill, Some(red));
        assert_eq!(style.shape, ShapeKind::RoundedRectangle);
    }

    #[test]
    fn card_children_nest_under_background() {
        let mut slide = builder();
        let card = Card::new()
            .header_strip("Project Start")
            .with_icon()
            .heading("Analyze")
            .body(["mobile app latency", "across flows"]);
        let placed = slide.card(Rect::new(0.6, 1.6, 4.3, 2.0), &card).unwrap();

        assert_eq!(placed.background, 0);
        assert_eq!(placed.children, vec![1, 2, 3, 4]);
        let regions = slide.canvas().regions();
        for z in &placed.children {
            let child = regions.get(*z).unwrap();
            assert_eq!(child.parent, Some(0));
            assert!(regions.get(0).unwrap().rect.contains(&child.rect));
        }
        assert_eq!(regions.get(1).unwrap().role, StyleRole::Accent);
        assert_eq!(regions.get(2).unwrap().style.as_ref().unwrap().shape, ShapeKind::Oval);
    }

    #[test]
    fn card_layout_uses_fixed_inset() {
        let card = Card::new().with_icon().heading("Analyze").body(["desc"]);
        let layout = CardLayout::compute(&Rect::new(0.6, 1.6, 4.3, 1.0), &card, &CardConfig::default());

        assert!(layout.strip.is_none());
        assert!(layout.icon.unwrap().approx_eq(&Rect::new(0.75, 1.75, 0.3, 0.3), EPSILON));
        assert!((layout.heading.unwrap().x - 1.15).abs() < EPSILON);
        let body = layout.body.unwrap();
        assert!((body.x - 0.75).abs() < EPSILON);
        assert!((body.y - 2.15).abs() < EPSILON);
        assert!((body.width - 4.0).abs() < EPSILON);
        assert!((body.bottom() - 2.45).abs() < EPSILON);
    }

    #[test]
    fn card_grid_cycles_accents_and_reports_degenerate_grid() {
        let mut slide = builder();
        let cards: Vec<Card> = (0..6)
            .map(|i| Card::new().with_icon().heading(format!("Item {i}")).body(["detail"]))
            .collect();
        let placed = slide
            .card_grid(2, Rect::new(0.6, 1.6, 8.8, 4.8), &cards)
            .unwrap();

        assert_eq!(placed.len(), 6);
        let accents = slide.theme().accents.clone();
        let regions = slide.canvas().regions();
        for (i, card) in placed.iter().enumerate() {
            let icon = regions.get(card.children[0]).unwrap();
            assert_eq!(icon.style.as_ref().unwrap().fill, Some(accents[i % accents.len()]));
        }

        let before = slide.canvas().len();
        let err = slide
            .card_grid(2, Rect::new(0.6, 1.6, 0.1, 4.8), &cards)
            .unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateGrid { .. }));
        assert_eq!(slide.canvas().len(), before);
    }

    #[test]
    fn chrome_follows_theme() {
        let mut consulting = builder();
        let header = consulting.header_chrome().unwrap();
        assert_eq!(header.len(), 1);
        let footer = consulting.footer(Some("Confidential"), Some(2)).unwrap();
        assert_eq!(footer.len(), 3);
        let regions = consulting.canvas().regions();
        assert_eq!(regions.get(1).unwrap().role, StyleRole::CardBorder);
        let page = regions.get(3).unwrap();
        assert_eq!(page.text.as_ref().unwrap().first(), "02");
        assert_eq!(page.style.as_ref().unwrap().alignment, Alignment::Right);
        assert_eq!(page.style.as_ref().unwrap().font_size_pt, 8.0);

        let mut creative =
            SlideBuilder::new(Size::new(10.0, 7.5), Arc::new(ThemeKind::Creative.theme())).unwrap();
        assert_eq!(creative.header_chrome().unwrap().len(), 2);
        let footer = creative.footer(Some("Confidential"), None).unwrap();
        let regions = creative.canvas().regions();
        let caption = regions.get(footer[1]).unwrap();
        assert_eq!(caption.style.as_ref().unwrap().text_color, Color::WHITE);
    }
}
