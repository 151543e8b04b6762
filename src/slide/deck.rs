use std::sync::Arc;
use std::time::Instant;

use crate::config::DeckConfig;
use crate::error::Result;
use crate::geometry::Size;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{DeckMetrics, MetricSnapshot};
use crate::theme::Theme;

use super::core::{Slide, SlideBuilder};

/// Ordered slides sharing one canvas size and theme.
#[derive(Debug, Clone)]
pub struct Deck {
    size: Size,
    theme: Arc<Theme>,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn fingerprint(&self) -> serde_json::Result<blake3::Hash> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.theme.name.as_bytes());
        for (index, slide) in self.slides.iter().enumerate() {
            hasher.update(&(index as u64).to_le_bytes());
            slide.hash_into(&mut hasher)?;
        }
        Ok(hasher.finalize())
    }
}

/// Hands out slide builders configured from a [`DeckConfig`] and collects
/// the finished slides.
#[derive(Debug)]
pub struct DeckBuilder {
    config: DeckConfig,
    theme: Arc<Theme>,
    slides: Vec<Slide>,
    logger: Option<Logger>,
    metrics: DeckMetrics,
    started: Instant,
}

impl DeckBuilder {
    pub fn new(config: DeckConfig) -> Result<Self> {
        config.validate()?;
        let theme = Arc::new(config.theme.resolve()?);
        Ok(Self {
            config,
            theme,
            slides: Vec::new(),
            logger: None,
            metrics: DeckMetrics::new(),
            started: Instant::now(),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self.log(
            LogLevel::Info,
            "deck_started",
            [
                json_str("theme", self.theme.name.as_str()),
                json_kv("accents", self.theme.accents.len()),
            ],
        );
        self
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Page number the next pushed slide will get.
    pub fn next_page(&self) -> usize {
        self.slides.len() + 1
    }

    /// Blank slide using the deck's canvas, theme and geometry.
    pub fn new_slide(&self) -> Result<SlideBuilder> {
        Ok(SlideBuilder::new(self.config.canvas, Arc::clone(&self.theme))?
            .with_frame(self.config.frame.clone())
            .with_card_config(self.config.card.clone()))
    }

    /// Slide with header chrome, footer, title and optional subtitle already
    /// placed, in that order. The page number is added by [`Self::push`], so
    /// it follows push order rather than the order slides were framed in.
    pub fn framed_slide(&self, title: &str, subtitle: Option<&str>) -> Result<SlideBuilder> {
        let mut slide = self.new_slide()?;
        slide.header_chrome()?;
        let caption = self.config.footer_text.as_deref();
        if self.config.number_pages {
            slide.footer_with_deferred_page(caption)?;
        } else {
            slide.footer(caption, None)?;
        }
        slide.title(title)?;
        if let Some(subtitle) = subtitle {
            slide.subtitle(subtitle)?;
        }
        Ok(slide)
    }

    pub fn push(&mut self, slide: SlideBuilder) -> &Slide {
        let index = self.slides.len();
        let slide = slide.finish_as_page(index + 1);
        self.log(
            LogLevel::Debug,
            "slide_built",
            [json_kv("slide", index), json_kv("regions", slide.len())],
        );
        for overflow in slide.overflows() {
            self.log(
                LogLevel::Warn,
                "layout_overflow",
                [
                    json_kv("slide", index),
                    json_kv("right", overflow.right),
                    json_kv("bottom", overflow.bottom),
                    json_kv("first_cell", overflow.first_cell),
                ],
            );
        }
        self.metrics.merge(slide.metrics());
        self.slides.push(slide);
        &self.slides[index]
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot(self.started.elapsed())
    }

    pub fn build(self) -> Deck {
        let snapshot = self.metrics();
        if let Some(logger) = self.logger.as_ref() {
            let mut event = snapshot.to_log_event(&self.config.log_target);
            event.message = "deck_finished".to_string();
            event.fields.insert("theme".to_string(), self.theme.name.clone().into());
            let _ = logger.log_event(event);
        }
        Deck {
            size: self.config.canvas,
            theme: self.theme,
            slides: self.slides,
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EPSILON, Rect};
    use crate::logging::MemorySink;
    use crate::slide::{Card, Timeline, TimelineStep};
    use crate::theme::{StyleRole, ThemeKind};

    fn scope_slide(deck: &DeckBuilder) -> SlideBuilder {
        let mut slide = deck
            .framed_slide("Our Understanding of Scope", Some("Mobile performance diagnostic"))
            .unwrap();
        slide
            .bullets(["Analyze app load time", "Identify root causes", "Recommend fixes"])
            .unwrap();
        slide
    }

    #[test]
    fn framed_slide_places_chrome_then_text() {
        let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
        let slide = scope_slide(&deck);
        let slide = deck.push(slide);
        let roles: Vec<_> = slide.regions().iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![
                StyleRole::Accent,
                StyleRole::CardBorder,
                StyleRole::Title,
                StyleRole::Subtitle,
                StyleRole::Body,
                StyleRole::Subtitle,
            ]
        );
        let body = slide.regions().get(4).unwrap().clone();
        assert!(body.rect.approx_eq(&Rect::new(0.6, 1.4, 8.8, 5.5), EPSILON));
        let page = slide.regions().get(5).unwrap().clone();
        assert_eq!(page.text.unwrap().first(), "01");
    }

    #[test]
    fn swapping_theme_keeps_geometry() {
        let build = |kind: ThemeKind| {
            let deck = DeckBuilder::new(DeckConfig::default().with_theme(kind)).unwrap();
            let mut slide = deck.new_slide().unwrap();
            slide.title("Scope").unwrap();
            slide
                .card_grid(3, Rect::new(0.6, 1.6, 8.8, 2.0), &[Card::new().heading("A"), Card::new().heading("B")])
                .unwrap();
            slide.finish()
        };
        let consulting = build(ThemeKind::Consulting);
        let creative = build(ThemeKind::Creative);

        assert_eq!(consulting.len(), creative.len());
        for (a, b) in consulting.regions().iter().zip(creative.regions().iter()) {
            assert_eq!(a.rect, b.rect);
            assert_eq!(a.role, b.role);
        }
        let title_a = consulting.regions().get(0).unwrap().style.clone().unwrap();
        let title_b = creative.regions().get(0).unwrap().style.clone().unwrap();
        assert_ne!(title_a, title_b);
    }

    #[test]
    fn identical_builds_share_fingerprint() {
        let build = || {
            let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
            let slide = scope_slide(&deck);
            deck.push(slide);
            deck.build()
        };
        assert_eq!(build().fingerprint().unwrap(), build().fingerprint().unwrap());

        let mut other = DeckBuilder::new(DeckConfig::default().with_theme(ThemeKind::Classic)).unwrap();
        let slide = scope_slide(&other);
        other.push(slide);
        assert_ne!(
            build().fingerprint().unwrap(),
            other.build().fingerprint().unwrap()
        );
    }

    #[test]
    fn overflow_is_logged_and_counted() {
        let sink = MemorySink::new();
        let mut deck = DeckBuilder::new(DeckConfig::default())
            .unwrap()
            .with_logger(Logger::new(sink.clone()));

        let mut slide = deck.framed_slide("Approach", None).unwrap();
        let steps = (0..7)
            .map(|i| TimelineStep::new(format!("Week {i}"), "Phase", ["item"]))
            .collect();
        let placed = slide.timeline(&Timeline::new(steps).at(1.0, 1.7)).unwrap();
        assert_eq!(placed.overflow.first_cell, Some(5));
        deck.push(slide);

        assert_eq!(deck.metrics().overflow_reports, 1);
        let deck = deck.build();
        assert_eq!(deck.len(), 1);

        let messages = sink.messages();
        assert_eq!(
            messages,
            vec!["deck_started", "slide_built", "layout_overflow", "deck_finished"]
        );
        let warning = &sink.events()[2];
        assert_eq!(warning.level, LogLevel::Warn);
        assert_eq!(warning.field("first_cell"), Some(&serde_json::json!(5)));
        let finished = &sink.events()[3];
        assert_eq!(finished.field("slides"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn page_numbers_follow_push_order() {
        let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
        for _ in 0..2 {
            let slide = deck.framed_slide("Title", None).unwrap();
            deck.push(slide);
        }
        let deck = deck.build();
        let page = |slide: &Slide| {
            slide
                .regions()
                .iter()
                .filter_map(|r| r.text.as_ref())
                .map(|t| t.first().to_string())
                .find(|t| t.starts_with('0'))
        };
        assert_eq!(page(&deck.slides()[0]).as_deref(), Some("01"));
        assert_eq!(page(&deck.slides()[1]).as_deref(), Some("02"));
    }

    #[test]
    fn slides_framed_ahead_are_numbered_when_pushed() {
        let mut deck = DeckBuilder::new(DeckConfig::default()).unwrap();
        let first = deck.framed_slide("First", None).unwrap();
        let second = deck.framed_slide("Second", None).unwrap();
        deck.push(second);
        deck.push(first);

        let deck = deck.build();
        let summary: Vec<(String, String)> = deck
            .slides()
            .iter()
            .map(|slide| {
                let texts: Vec<String> = slide
                    .regions()
                    .iter()
                    .filter_map(|r| r.text.as_ref().map(|t| t.first().to_string()))
                    .collect();
                (texts[0].clone(), texts[texts.len() - 1].clone())
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Second".to_string(), "01".to_string()),
                ("First".to_string(), "02".to_string()),
            ]
        );
    }

    #[test]
    fn unnumbered_decks_skip_the_page_slot() {
        let config = DeckConfig {
            number_pages: false,
            ..DeckConfig::default()
        };
        let mut deck = DeckBuilder::new(config).unwrap();
        let slide = deck.framed_slide("Title", None).unwrap();
        let slide = deck.push(slide);
        assert_eq!(slide.len(), 3);
    }
}
