use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use slide_canvas::logging::{LogEvent, LogSink};
use slide_canvas::{
    Allocator, Card, DeckBuilder, DeckConfig, Gutter, LayoutIntent, Logger, LoggingResult, Rect,
    Result, Size, ThemeKind, Timeline, TimelineStep, WireframeRenderer, export_deck,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn allocate_intents(c: &mut Criterion) {
    let allocator = Allocator::new(Size::new(10.0, 7.5));
    let grid = LayoutIntent::grid(4, 3, Rect::new(0.6, 1.6, 8.8, 5.2), Gutter::uniform(0.2));
    let table = LayoutIntent::table(12, vec![3.3, 0.7, 4.5], 0.4, slide_canvas::Point::new(0.6, 1.5));
    c.bench_function("allocate_grid_4x3", |b| {
        b.iter(|| allocator.allocate(black_box(&grid)).expect("grid"));
    });
    c.bench_function("allocate_table_12x3", |b| {
        b.iter(|| allocator.allocate(black_box(&table)).expect("table"));
    });
}

fn build_proposal(c: &mut Criterion) {
    c.bench_function("build_proposal_deck", |b| {
        b.iter(|| build_deck(black_box(ThemeKind::Creative)).expect("deck"));
    });
}

fn export_wireframe(c: &mut Criterion) {
    let deck = build_deck(ThemeKind::Consulting).expect("deck");
    c.bench_function("export_wireframe", |b| {
        b.iter(|| {
            let mut renderer = WireframeRenderer::with_default();
            export_deck(&deck, &mut renderer).expect("export");
            renderer.render(&mut io::sink()).expect("render");
        });
    });
}

fn build_deck(kind: ThemeKind) -> Result<slide_canvas::Deck> {
    let config = DeckConfig::default().with_theme(kind);
    let mut deck = DeckBuilder::new(config)?.with_logger(Logger::new(NullSink));

    for page in 0..6 {
        let mut slide = deck.framed_slide("Key Findings", Some("Mobile performance diagnostic"))?;
        let cards: Vec<Card> = (0..6)
            .map(|i| {
                Card::new()
                    .with_icon()
                    .heading(format!("Finding {page}.{i}"))
                    .body(["Cold start regressed", "Cache misses on launch"])
            })
            .collect();
        let content = slide.content_rect();
        slide.card_grid(3, content, &cards)?;
        deck.push(slide);
    }

    let mut slide = deck.framed_slide("Approach", None)?;
    let steps = (0..5)
        .map(|i| TimelineStep::new(format!("Week {i}"), "Profiling", ["Benchmark", "Map API calls"]))
        .collect();
    slide.timeline(&Timeline::new(steps))?;
    deck.push(slide);

    Ok(deck.build())
}

criterion_group!(benches, allocate_intents, build_proposal, export_wireframe);
criterion_main!(benches);
