//! Proposal deck demo.
//!
//! Builds the mobile-performance proposal in one or all four themes and prints
//! either a text wireframe (default) or the JSON manifest (`--json`).
//!
//! ```text
//! cargo run --example proposal_deck -- creative
//! cargo run --example proposal_deck -- --json professional
//! ```

use std::env;
use std::error::Error;
use std::io;

use slide_canvas::logging::{FileSink, LogLevel};
use slide_canvas::{
    Card, Comparison, DeckBuilder, DeckConfig, Gantt, GanttTask, JsonManifestSink, Logger, Point, Rect,
    Table, ThemeKind, Timeline, TimelineStep, WireframeRenderer, export_deck,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut json = false;
    let mut kinds = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            name => kinds.push(name.parse::<ThemeKind>()?),
        }
    }
    if kinds.is_empty() {
        kinds.extend(ThemeKind::ALL);
    }

    let logger = match env::var("SLIDE_CANVAS_LOG") {
        Ok(path) => Some(Logger::new(FileSink::new(path, 1024 * 1024)?).with_min_level(LogLevel::Info)),
        Err(_) => None,
    };

    for kind in kinds {
        let config = DeckConfig::default()
            .with_theme(kind)
            .with_footer("Mobile Performance Diagnostic | Confidential");
        let mut deck = DeckBuilder::new(config)?;
        if let Some(logger) = logger.clone() {
            deck = deck.with_logger(logger);
        }
        build(&mut deck)?;
        let deck = deck.build();

        if json {
            let mut sink = JsonManifestSink::new(io::stdout().lock()).pretty();
            export_deck(&deck, &mut sink)?;
        } else {
            println!("=== {kind} ===");
            let mut renderer = WireframeRenderer::with_default();
            export_deck(&deck, &mut renderer)?;
            renderer.render(&mut io::stdout().lock())?;
        }
    }
    Ok(())
}

fn build(deck: &mut DeckBuilder) -> slide_canvas::Result<()> {
    let mut slide = deck.framed_slide(
        "Our Understanding of Scope",
        Some("Client seeks a diagnostic of mobile app performance"),
    )?;
    slide.bullets([
        "Analyze app load time across critical user flows",
        "Identify root causes of slow API responses and heavy payloads",
        "Recommend fixes with an expected uplift range",
    ])?;
    deck.push(slide);

    let mut slide = deck.framed_slide("Objectives", Some("What the diagnostic delivers"))?;
    let cards = [
        ("Measure", "Benchmark cold and warm start on reference devices"),
        ("Profile", "Map API calls, payload sizes and cache behaviour"),
        ("Explain", "Trace each regression to a root cause"),
        ("Prioritize", "Rank fixes by effort and expected impact"),
    ]
    .into_iter()
    .map(|(heading, body)| Card::new().with_icon().heading(heading).body([body]))
    .collect::<Vec<_>>();
    let content = slide.content_rect();
    slide.card_grid(2, content, &cards)?;
    deck.push(slide);

    let mut slide = deck.framed_slide("Our Approach", Some("Week 0 to Week 4 execution plan"))?;
    let steps = vec![
        TimelineStep::new("Week 0", "Setup & Access", ["Access provisioning", "Build validation"]),
        TimelineStep::new("Week 1", "Profiling & Analysis", ["Load-time benchmarking", "API call mapping"]),
        TimelineStep::new("Week 2", "RCA & Observations", ["Root-cause identification", "SDK constraints"]),
        TimelineStep::new("Week 3", "Discussions", ["Joint walkthrough", "Feasibility check"]),
        TimelineStep::new("Week 4", "Final Report", ["Uplift range", "Execution plan"]),
    ];
    slide.timeline(&Timeline::new(steps))?;
    deck.push(slide);

    let mut slide = deck.framed_slide(
        "North Star Vision",
        Some("Performance North Star (Industry Benchmarks)"),
    )?;
    slide.comparison(
        &Comparison::new(
            "Primary Screen Load Time",
            "Current: 6.0 sec (Slow)",
            "Market Benchmark: 2.0 sec",
        )
        .improvement("67% faster"),
    )?;
    deck.push(slide);

    let mut slide = deck.framed_slide("Team Structure", None)?;
    let table = Table::new(vec![3.3, 0.7, 4.5], 0.45, Point::new(0.6, 1.5))
        .headers(["Role", "Count", "Responsibility"])
        .row(["Engagement Lead", "1", "Owns delivery and client alignment"])
        .row(["Mobile Performance Engineer", "2", "Profiling, RCA and fix validation"])
        .row(["Backend Analyst", "1", "API latency and payload review"]);
    slide.table(&table)?;
    deck.push(slide);

    let mut slide = deck.framed_slide("Gantt Timeline", Some("Weeks 0 to 4"))?;
    let gantt = Gantt::new(
        ["Week 0", "Week 1", "Week 2", "Week 3", "Week 4"],
        vec![
            GanttTask::new("Setup & Access", 0, 1),
            GanttTask::new("Profiling & Analysis", 1, 1),
            GanttTask::new("RCA & Observations", 2, 1),
            GanttTask::new("Discussions & Verifications", 3, 1),
            GanttTask::new("Final Report", 4, 1),
        ],
    );
    slide.gantt(&gantt)?;
    slide.card(
        Rect::new(0.6, 5.6, 8.8, 1.0),
        &Card::new()
            .warning()
            .heading("Assumption")
            .body(["Timeline assumes access is granted by the end of Week 0"]),
    )?;
    deck.push(slide);

    Ok(())
}
