use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::geometry::Size;

use super::core::{ExportRegion, ExportResult, RegionSink};

#[derive(Debug, Serialize)]
struct ManifestSlide {
    index: usize,
    size: Size,
    regions: Vec<Value>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    slides: &'a [ManifestSlide],
}

/// Writes the whole deck as one JSON document when the export finishes.
#[derive(Debug)]
pub struct JsonManifestSink<W: Write> {
    writer: W,
    pretty: bool,
    slides: Vec<ManifestSlide>,
}

impl<W: Write> JsonManifestSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            slides: Vec::new(),
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RegionSink for JsonManifestSink<W> {
    fn begin_slide(&mut self, index: usize, size: Size) -> ExportResult<()> {
        self.slides.push(ManifestSlide {
            index,
            size,
            regions: Vec::new(),
        });
        Ok(())
    }

    fn emit_region(&mut self, region: &ExportRegion<'_>) -> ExportResult<()> {
        let value = serde_json::to_value(region)?;
        match self.slides.last_mut() {
            Some(slide) => slide.regions.push(value),
            None => self.slides.push(ManifestSlide {
                index: region.slide,
                size: Size::new(0.0, 0.0),
                regions: vec![value],
            }),
        }
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<()> {
        let manifest = Manifest {
            slides: &self.slides,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &manifest)?;
        } else {
            serde_json::to_writer(&mut self.writer, &manifest)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;
    use crate::export::export_deck;
    use crate::geometry::Rect;
    use crate::slide::{Card, DeckBuilder};
    use crate::theme::ThemeKind;

    #[test]
    fn manifest_lists_resolved_regions() {
        let mut deck = DeckBuilder::new(DeckConfig::default().with_theme(ThemeKind::Creative)).unwrap();
        let mut slide = deck.new_slide().unwrap();
        slide.title("Timeline").unwrap();
        slide
            .card(
                Rect::new(0.6, 1.6, 4.0, 2.0),
                &Card::new().heading("Week 0").body(["Setup", "Access"]),
            )
            .unwrap();
        deck.push(slide);

        let mut sink = JsonManifestSink::new(Vec::new());
        export_deck(&deck.build(), &mut sink).unwrap();
        let manifest: Value = serde_json::from_slice(&sink.into_inner()).unwrap();

        let slides = manifest["slides"].as_array().unwrap();
        assert_eq!(slides.len(), 1);
        let regions = slides[0]["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0]["role"], "title");
        assert_eq!(regions[0]["emu"]["x"], 548_640);
        assert_eq!(regions[1]["style"]["shape"], "rounded_rectangle");
        assert_eq!(regions[3]["parent"], 1);
        assert_eq!(
            regions[3]["text"]["paragraphs"],
            serde_json::json!(["Setup", "Access"])
        );
        assert_eq!(slides[0]["size"]["height"], 7.5);
    }
}
