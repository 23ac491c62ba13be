// File: crates/pulse-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, placing labels by scene anchor and baseline.

use pulse_core::scene::{Anchor, Baseline, TextStyle, Weight};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle};
use skia_safe as skia;

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &TextStyle) -> skia::textlayout::TextStyle {
        let mut ts = skia::textlayout::TextStyle::new();
        ts.set_font_size((style.size as f32).max(1.0));
        ts.set_color(to_skia_color(style.color));
        let weight = match style.weight {
            Weight::Normal => skia::font_style::Weight::NORMAL,
            Weight::Medium => skia::font_style::Weight::MEDIUM,
            Weight::Bold => skia::font_style::Weight::BOLD,
        };
        ts.set_font_style(skia::FontStyle::new(weight, skia::font_style::Width::NORMAL, skia::font_style::Slant::Upright));
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "Noto Color Emoji", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `(x, y)` is its anchor point, as an SVG `<text>` would place it.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &TextStyle) {
        let p = self.layout(text, style);
        let width = p.longest_line();
        let left = match style.anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        // Paragraph draws from top-left.
        let top = match style.baseline {
            Baseline::Alphabetic => y - p.alphabetic_baseline(),
            Baseline::Central => y - p.height() * 0.5,
        };
        p.paint(canvas, (left, top));
    }
}
