// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored, aligned, optionally bold, multi-line.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Horizontal placement relative to the anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement relative to the anchor y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    /// Anchor y is the first line's baseline.
    Baseline,
    Bottom,
}

/// Size, color and weight of a run of text. `size` is in pixels.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Laid-out text box with its top-left corner on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub rect: skia::Rect,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    fn build(&self, text: &str, spec: &TextSpec, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width);
        paragraph
    }

    /// Width of the longest line and total height, in pixels.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.build(text, spec, TextAlign::Left, 10_000.0);
        (p.longest_line(), p.height())
    }

    /// Where `draw` would put `text`, without drawing it.
    pub fn place(&self, text: &str, spec: &TextSpec, x: f32, y: f32, h: HAlign, v: VAlign) -> TextBox {
        let p = self.build(text, spec, TextAlign::Left, 10_000.0);
        let (w, ht) = (p.longest_line(), p.height());
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w / 2.0,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht / 2.0,
            VAlign::Baseline => y - p.alphabetic_baseline(),
            VAlign::Bottom => y - ht,
        };
        TextBox { rect: skia::Rect::from_xywh(left, top, w, ht) }
    }

    /// Draw `text` anchored at (x, y). Lines of multi-line text share the horizontal alignment.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        spec: &TextSpec,
        x: f32,
        y: f32,
        h: HAlign,
        v: VAlign,
    ) -> TextBox {
        let placed = self.place(text, spec, x, y, h, v);
        let align = match h {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        };
        // Re-layout at the measured width so per-line alignment applies.
        let width = placed.rect.width().ceil() + 1.0;
        let p = self.build(text, spec, align, width);
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - width / 2.0,
            HAlign::Right => x - width,
        };
        p.paint(canvas, (left, placed.rect.top));
        placed
    }
}
