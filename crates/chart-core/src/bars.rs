// File: crates/chart-core/src/bars.rs
// Summary: Bar renderer: gradient-filled bars, the highlight overlay and value labels.

use skia_safe as skia;
use tracing::debug;

use crate::color::{Gradient, Palette, Rgb};
use crate::grid::format_value;
use crate::layout::{BarGeom, ChartLayout};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::pt_to_px;

fn paint_bar(canvas: &skia::Canvas, rect: skia::Rect, gradient: &Gradient, edge: Rgb, edge_px: f32) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    match gradient.shader(rect) {
        Some(shader) => {
            fill.set_shader(shader);
        }
        None => {
            fill.set_color(gradient.base.to_color());
        }
    }
    canvas.draw_rect(rect, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(edge_px);
    stroke.set_color(edge.to_color());
    canvas.draw_rect(rect, &stroke);
}

/// Every bar of every series with its own gradient and a thin edge in the base color.
pub fn draw_bars(canvas: &skia::Canvas, layout: &ChartLayout, palette: &Palette, theme: &Theme) {
    let edge_px = pt_to_px(theme.bar_edge_width);
    for bar in &layout.bars {
        paint_bar(canvas, bar.rect, palette.series_gradient(bar.series), palette.series[bar.series], edge_px);
    }
}

/// Re-fill one row's bars with the highlight gradient and thicken their edges, keeping each
/// series' base color on the edge. Rows other than `row` are not touched.
pub fn draw_highlight(canvas: &skia::Canvas, layout: &ChartLayout, palette: &Palette, theme: &Theme, row: usize) {
    let edge_px = pt_to_px(theme.highlight_edge_width);
    let gradient = palette.highlight_gradient();
    for bar in layout.row_bars(row) {
        paint_bar(canvas, bar.rect, gradient, palette.series[bar.series], edge_px);
    }
    debug!(row, "highlight overlay applied");
}

/// Anchor x and alignment of a bar's value label. Labels start `offset_px` inside the
/// bar's far end; for negative bars the far end is the left edge and the text runs leftwards.
pub fn value_label_anchor(bar: &BarGeom, offset_px: f32) -> (f32, HAlign) {
    if bar.value >= 0.0 {
        (bar.rect.right - offset_px, HAlign::Left)
    } else {
        (bar.rect.left + offset_px, HAlign::Right)
    }
}

/// Bold value labels inset `offset_px` from each bar's end, centred on the bar.
pub fn draw_value_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &ChartLayout,
    offset_px: f32,
    color: Rgb,
) {
    let spec = TextSpec::new(pt_to_px(layout.fonts.bar_value), color.to_color()).bold();
    for bar in &layout.bars {
        let (x, h) = value_label_anchor(bar, offset_px);
        shaper.draw(canvas, &format_value(bar.value), &spec, x, bar.rect.center_y(), h, VAlign::Center);
    }
}
