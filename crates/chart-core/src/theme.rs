// File: crates/chart-core/src/theme.rs
// Summary: Fixed chart chrome colors and stroke widths (dark-background assumption).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Spines, ticks and tick labels.
    pub axis: skia::Color,
    /// Title/subtitle backdrop fill.
    pub accent: skia::Color,
    pub accent_edge: skia::Color,
    pub title_text: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_frame_edge: skia::Color,
    pub legend_text: skia::Color,
    pub swatch_edge: skia::Color,
    /// Stroke widths in points.
    pub spine_width: f32,
    pub tick_width: f32,
    pub tick_length: f32,
    pub bar_edge_width: f32,
    pub highlight_edge_width: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis: skia::Color::WHITE,
            accent: skia::Color::from_argb(255, 0x00, 0x5c, 0xb9),
            accent_edge: skia::Color::BLACK,
            title_text: skia::Color::WHITE,
            legend_frame: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame_edge: skia::Color::from_argb(255, 204, 204, 204),
            legend_text: skia::Color::BLACK,
            swatch_edge: skia::Color::BLACK,
            spine_width: 2.5,
            tick_width: 2.0,
            tick_length: 3.5,
            bar_edge_width: 1.0,
            highlight_edge_width: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
