// File: crates/chart-core/src/chart.rs
// Summary: BarChart and the headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use skia_safe as skia;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::bars::{draw_bars, draw_highlight, draw_value_labels};
use crate::color::Palette;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::layout::{plan, ChartLayout};
use crate::style::StyleConfig;
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::pt_to_px;

/// Subtitle lines wrap at this many characters.
pub const SUBTITLE_WRAP: usize = 25;

/// Output of one render call; owned by the caller.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    /// Rows in the order they were drawn.
    pub dataset: Dataset,
    pub png: Vec<u8>,
    pub path: PathBuf,
}

/// Raw pixels of a render: tightly packed RGBA8, `stride` bytes per row.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct BarChart {
    pub dataset: Dataset,
    pub style: StyleConfig,
    pub theme: Theme,
}

impl BarChart {
    pub fn new(dataset: Dataset, style: StyleConfig) -> Self {
        Self { dataset, style, theme: Theme::dark() }
    }

    /// Dataset in final drawing order.
    pub fn sorted_dataset(&self) -> Result<Dataset> {
        match &self.style.sort {
            Some(spec) => self.dataset.sorted(spec),
            None => Ok(self.dataset.clone()),
        }
    }

    /// Render into RGBA8 pixels.
    pub fn render_to_rgba8(&self) -> Result<(Dataset, RgbaFrame)> {
        let dataset = self.sorted_dataset()?;
        let frame = self.rasterize(&dataset)?;
        Ok((dataset, frame))
    }

    /// Render into PNG bytes without touching the filesystem.
    pub fn render_to_png_bytes(&self) -> Result<(Dataset, Vec<u8>)> {
        let (dataset, frame) = self.render_to_rgba8()?;
        Ok((dataset, encode_png(frame)?))
    }

    /// Render and write a PNG at `output_png_path`. The file appears only once it is complete.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<RenderedChart> {
        let path = output_png_path.as_ref();
        let (dataset, png) = self.render_to_png_bytes()?;
        write_atomic(path, &png)?;
        info!(path = %path.display(), rows = dataset.len(), bytes = png.len(), "chart written");
        Ok(RenderedChart { dataset, png, path: path.to_path_buf() })
    }

    fn rasterize(&self, dataset: &Dataset) -> Result<RgbaFrame> {
        let style = &self.style;
        style.check_series(dataset)?;
        let colors: Vec<&str> = style.series.iter().map(|s| s.color.as_str()).collect();
        let palette = Palette::parse(&colors, &style.background, &style.highlight_color)?;
        let layout = plan(dataset, style)?;

        let (w, h) = (layout.width, layout.height);
        let dims = (
            i32::try_from(w).map_err(|_| ChartError::Render(format!("width {w} too large")))?,
            i32::try_from(h).map_err(|_| ChartError::Render(format!("height {h} too large")))?,
        );
        // The surface lives only inside this function; it is dropped before any file is written.
        let mut surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
        {
            let canvas = surface.canvas();
            canvas.clear(palette.background.to_color());
            self.draw(canvas, dataset, &layout, &palette);
        }

        let info = skia::ImageInfo::new(dims, skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Render("failed to read surface pixels".into()));
        }
        Ok(RgbaFrame { pixels, width: w, height: h, stride })
    }

    fn draw(&self, canvas: &skia::Canvas, dataset: &Dataset, layout: &ChartLayout, palette: &Palette) {
        let style = &self.style;
        let theme = &self.theme;

        draw_bars(canvas, layout, palette, theme);
        if let Some(target) = &style.highlight {
            match dataset.find_heading(target) {
                Some(row) => draw_highlight(canvas, layout, palette, theme, row),
                None => debug!(target = %target, "highlight matches no row; overlay skipped"),
            }
        }
        draw_axes(canvas, layout, theme);

        if !style.draw_text {
            return;
        }
        let shaper = TextShaper::new();
        draw_tick_labels(canvas, &shaper, layout, theme);
        draw_value_labels(canvas, &shaper, layout, style.bar_score_offset, palette.background.contrasting());
        draw_title(canvas, &shaper, layout, style, theme);
        if !style.subtitle.trim().is_empty() {
            draw_subtitle(canvas, &shaper, layout, style, theme);
        }
        draw_legend(canvas, &shaper, layout, style, palette, theme);
    }
}

/// Render `dataset` with `style` to `output_path`, returning the drawn row order and PNG bytes.
pub fn render_chart(dataset: Dataset, style: &StyleConfig, output_path: impl AsRef<Path>) -> Result<RenderedChart> {
    BarChart::new(dataset, style.clone()).render_to_png(output_path)
}

// ---- output -----------------------------------------------------------------

fn encode_png(frame: RgbaFrame) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
        .ok_or_else(|| ChartError::Render("pixel buffer does not match surface size".into()))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| ChartError::Render(format!("encode PNG failed: {e}")))?;
    Ok(out.into_inner())
}

/// Write via a temporary sibling file and rename it over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| ChartError::io(dir, e))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ChartError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| ChartError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| ChartError::io(path, e))?;
    tmp.persist(path).map_err(|e| ChartError::io(path, e.error))?;
    Ok(())
}

// ---- chrome -----------------------------------------------------------------

fn stroke(color: skia::Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Left and bottom spines plus outward ticks; top and right spines are not drawn.
fn draw_axes(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let p = &layout.plot;
    let mut spine = stroke(theme.axis, pt_to_px(theme.spine_width));
    spine.set_stroke_join(skia::paint::Join::Bevel);
    let mut path = skia::Path::new();
    path.move_to((p.left, p.top));
    path.line_to((p.left, p.bottom));
    path.line_to((p.right, p.bottom));
    canvas.draw_path(&path, &spine);

    let tick = stroke(theme.axis, pt_to_px(theme.tick_width));
    let len = pt_to_px(theme.tick_length);
    for t in &layout.row_ticks {
        canvas.draw_line((p.left - len, t.px), (p.left, t.px), &tick);
    }
    for t in &layout.value_ticks {
        canvas.draw_line((t.px, p.bottom), (t.px, p.bottom + len), &tick);
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &ChartLayout, theme: &Theme) {
    let p = &layout.plot;
    let gap = pt_to_px(theme.tick_length) * 2.0;
    let rows = TextSpec::new(pt_to_px(layout.fonts.axis), theme.axis);
    for t in &layout.row_ticks {
        shaper.draw(canvas, &t.label, &rows, p.left - gap, t.px, HAlign::Right, VAlign::Center);
    }
    let values = TextSpec::new(pt_to_px(layout.fonts.x_axis), theme.axis);
    for t in &layout.value_ticks {
        shaper.draw(canvas, &t.label, &values, t.px, p.bottom + gap, HAlign::Center, VAlign::Top);
    }
}

fn draw_backdrop(canvas: &skia::Canvas, rect: skia::Rect, pad: f32, theme: &Theme) {
    let boxed = rect.with_outset((pad, pad));
    canvas.draw_rect(boxed, &fill(theme.accent));
    canvas.draw_rect(boxed, &stroke(theme.accent_edge, 1.0));
}

/// Left-aligned title whose baseline sits on the title anchor.
fn draw_title(canvas: &skia::Canvas, shaper: &TextShaper, layout: &ChartLayout, style: &StyleConfig, theme: &Theme) {
    if style.title.is_empty() {
        return;
    }
    let spec = TextSpec::new(pt_to_px(layout.fonts.title), theme.title_text);
    let (x, y) = layout.plot.at(style.title_anchor);
    let placed = shaper.place(&style.title, &spec, x, y, HAlign::Left, VAlign::Baseline);
    draw_backdrop(canvas, placed.rect, spec.size * 0.2, theme);
    shaper.draw(canvas, &style.title, &spec, x, y, HAlign::Left, VAlign::Baseline);
}

fn draw_subtitle(canvas: &skia::Canvas, shaper: &TextShaper, layout: &ChartLayout, style: &StyleConfig, theme: &Theme) {
    let text = wrap_text(&style.subtitle, SUBTITLE_WRAP).join("\n");
    let spec = TextSpec::new(pt_to_px(layout.fonts.subtitle), theme.title_text);
    let (x, y) = layout.plot.at(style.subtitle_anchor);
    let placed = shaper.place(&text, &spec, x, y, HAlign::Right, VAlign::Center);
    draw_backdrop(canvas, placed.rect, spec.size * 0.5, theme);
    shaper.draw(canvas, &text, &spec, x, y, HAlign::Right, VAlign::Center);
}

/// Boxed legend, one swatch per series in column order; lower-right corner on the legend anchor.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &ChartLayout,
    style: &StyleConfig,
    palette: &Palette,
    theme: &Theme,
) {
    if style.series.is_empty() {
        return;
    }
    let spec = TextSpec::new(pt_to_px(layout.fonts.legend), theme.legend_text);
    let em = spec.size;
    let (border, spacing, handle_w, handle_h, text_pad) = (0.4 * em, 0.5 * em, 2.0 * em, 0.7 * em, 0.8 * em);

    let sizes: Vec<(f32, f32)> = style.series.iter().map(|s| shaper.measure(&s.legend, &spec)).collect();
    let text_w = sizes.iter().map(|s| s.0).fold(0f32, f32::max);
    let heights: Vec<f32> = sizes.iter().map(|s| s.1.max(handle_h)).collect();
    let box_w = border * 2.0 + handle_w + text_pad + text_w;
    let box_h = border * 2.0 + heights.iter().sum::<f32>() + spacing * (heights.len() - 1) as f32;

    let (right, bottom) = layout.plot.at(style.legend_anchor);
    let frame = skia::Rect::from_ltrb(right - box_w, bottom - box_h, right, bottom);
    let radius = 0.2 * em;
    canvas.draw_round_rect(frame, radius, radius, &fill(theme.legend_frame));
    canvas.draw_round_rect(frame, radius, radius, &stroke(theme.legend_frame_edge, 1.0));

    let mut y = frame.top + border;
    for ((series, color), row_h) in style.series.iter().zip(&palette.series).zip(&heights) {
        let cy = y + row_h / 2.0;
        let swatch = skia::Rect::from_xywh(frame.left + border, cy - handle_h / 2.0, handle_w, handle_h);
        canvas.draw_rect(swatch, &fill(color.to_color()));
        canvas.draw_rect(swatch, &stroke(theme.swatch_edge, 1.0));
        shaper.draw(canvas, &series.legend, &spec, swatch.right + text_pad, cy, HAlign::Left, VAlign::Center);
        y += row_h + spacing;
    }
}

/// Greedy word wrap at `width` characters; words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        loop {
            let sep = usize::from(line_len > 0);
            if line_len + sep + chars.len() <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.extend(chars.iter());
                line_len += sep + chars.len();
                break;
            }
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            // Word alone exceeds the width.
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}
