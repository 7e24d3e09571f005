// File: crates/chart-core/src/layout.rs
// Summary: Layout planner: series offsets, row/tick positions, label heuristics and bar rectangles.

use skia_safe as skia;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::{clamp, LinearMap, PlotRect};
use crate::grid::{format_value, nice_ticks, TARGET_TICKS};
use crate::style::{FontSizes, StyleConfig};

/// Tick labels sit this far below the nominal row position so they line up with the bar group.
pub const ROW_LABEL_SHIFT: f64 = -0.2;
/// Padding added on each side of the data range, as a fraction of the span.
pub const AXIS_PAD: f64 = 0.05;
pub const MIN_AXIS_FONT: f32 = 5.0;
pub const MAX_AXIS_FONT: f32 = 30.0;

/// Standard linear range remap.
pub fn remap(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Offset of series `index` (of `count`) from its row's nominal position.
/// With an even count the row position falls between two series; with an odd count
/// one series is exactly centred. Both are kept as-is.
pub fn series_offset(index: usize, count: usize, thickness: f64) -> f64 {
    (index as f64 - count as f64 / 2.0) * thickness
}

pub fn row_positions(rows: usize) -> Vec<f64> {
    (0..rows).map(|r| r as f64).collect()
}

pub fn tick_positions(rows: usize) -> Vec<f64> {
    row_positions(rows).into_iter().map(|p| p + ROW_LABEL_SHIFT).collect()
}

/// `heading`, or `heading\nsubheading` when the dataset carries the subheading field.
pub fn tick_labels(dataset: &Dataset) -> Result<Vec<String>> {
    dataset.check_subheadings()?;
    Ok(dataset
        .rows()
        .iter()
        .map(|row| match &row.subheading {
            Some(sub) => format!("{}\n{}", row.heading, sub),
            None => row.heading.clone(),
        })
        .collect())
}

/// Longest heading or subheading, in characters.
pub fn longest_label_len(dataset: &Dataset) -> usize {
    dataset
        .rows()
        .iter()
        .flat_map(|row| std::iter::once(&row.heading).chain(row.subheading.as_ref()))
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
}

/// Smaller category fonts for longer labels, kept within the slider bounds.
pub fn default_axis_font_size(longest: usize) -> f32 {
    let raw = remap(longest as f64, 1.0, 30.0, 30.0, 5.0).floor() as f32;
    clamp(raw, MIN_AXIS_FONT, MAX_AXIS_FONT)
}

/// One drawn bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeom {
    pub row: usize,
    pub series: usize,
    pub value: f64,
    pub rect: skia::Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel coordinate along the tick's axis.
    pub px: f32,
    pub label: String,
}

/// Everything the renderers need, in canvas pixels.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub plot: PlotRect,
    pub x_map: LinearMap,
    pub y_map: LinearMap,
    pub rows: usize,
    pub series_count: usize,
    /// Series-major: every row of series 0, then series 1, ...
    pub bars: Vec<BarGeom>,
    pub row_ticks: Vec<Tick>,
    pub value_ticks: Vec<Tick>,
    /// Point sizes after the top-tier adjustment.
    pub fonts: FontSizes,
}

impl ChartLayout {
    pub fn bar(&self, row: usize, series: usize) -> Option<&BarGeom> {
        if row >= self.rows || series >= self.series_count {
            return None;
        }
        self.bars.get(series * self.rows + row)
    }

    pub fn bar_rect(&self, row: usize, series: usize) -> Option<skia::Rect> {
        self.bar(row, series).map(|b| b.rect)
    }

    /// Bars of one row across every series.
    pub fn row_bars(&self, row: usize) -> impl Iterator<Item = &BarGeom> + '_ {
        (0..self.series_count).filter_map(move |s| self.bar(row, s))
    }
}

/// Compute positions for an already sorted dataset.
pub fn plan(dataset: &Dataset, style: &StyleConfig) -> Result<ChartLayout> {
    let values = dataset.score_matrix()?;
    let labels = tick_labels(dataset)?;
    let rows = dataset.len();
    let n = dataset.series_count();
    let t = style.bar_thickness;
    let res = style.resolution;
    let plot = PlotRect::from_margins(res.width, res.height, &style.margins);

    // Value axis always includes zero.
    let (mut lo, mut hi) = values.iter().flatten().fold((0f64, 0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if hi - lo <= 0.0 {
        hi = 1.0;
    } else {
        // Scaled per term so the padding stays finite near f64::MAX.
        let pad = hi * AXIS_PAD - lo * AXIS_PAD;
        if hi > 0.0 { hi = (hi + pad).min(f64::MAX); }
        if lo < 0.0 { lo = (lo - pad).max(f64::MIN); }
    }
    let x_map = LinearMap::new(lo, hi, plot.left, plot.right);

    // Category axis spans the bar extents plus padding.
    let (y_lo, y_hi) = if rows == 0 {
        (-0.5, 0.5)
    } else {
        let first = series_offset(0, n, t) - t / 2.0;
        let last = (rows - 1) as f64 + series_offset(n - 1, n, t) + t / 2.0;
        let pad = (last - first) * AXIS_PAD;
        (first - pad, last + pad)
    };
    let y_map = LinearMap::new(y_lo, y_hi, plot.bottom, plot.top);

    let zero_px = x_map.to_px(0.0);
    let mut bars = Vec::with_capacity(rows * n);
    for s in 0..n {
        let off = series_offset(s, n, t);
        for (r, pos) in row_positions(rows).into_iter().enumerate() {
            let value = values[r][s];
            let centre = pos + off;
            let end_px = x_map.to_px(value);
            let rect = skia::Rect::from_ltrb(
                zero_px.min(end_px),
                y_map.to_px(centre + t / 2.0),
                zero_px.max(end_px),
                y_map.to_px(centre - t / 2.0),
            );
            bars.push(BarGeom { row: r, series: s, value, rect });
        }
    }

    let row_ticks = tick_positions(rows)
        .into_iter()
        .zip(labels)
        .map(|(p, label)| Tick { px: y_map.to_px(p), label })
        .collect();
    let value_ticks = nice_ticks(lo, hi, TARGET_TICKS)
        .into_iter()
        .map(|v| Tick { px: x_map.to_px(v), label: format_value(v) })
        .collect();

    let fonts = style.fonts.resolved(res, style.top_tier);
    debug!(rows, series = n, thickness = t, x_max = hi, ?fonts, "planned chart layout");

    Ok(ChartLayout {
        width: res.width,
        height: res.height,
        plot,
        x_map,
        y_map,
        rows,
        series_count: n,
        bars,
        row_ticks,
        value_ticks,
        fonts,
    })
}
