// File: crates/chart-core/src/style.rs
// Summary: Resolved style configuration, resolution tiers, font sizes and preset-derived defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::{legend_default, Dataset, SortSpec};
use crate::error::{ChartError, Result};
use crate::layout::{default_axis_font_size, longest_label_len};
use crate::types::{Anchor, Margins, HEIGHT, WIDTH};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Highest tier offered out of the box (4K UHD).
    pub const TOP_TIER: Resolution = Resolution { width: 3840, height: 2160 };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ChartError;

    /// Parses `"WxH"`, e.g. `"1920x1080"`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || ChartError::format(format!("resolution '{s}' is not WIDTHxHEIGHT"));
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
        let width: u32 = w.trim().parse().map_err(|_| bad())?;
        let height: u32 = h.trim().parse().map_err(|_| bad())?;
        if width == 0 || height == 0 {
            return Err(bad());
        }
        Ok(Self { width, height })
    }
}

/// Font sizes in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub subtitle: f32,
    /// Category (row label) ticks.
    pub axis: f32,
    /// Value ticks.
    pub x_axis: f32,
    pub legend: f32,
    pub bar_value: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 30.0, subtitle: 15.0, axis: 18.0, x_axis: 15.0, legend: 25.0, bar_value: 15.0 }
    }
}

impl FontSizes {
    /// Sizes actually used for layout. At the top resolution tier the title and
    /// both tick sizes are doubled.
    pub fn resolved(&self, resolution: Resolution, top_tier: Resolution) -> FontSizes {
        if resolution != top_tier {
            return *self;
        }
        FontSizes {
            title: self.title * 2.0,
            axis: self.axis * 2.0,
            x_axis: self.x_axis * 2.0,
            ..*self
        }
    }
}

/// Color and legend text for one score column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: String,
    pub legend: String,
}

impl SeriesStyle {
    pub fn new(color: impl Into<String>, legend: impl Into<String>) -> Self {
        Self { color: color.into(), legend: legend.into() }
    }
}

/// Fully resolved parameters for one render call.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// One entry per score column, in column order.
    pub series: Vec<SeriesStyle>,
    pub background: String,
    pub highlight_color: String,
    /// Heading of the row to emphasise.
    pub highlight: Option<String>,
    /// Series bar height as a fraction of one row slot.
    pub bar_thickness: f64,
    /// Inset of the value label from the bar end, in pixels.
    pub bar_score_offset: f32,
    pub fonts: FontSizes,
    pub title: String,
    pub subtitle: String,
    pub title_anchor: Anchor,
    pub subtitle_anchor: Anchor,
    /// Lower-right corner of the legend box.
    pub legend_anchor: Anchor,
    pub margins: Margins,
    pub resolution: Resolution,
    pub top_tier: Resolution,
    pub sort: Option<SortSpec>,
    /// When false no text is drawn at all (pixel snapshots independent of installed fonts).
    pub draw_text: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            background: "#016795".to_string(),
            highlight_color: "#ffd700".to_string(),
            highlight: None,
            bar_thickness: 0.5,
            bar_score_offset: 110.0,
            fonts: FontSizes::default(),
            title: String::new(),
            subtitle: String::new(),
            title_anchor: Anchor::new(0.0, 1.05),
            subtitle_anchor: Anchor::new(0.95, 1.02),
            legend_anchor: Anchor::new(-0.05, 0.0),
            margins: Margins::default(),
            resolution: Resolution::default(),
            top_tier: Resolution::TOP_TIER,
            sort: None,
            draw_text: true,
        }
    }
}

/// Bar thickness offered by default for a given number of series.
pub fn default_bar_thickness(series_count: usize) -> f64 {
    match series_count {
        0 | 1 => 0.5,
        2 => 0.4,
        3 => 0.2,
        _ => 0.1,
    }
}

/// Accepts `None`/`"none"` (any case) or an empty string as "no highlight".
pub fn parse_highlight(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
        .map(str::to_string)
}

impl StyleConfig {
    /// Defaults for `dataset` drawn from a preset document.
    pub fn from_presets(dataset: &Dataset, presets: &Presets) -> Result<Self> {
        let n = dataset.series_count();
        let series = dataset
            .score_columns()
            .iter()
            .enumerate()
            .map(|(i, col)| SeriesStyle::new(presets.colour(i), legend_default(col)))
            .collect();

        let resolutions = presets.parsed_resolutions()?;
        let resolution = resolutions.first().copied().unwrap_or_default();
        let top_tier = resolutions
            .iter()
            .copied()
            .max_by_key(Resolution::area)
            .unwrap_or(Resolution::TOP_TIER);

        let fonts = FontSizes {
            axis: default_axis_font_size(longest_label_len(dataset)),
            ..FontSizes::default()
        };

        Ok(Self {
            series,
            background: presets.colour(BACKGROUND_SLOT),
            highlight_color: presets.colour(HIGHLIGHT_SLOT),
            bar_thickness: default_bar_thickness(n),
            fonts,
            title: presets.title_presets.first().cloned().unwrap_or_default(),
            subtitle: presets.sub_title_presets.first().cloned().unwrap_or_default(),
            resolution,
            top_tier,
            ..Self::default()
        })
    }

    /// One series style per score column.
    pub fn check_series(&self, dataset: &Dataset) -> Result<()> {
        if self.series.len() != dataset.series_count() {
            return Err(ChartError::data(format!(
                "{} series styles given for {} score columns",
                self.series.len(),
                dataset.series_count()
            )));
        }
        Ok(())
    }
}

/// Index into `default_colours` used for the background.
pub const BACKGROUND_SLOT: usize = 4;
/// Index into `default_colours` used for the highlight.
pub const HIGHLIGHT_SLOT: usize = 5;

const FALLBACK_COLOURS: [&str; 6] = ["#f0991a", "#820000", "#32f01a", "#af1af0", "#016795", "#ffd700"];

/// Persisted preset document; a source of default [`StyleConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    /// Ordered `"WxH"` strings.
    pub resolutions: Vec<String>,
    /// Series colours first, then background (slot 4) and highlight (slot 5).
    #[serde(alias = "defaultColours")]
    pub default_colours: Vec<String>,
    #[serde(alias = "titlePresets")]
    pub title_presets: Vec<String>,
    #[serde(alias = "subTitlePresets")]
    pub sub_title_presets: Vec<String>,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            resolutions: vec!["3840x2160".into(), "1920x1080".into(), "1300x1300".into()],
            default_colours: FALLBACK_COLOURS.iter().map(|c| c.to_string()).collect(),
            title_presets: vec!["CPU Scores".into(), "GPU Scores".into()],
            sub_title_presets: vec![
                "Higher scores indicate higher performance".into(),
                "Lower scores indicate higher performance".into(),
            ],
        }
    }
}

impl Presets {
    pub fn parsed_resolutions(&self) -> Result<Vec<Resolution>> {
        self.resolutions.iter().map(|r| r.parse()).collect()
    }

    /// Colour in `slot`, falling back to the built-in palette (cycled) when the list is short.
    pub fn colour(&self, slot: usize) -> String {
        self.default_colours
            .get(slot)
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOURS[slot % FALLBACK_COLOURS.len()].to_string())
    }
}
