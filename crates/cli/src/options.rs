// File: crates/cli/src/options.rs
// Summary: Style flags shared by the rendering subcommands and their resolution into a StyleConfig.

use anyhow::{bail, Context, Result};
use benchbars_core::style::parse_highlight;
use benchbars_core::{Anchor, Dataset, Margins, Presets, Resolution, SortSpec, StyleConfig};
use clap::{ArgAction, Args};

#[derive(Args, Debug, Default, Clone)]
pub struct StyleArgs {
    /// Chart title (overrides --title-preset)
    #[arg(long)]
    pub title: Option<String>,

    /// Index into the configured title presets
    #[arg(long)]
    pub title_preset: Option<usize>,

    /// Sub text shown under the title (overrides --subtitle-preset)
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Index into the configured sub title presets
    #[arg(long)]
    pub subtitle_preset: Option<usize>,

    /// Canvas size as WIDTHxHEIGHT (defaults to the first configured resolution)
    #[arg(long)]
    pub size: Option<Resolution>,

    /// Column to sort rows by (`heading`, `subheading`, a score column or `none`)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long, action = ArgAction::SetTrue)]
    pub ascending: bool,

    /// Heading of the row to highlight
    #[arg(long)]
    pub highlight: Option<String>,

    /// Series colour, repeat once per score column in order
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Series legend text, repeat once per score column in order
    #[arg(long = "legend")]
    pub legends: Vec<String>,

    #[arg(long)]
    pub background: Option<String>,

    #[arg(long)]
    pub highlight_color: Option<String>,

    /// Bar thickness as a fraction of a row slot
    #[arg(long)]
    pub thickness: Option<f64>,

    /// Inset of value labels from the bar end, in pixels
    #[arg(long)]
    pub score_offset: Option<f32>,

    #[arg(long)]
    pub title_size: Option<f32>,
    #[arg(long)]
    pub subtitle_size: Option<f32>,
    /// Row label size (defaults from the longest label)
    #[arg(long)]
    pub axis_size: Option<f32>,
    #[arg(long)]
    pub x_axis_size: Option<f32>,
    #[arg(long)]
    pub legend_size: Option<f32>,
    #[arg(long)]
    pub bar_value_size: Option<f32>,

    /// Title anchor as X,Y in plot fractions
    #[arg(long)]
    pub title_pos: Option<String>,

    /// Sub text anchor as X,Y in plot fractions
    #[arg(long)]
    pub subtitle_pos: Option<String>,

    /// Legend lower-right corner as X,Y in plot fractions
    #[arg(long)]
    pub legend_pos: Option<String>,

    /// Plot edges as LEFT,RIGHT,BOTTOM,TOP figure fractions
    #[arg(long)]
    pub margins: Option<String>,

    /// Skip every text element
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_text: bool,
}

fn floats(value: &str, want: usize, what: &str) -> Result<Vec<f32>> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("{what} '{value}' must be numbers separated by commas"))?;
    if parts.len() != want {
        bail!("{what} '{value}' needs {want} values, got {}", parts.len());
    }
    Ok(parts)
}

pub fn parse_anchor(value: &str) -> Result<Anchor> {
    let v = floats(value, 2, "anchor")?;
    Ok(Anchor::new(v[0], v[1]))
}

pub fn parse_margins(value: &str) -> Result<Margins> {
    let v = floats(value, 4, "margins")?;
    let m = Margins::new(v[0], v[1], v[2], v[3]);
    if m.left >= m.right || m.bottom >= m.top {
        bail!("margins '{value}' must satisfy LEFT < RIGHT and BOTTOM < TOP");
    }
    Ok(m)
}

fn preset(list: &[String], index: Option<usize>, what: &str) -> Result<Option<String>> {
    match index {
        None => Ok(None),
        Some(i) => match list.get(i) {
            Some(v) => Ok(Some(v.clone())),
            None => bail!("{what} preset {i} does not exist ({} configured)", list.len()),
        },
    }
}

impl StyleArgs {
    /// Preset defaults for `dataset`, then every flag that was given on top.
    pub fn resolve(&self, dataset: &Dataset, presets: &Presets, default_sort: Option<SortSpec>) -> Result<StyleConfig> {
        let mut style = StyleConfig::from_presets(dataset, presets)?;

        if let Some(t) = self.title.clone().or(preset(&presets.title_presets, self.title_preset, "title")?) {
            style.title = t;
        }
        if let Some(t) = self.subtitle.clone().or(preset(&presets.sub_title_presets, self.subtitle_preset, "sub title")?) {
            style.subtitle = t;
        }
        if let Some(size) = self.size {
            style.resolution = size;
        }

        style.sort = match &self.sort {
            Some(column) => SortSpec::parse(column, self.ascending),
            None => default_sort,
        };
        style.highlight = parse_highlight(self.highlight.as_deref());

        let n = style.series.len();
        if self.colors.len() > n || self.legends.len() > n {
            bail!(
                "{} colours and {} legends given for {n} score columns",
                self.colors.len(),
                self.legends.len()
            );
        }
        for (series, color) in style.series.iter_mut().zip(&self.colors) {
            series.color = color.clone();
        }
        for (series, legend) in style.series.iter_mut().zip(&self.legends) {
            series.legend = legend.clone();
        }
        if let Some(bg) = &self.background {
            style.background = bg.clone();
        }
        if let Some(hc) = &self.highlight_color {
            style.highlight_color = hc.clone();
        }

        if let Some(t) = self.thickness {
            if t.is_nan() || t <= 0.0 {
                bail!("thickness must be positive, got {t}");
            }
            style.bar_thickness = t;
        }
        if let Some(o) = self.score_offset {
            style.bar_score_offset = o;
        }

        let fonts = &mut style.fonts;
        for (slot, value) in [
            (&mut fonts.title, self.title_size),
            (&mut fonts.subtitle, self.subtitle_size),
            (&mut fonts.axis, self.axis_size),
            (&mut fonts.x_axis, self.x_axis_size),
            (&mut fonts.legend, self.legend_size),
            (&mut fonts.bar_value, self.bar_value_size),
        ] {
            if let Some(v) = value {
                *slot = v;
            }
        }

        if let Some(p) = &self.title_pos {
            style.title_anchor = parse_anchor(p)?;
        }
        if let Some(p) = &self.subtitle_pos {
            style.subtitle_anchor = parse_anchor(p)?;
        }
        if let Some(p) = &self.legend_pos {
            style.legend_anchor = parse_anchor(p)?;
        }
        if let Some(m) = &self.margins {
            style.margins = parse_margins(m)?;
        }
        style.draw_text = !self.no_text;
        Ok(style)
    }
}
