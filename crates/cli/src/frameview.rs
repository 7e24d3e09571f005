// File: crates/cli/src/frameview.rs
// Summary: Aggregate FrameView capture CSVs into per-resolution score rows.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use benchbars_core::{Dataset, Row, SortSpec};
use tracing::{debug, info};

pub const COL_RESOLUTION: &str = "Resolution";
pub const COL_LOW_FPS: &str = "1% FPS";
pub const COL_AVG_FPS: &str = "Avg FPS";
pub const COL_POWER: &str = "PCAT Power (Watts)";
pub const COL_GPU: &str = "GPU0";

/// Which scores end up on the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    /// `score_min_fps` and `score_avg_fps`.
    Fps,
    /// `score_pwr_agv`.
    Power,
}

impl ChartKind {
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ChartKind::Fps => &["score_min_fps", "score_avg_fps"],
            ChartKind::Power => &["score_pwr_agv"],
        }
    }

    pub fn default_sort(self, ascending: bool) -> SortSpec {
        match self {
            ChartKind::Fps => SortSpec::new("score_avg_fps", ascending),
            ChartKind::Power => SortSpec::new("score_pwr_agv", ascending),
        }
    }

    pub fn default_output(self) -> PathBuf {
        match self {
            ChartKind::Fps => PathBuf::from("FPS Chart.png"),
            ChartKind::Power => PathBuf::from("PWR Chart.png"),
        }
    }
}

/// One capture's averages at one resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub heading: String,
    pub resolution: String,
    pub min_fps: Option<f64>,
    pub avg_fps: Option<f64>,
    pub power: Option<f64>,
    pub fps_per_watt: Option<f64>,
}

impl Summary {
    fn score(&self, column: &str) -> Option<f64> {
        match column {
            "score_min_fps" => self.min_fps,
            "score_avg_fps" => self.avg_fps,
            "score_pwr_agv" => self.power,
            "score_avg_fps_watt" => self.fps_per_watt,
            _ => None,
        }
    }
}

/// `FILE:ROW`: drop data row `ROW` (0-based) of the capture named `FILE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclusion {
    pub file: String,
    pub row: usize,
}

impl std::str::FromStr for Exclusion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (file, row) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("exclusion '{s}' is not FILE:ROW"))?;
        let row = row.trim().parse().with_context(|| format!("bad row index in '{s}'"))?;
        if file.trim().is_empty() {
            bail!("exclusion '{s}' names no file");
        }
        Ok(Self { file: file.trim().to_string(), row })
    }
}

impl Exclusion {
    /// Matches either the path as given or its final component.
    fn applies_to(&self, path: &Path) -> bool {
        Path::new(&self.file) == path || path.file_name().is_some_and(|n| n.to_string_lossy() == self.file)
    }
}

#[derive(Default)]
struct Mean {
    sum: f64,
    n: usize,
}

impl Mean {
    fn add(&mut self, v: Option<f64>) {
        if let Some(v) = v.filter(|v| v.is_finite()) {
            self.sum += v;
            self.n += 1;
        }
    }

    fn get(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

#[derive(Default)]
struct Group {
    low: Mean,
    avg: Mean,
    power: Mean,
}

/// Round half to even at `places` decimals.
pub fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round_ties_even() / scale
}

pub fn summarize_file(path: &Path, exclusions: &[Exclusion]) -> Result<Vec<Summary>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let skip: Vec<usize> = exclusions.iter().filter(|e| e.applies_to(path)).map(|e| e.row).collect();
    summarize(rdr, &skip).with_context(|| format!("aggregating {}", path.display()))
}

/// Per-resolution means of one capture, resolutions in lexical order.
pub fn summarize<R: std::io::Read>(mut rdr: csv::Reader<R>, skip_rows: &[usize]) -> Result<Vec<Summary>> {
    let headers = rdr.headers()?.clone();
    let col = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("missing '{name}' column"))
    };
    let (i_res, i_low, i_avg, i_pwr, i_gpu) =
        (col(COL_RESOLUTION)?, col(COL_LOW_FPS)?, col(COL_AVG_FPS)?, col(COL_POWER)?, col(COL_GPU)?);

    let mut groups: BTreeMap<String, Group> = BTreeMap::new();
    let mut heading: Option<String> = None;
    let mut kept = 0usize;
    for (index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if skip_rows.contains(&index) {
            debug!(index, "row excluded");
            continue;
        }
        kept += 1;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        if heading.is_none() {
            heading = rec.get(i_gpu).filter(|s| !s.is_empty()).map(str::to_string);
        }
        let Some(res) = rec.get(i_res).filter(|s| !s.is_empty()) else {
            continue;
        };
        let g = groups.entry(res.to_string()).or_default();
        g.low.add(num(i_low));
        g.avg.add(num(i_avg));
        g.power.add(num(i_pwr));
    }
    if kept == 0 {
        bail!("no rows left to aggregate");
    }
    let heading = heading.ok_or_else(|| anyhow!("'{COL_GPU}' is empty in every row"))?;

    Ok(groups
        .into_iter()
        .map(|(resolution, g)| {
            let min_fps = g.low.get().map(|v| round_to(v, 1));
            let avg_fps = g.avg.get().map(|v| round_to(v, 1));
            let power = g.power.get().map(|v| round_to(v, 1));
            let fps_per_watt = match (avg_fps, power) {
                (Some(a), Some(p)) if p != 0.0 => Some(round_to(a / p, 2)),
                _ => None,
            };
            Summary { heading: heading.clone(), resolution, min_fps, avg_fps, power, fps_per_watt }
        })
        .collect())
}

/// Resolution charted when none is requested: the first one seen.
pub fn default_resolution(summaries: &[Summary]) -> Option<&str> {
    summaries.first().map(|s| s.resolution.as_str())
}

/// Rows for `resolution` with the columns `kind` charts.
pub fn to_dataset(summaries: &[Summary], resolution: &str, kind: ChartKind) -> Result<Dataset> {
    let columns = kind.columns();
    let mut dataset = Dataset::new(columns.to_vec(), false)?;
    for s in summaries.iter().filter(|s| s.resolution == resolution) {
        dataset.push(Row::new(s.heading.clone(), columns.iter().map(|c| s.score(c)).collect()))?;
    }
    if dataset.is_empty() {
        bail!("no capture has data for resolution '{resolution}'");
    }
    info!(resolution, rows = dataset.len(), kind = ?kind, "frameview dataset ready");
    Ok(dataset)
}
