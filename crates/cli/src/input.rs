// File: crates/cli/src/input.rs
// Summary: Load a heading/subheading/score_* CSV into a Dataset.

use std::path::Path;

use anyhow::{bail, Context, Result};
use benchbars_core::dataset::SCORE_PREFIX;
use benchbars_core::{Dataset, Row};
use tracing::debug;

/// Read `path` into a [`Dataset`]. Columns other than `heading`, `subheading`
/// and `score_*` are ignored; blank score cells become absent values.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_dataset(rdr).with_context(|| format!("reading {}", path.display()))
}

pub fn read_dataset<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Dataset> {
    let headers = rdr.headers()?.clone();
    debug!(headers = ?headers.iter().collect::<Vec<_>>(), "csv headers");

    let Some(i_heading) = headers.iter().position(|h| h == "heading") else {
        bail!("missing 'heading' column");
    };
    let i_sub = headers.iter().position(|h| h == "subheading");
    let score_idx: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.starts_with(SCORE_PREFIX))
        .map(|(i, h)| (i, h.to_string()))
        .collect();

    let columns: Vec<&str> = score_idx.iter().map(|(_, h)| h.as_str()).collect();
    let mut dataset = Dataset::new(columns, i_sub.is_some())?;

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let heading = rec.get(i_heading).unwrap_or_default();
        let mut scores = Vec::with_capacity(score_idx.len());
        for (i, name) in &score_idx {
            let cell = rec.get(*i).unwrap_or_default();
            if cell.is_empty() {
                scores.push(None);
            } else {
                let v: f64 = cell
                    .parse()
                    .with_context(|| format!("row {line}: '{cell}' in {name} is not a number"))?;
                scores.push(Some(v));
            }
        }
        let mut row = Row::new(heading, scores);
        if let Some(i) = i_sub {
            let sub = rec.get(i).unwrap_or_default();
            if !sub.is_empty() {
                row = row.subheading(sub);
            }
        }
        dataset.push(row)?;
    }
    Ok(dataset)
}
