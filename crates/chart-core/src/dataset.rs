// File: crates/chart-core/src/dataset.rs
// Summary: Row/column model handed over by the data preparer, plus sorting and highlight lookup.

use std::cmp::Ordering;

use crate::error::{ChartError, Result};

/// Prefix every value column must carry.
pub const SCORE_PREFIX: &str = "score_";

/// One tested item.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub heading: String,
    pub subheading: Option<String>,
    /// Aligned with [`Dataset::score_columns`]; `None` marks an absent cell.
    pub scores: Vec<Option<f64>>,
}

impl Row {
    pub fn new(heading: impl Into<String>, scores: Vec<Option<f64>>) -> Self {
        Self { heading: heading.into(), subheading: None, scores }
    }

    /// Convenience constructor for fully populated rows.
    pub fn with_values(heading: impl Into<String>, values: &[f64]) -> Self {
        Self::new(heading, values.iter().copied().map(Some).collect())
    }

    pub fn subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }
}

/// Column the rows are ordered by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, ascending: bool) -> Self {
        Self { column: column.into(), ascending }
    }

    /// `None`/`"none"` (any case) or an empty string means unsorted.
    pub fn parse(column: &str, ascending: bool) -> Option<Self> {
        let c = column.trim();
        if c.is_empty() || c.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(Self::new(c, ascending))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    score_columns: Vec<String>,
    has_subheading: bool,
    rows: Vec<Row>,
}

enum SortKey {
    Heading,
    Subheading,
    Score(usize),
}

impl Dataset {
    /// `score_columns` order defines series order. `has_subheading` records whether the
    /// subheading field exists for the whole dataset.
    pub fn new<S: Into<String>>(score_columns: Vec<S>, has_subheading: bool) -> Result<Self> {
        let score_columns: Vec<String> = score_columns.into_iter().map(Into::into).collect();
        if score_columns.is_empty() {
            return Err(ChartError::data("dataset needs at least one score_ column"));
        }
        for (i, name) in score_columns.iter().enumerate() {
            if !name.starts_with(SCORE_PREFIX) || name.len() == SCORE_PREFIX.len() {
                return Err(ChartError::data(format!("column '{name}' is not a score_ column")));
            }
            if score_columns[..i].contains(name) {
                return Err(ChartError::data(format!("duplicate column '{name}'")));
            }
        }
        Ok(Self { score_columns, has_subheading, rows: Vec::new() })
    }

    pub fn push(&mut self, row: Row) -> Result<()> {
        if row.scores.len() != self.score_columns.len() {
            return Err(ChartError::data(format!(
                "row '{}' has {} score values, expected {}",
                row.heading,
                row.scores.len(),
                self.score_columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Result<Self> {
        for row in rows {
            self.push(row)?;
        }
        Ok(self)
    }

    pub fn rows(&self) -> &[Row] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn score_columns(&self) -> &[String] { &self.score_columns }
    pub fn series_count(&self) -> usize { self.score_columns.len() }
    pub fn has_subheading(&self) -> bool { self.has_subheading }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.score_columns.iter().position(|c| c == name)
    }

    /// Row-major values; fails on the first absent or non-finite cell.
    pub fn score_matrix(&self) -> Result<Vec<Vec<f64>>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.scores
                    .iter()
                    .zip(&self.score_columns)
                    .map(|(v, col)| match v {
                        Some(x) if x.is_finite() => Ok(*x),
                        Some(x) => Err(ChartError::data(format!(
                            "row {r} ('{}') has non-finite {col} = {x}",
                            row.heading
                        ))),
                        None => Err(ChartError::data(format!(
                            "row {r} ('{}') is missing {col}",
                            row.heading
                        ))),
                    })
                    .collect()
            })
            .collect()
    }

    /// Subheadings are all-or-nothing across the dataset.
    pub fn check_subheadings(&self) -> Result<()> {
        for (r, row) in self.rows.iter().enumerate() {
            match (self.has_subheading, &row.subheading) {
                (true, None) => {
                    return Err(ChartError::data(format!(
                        "row {r} ('{}') is missing its subheading",
                        row.heading
                    )))
                }
                (false, Some(_)) => {
                    return Err(ChartError::data(format!(
                        "row {r} ('{}') has a subheading but the dataset has no subheading field",
                        row.heading
                    )))
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Stable sort on `heading`, `subheading` or any score column.
    pub fn sorted(&self, spec: &SortSpec) -> Result<Dataset> {
        let key = match spec.column.as_str() {
            "heading" => SortKey::Heading,
            "subheading" if self.has_subheading => SortKey::Subheading,
            other => SortKey::Score(self.column_index(other).ok_or_else(|| {
                ChartError::data(format!("cannot sort by unknown column '{other}'"))
            })?),
        };
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            let ord = match &key {
                SortKey::Heading => a.heading.cmp(&b.heading),
                SortKey::Subheading => a.subheading.cmp(&b.subheading),
                SortKey::Score(i) => cmp_scores(a.scores[*i], b.scores[*i]),
            };
            if spec.ascending { ord } else { ord.reverse() }
        });
        Ok(Dataset { score_columns: self.score_columns.clone(), has_subheading: self.has_subheading, rows })
    }

    /// First row whose heading equals `target` exactly.
    pub fn find_heading(&self, target: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.heading == target)
    }
}

// Absent cells rank above every value; rendering rejects them anyway.
fn cmp_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Default legend text for a column: `score_avg_fps` -> `avg`.
pub fn legend_default(column: &str) -> String {
    column.split('_').nth(1).filter(|s| !s.is_empty()).unwrap_or(column).to_string()
}
