// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.

#![allow(dead_code)]

use benchbars_core::{Dataset, Resolution, Row, SeriesStyle, StyleConfig};

/// Three GPUs, two score series.
pub fn gpu_dataset() -> Dataset {
    Dataset::new(vec!["score_min_fps", "score_avg_fps"], false)
        .and_then(|d| {
            d.with_rows([
                Row::with_values("RTX 4070", &[88.5, 121.0]),
                Row::with_values("RX 7800 XT", &[92.1, 130.4]),
                Row::with_values("Arc A770", &[61.0, 84.2]),
            ])
        })
        .expect("valid dataset")
}

/// Small canvas, no text, so pixels do not depend on installed fonts.
pub fn quiet_style(dataset: &Dataset) -> StyleConfig {
    let mut style = StyleConfig::default();
    style.series = dataset
        .score_columns()
        .iter()
        .zip(["#f0991a", "#820000", "#32f01a", "#af1af0"])
        .map(|(col, color)| SeriesStyle::new(color, col.trim_start_matches("score_")))
        .collect();
    style.resolution = Resolution::new(480, 320);
    style.draw_text = false;
    style
}

pub fn differing_pixels(a: &[u8], b: &[u8], width: u32) -> Vec<(u32, u32)> {
    assert_eq!(a.len(), b.len());
    a.chunks_exact(4)
        .zip(b.chunks_exact(4))
        .enumerate()
        .filter(|(_, (pa, pb))| pa != pb)
        .map(|(i, _)| ((i as u32) % width, (i as u32) / width))
        .collect()
}

pub fn inside(r: &skia_safe::Rect, x: f32, y: f32) -> bool {
    x >= r.left && x <= r.right && y >= r.top && y <= r.bottom
}
