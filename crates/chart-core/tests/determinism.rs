// File: crates/chart-core/tests/determinism.rs
// Purpose: Rendering the same input twice yields identical bytes.

mod common;

use benchbars_core::{BarChart, SortSpec};

#[test]
fn repeated_renders_are_bit_identical() {
    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.draw_text = true;
    style.title = "GPU Scores".into();
    style.subtitle = "Higher scores indicate higher performance".into();
    style.highlight = Some("Arc A770".into());
    style.sort = Some(SortSpec::new("score_min_fps", true));

    let chart = BarChart::new(d, style);
    let (order_a, first) = chart.render_to_png_bytes().unwrap();
    let (order_b, second) = chart.render_to_png_bytes().unwrap();
    assert_eq!(order_a, order_b);
    assert_eq!(first, second);
}
