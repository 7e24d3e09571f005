// File: crates/chart-core/tests/bars.rs
// Purpose: Value labels sit a fixed inset from each bar's far end.

mod common;

use approx::assert_relative_eq;
use benchbars_core::bars::value_label_anchor;
use benchbars_core::layout::BarGeom;
use benchbars_core::text::HAlign;
use benchbars_core::{plan, Dataset, Row};
use skia_safe::Rect;

#[test]
fn positive_bar_label_starts_inside_right_end() {
    let bar = BarGeom { row: 0, series: 0, value: 42.0, rect: Rect::from_ltrb(100.0, 10.0, 400.0, 30.0) };
    let (x, h) = value_label_anchor(&bar, 110.0);
    assert_relative_eq!(x, 290.0);
    assert_eq!(h, HAlign::Left);
}

#[test]
fn negative_bar_label_mirrors_from_left_end() {
    let bar = BarGeom { row: 0, series: 0, value: -7.5, rect: Rect::from_ltrb(50.0, 10.0, 200.0, 30.0) };
    let (x, h) = value_label_anchor(&bar, 20.0);
    assert_relative_eq!(x, 70.0);
    assert_eq!(h, HAlign::Right);
}

#[test]
fn zero_counts_as_positive() {
    let bar = BarGeom { row: 0, series: 0, value: 0.0, rect: Rect::from_ltrb(80.0, 0.0, 80.0, 10.0) };
    assert_eq!(value_label_anchor(&bar, 5.0), (75.0, HAlign::Left));
}

#[test]
fn planned_bars_anchor_on_their_far_end() {
    let d = Dataset::new(vec!["score_delta"], false)
        .unwrap()
        .with_rows([Row::with_values("gain", &[30.0]), Row::with_values("loss", &[-10.0])])
        .unwrap();
    let style = common::quiet_style(&d);
    let layout = plan(&d, &style).unwrap();
    let zero = layout.x_map.to_px(0.0);

    let gain = layout.bar(0, 0).unwrap();
    let (x, h) = value_label_anchor(gain, style.bar_score_offset);
    assert_relative_eq!(x, layout.x_map.to_px(30.0) - style.bar_score_offset, epsilon = 1e-3);
    assert_eq!(h, HAlign::Left);

    let loss = layout.bar(1, 0).unwrap();
    assert_relative_eq!(loss.rect.right, zero, epsilon = 1e-3);
    let (x, h) = value_label_anchor(loss, style.bar_score_offset);
    assert_relative_eq!(x, layout.x_map.to_px(-10.0) + style.bar_score_offset, epsilon = 1e-3);
    assert_eq!(h, HAlign::Right);
}
