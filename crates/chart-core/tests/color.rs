// File: crates/chart-core/tests/color.rs
// Purpose: Hex parsing, brightness clamping and gradient construction.

use approx::assert_relative_eq;
use benchbars_core::color::{DARK_FACTOR, LIGHT_FACTOR};
use benchbars_core::{adjust_brightness, build_all_gradients, build_gradient, hex_to_unit, ChartError, Rgb};

#[test]
fn hex_channels_are_unit_range() {
    for hex in ["#000000", "#ffffff", "#F0991A", "820000", "#016795", " #32f01a "] {
        let c = hex_to_unit(hex).expect("valid hex");
        for v in c.channels() {
            assert!((0.0..=1.0).contains(&v), "{hex} -> {v}");
        }
    }
    let c = hex_to_unit("#ff8000").unwrap();
    assert_relative_eq!(c.r, 1.0);
    assert_relative_eq!(c.g, 128.0 / 255.0);
    assert_relative_eq!(c.b, 0.0);
}

#[test]
fn malformed_hex_is_format_error() {
    for bad in ["", "#fff", "#12345", "#1234567", "#gg0000", "#+f0000", "#12 456", "#ééé"] {
        match hex_to_unit(bad) {
            Err(ChartError::Format(_)) => {}
            other => panic!("{bad:?} should be a format error, got {other:?}"),
        }
    }
}

#[test]
fn brightness_never_leaves_unit_range() {
    let base = hex_to_unit("#f0991a").unwrap();
    for factor in [-3.0, 0.0, 0.5, 0.8, 1.0, 1.2, 2.0, 50.0, f32::INFINITY] {
        let c = adjust_brightness(base, factor);
        for v in c.channels() {
            assert!((0.0..=1.0).contains(&v), "factor {factor} -> {v}");
        }
    }
}

#[test]
fn gradient_stops_come_from_the_same_base() {
    let base = Rgb::new(0.5, 0.25, 0.9);
    let g = build_gradient(base);
    assert_eq!(g.base, base);
    assert_relative_eq!(g.light.r, 0.5 * LIGHT_FACTOR);
    assert_relative_eq!(g.light.g, 0.25 * LIGHT_FACTOR);
    // 0.9 * 1.2 clamps.
    assert_relative_eq!(g.light.b, 1.0);
    assert_relative_eq!(g.dark.r, 0.5 * DARK_FACTOR);
    assert_relative_eq!(g.dark.b, 0.9 * DARK_FACTOR);
}

#[test]
fn one_gradient_per_series_plus_highlight_last() {
    let series: Vec<Rgb> = ["#f0991a", "#820000", "#32f01a"].iter().map(|h| hex_to_unit(h).unwrap()).collect();
    let highlight = hex_to_unit("#ffd700").unwrap();
    let all = build_all_gradients(&series, highlight);
    assert_eq!(all.len(), series.len() + 1);
    for (g, s) in all.iter().zip(&series) {
        assert_eq!(g.base, *s);
    }
    assert_eq!(all.last().unwrap().base, highlight);
}

#[test]
fn contrast_picks_white_on_dark_backgrounds() {
    assert_eq!(hex_to_unit("#016795").unwrap().contrasting(), Rgb::WHITE);
    assert_eq!(hex_to_unit("#f5f5f5").unwrap().contrasting(), Rgb::BLACK);
}
