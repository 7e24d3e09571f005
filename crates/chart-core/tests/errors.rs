// File: crates/chart-core/tests/errors.rs
// Purpose: Failures surface as typed errors and never leave a file behind.

mod common;

use benchbars_core::{render_chart, ChartError, Dataset, Row, SeriesStyle};

fn entries(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn missing_score_is_data_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    let d = Dataset::new(vec!["score_a", "score_b"], false)
        .unwrap()
        .with_rows([Row::with_values("x", &[1.0, 2.0]), Row::new("y", vec![Some(3.0), None])])
        .unwrap();
    let style = common::quiet_style(&d);
    let err = render_chart(d, &style, &out).unwrap_err();
    assert!(matches!(err, ChartError::Data(_)), "{err}");
    assert!(!out.exists());
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn failed_render_keeps_previous_image() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"previous").unwrap();

    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.series[1].color = "#12345z".into();
    let err = render_chart(d, &style, &out).unwrap_err();
    assert!(matches!(err, ChartError::Format(_)), "{err}");
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn bad_background_or_highlight_color_is_format_error() {
    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.background = "blue".into();
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(render_chart(d.clone(), &style, dir.path().join("a.png")), Err(ChartError::Format(_))));

    let mut style = common::quiet_style(&d);
    style.highlight_color = "#fff".into();
    assert!(matches!(render_chart(d, &style, dir.path().join("b.png")), Err(ChartError::Format(_))));
}

#[test]
fn series_style_count_must_match_columns() {
    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.series.push(SeriesStyle::new("#ffffff", "extra"));
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(render_chart(d, &style, dir.path().join("c.png")), Err(ChartError::Data(_))));
}

#[test]
fn unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let d = common::gpu_dataset();
    let style = common::quiet_style(&d);
    let err = render_chart(d, &style, blocker.join("chart.png")).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }), "{err}");
}
