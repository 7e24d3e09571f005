// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end renders writing PNGs, with and without text.

mod common;

use benchbars_core::{render_chart, BarChart, Dataset, Resolution, Row, SortSpec, StyleConfig};

#[test]
fn render_smoke_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/out/chart.png");

    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.draw_text = true;
    style.title = "GPU Scores".into();
    style.subtitle = "Higher scores indicate higher performance".into();
    style.highlight = Some("RTX 4070".into());
    style.sort = Some(SortSpec::new("score_avg_fps", false));

    let rendered = render_chart(d, &style, &out).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert_eq!(bytes, rendered.png);
    assert_eq!(rendered.path, out);

    let names: Vec<&str> = rendered.dataset.rows().iter().map(|r| r.heading.as_str()).collect();
    assert_eq!(names, ["RX 7800 XT", "RTX 4070", "Arc A770"]);

    let img = image::load_from_memory(&bytes).expect("decodable png");
    assert_eq!((img.width(), img.height()), (480, 320));
}

#[test]
fn render_rgba8_buffer() {
    let d = common::gpu_dataset();
    let style = common::quiet_style(&d);
    let (_, frame) = BarChart::new(d, style).render_to_rgba8().expect("rgba render");
    assert_eq!(frame.width as usize * frame.height as usize * 4, frame.pixels.len());
    assert_eq!(frame.stride, frame.width as usize * 4);

    // Top-left corner is plain background (#016795).
    assert_eq!(&frame.pixels[..4], &[0x01, 0x67, 0x95, 255]);
}

#[test]
fn subheadings_and_top_tier_render() {
    let d = Dataset::new(vec!["score_x"], true)
        .unwrap()
        .with_rows([
            Row::with_values("Ryzen 7 7800X3D", &[1820.0]).subheading("8 cores"),
            Row::with_values("Core i7-14700K", &[1655.5]).subheading("20 cores"),
        ])
        .unwrap();
    let mut style = StyleConfig { draw_text: true, ..common::quiet_style(&d) };
    style.resolution = Resolution::TOP_TIER;
    style.title = "CPU Scores".into();
    let (order, png) = BarChart::new(d.clone(), style).render_to_png_bytes().expect("render");
    assert_eq!(order, d);
    assert!(png.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"stale").unwrap();
    let d = common::gpu_dataset();
    let style = common::quiet_style(&d);
    render_chart(d, &style, &out).unwrap();
    assert!(std::fs::read(&out).unwrap().starts_with(&[137, 80, 78, 71]));
    // Only the chart remains; no temporary files are left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
