// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a small highlighted two-series chart without text.
// - UPDATE_SNAPSHOTS=1 (re)writes the snapshot file.
// - Otherwise compares decoded pixels against the snapshot when it exists,
//   and skips with a note when it does not.
// - Independently of the golden file, pins geometry and sampled colors that
//   follow from the inputs by hand calculation.

mod common;

use approx::assert_relative_eq;
use benchbars_core::{plan, BarChart, RgbaFrame, StyleConfig};

fn highlighted_style() -> (benchbars_core::Dataset, StyleConfig) {
    let d = common::gpu_dataset();
    let mut style = common::quiet_style(&d);
    style.highlight = Some("RX 7800 XT".into());
    (d, style)
}

fn render_bytes() -> Vec<u8> {
    let (d, style) = highlighted_style();
    let (_, png) = BarChart::new(d, style).render_to_png_bytes().expect("render");
    png
}

fn pixel(frame: &RgbaFrame, x: u32, y: u32) -> [u8; 4] {
    let i = y as usize * frame.stride + x as usize * 4;
    [frame.pixels[i], frame.pixels[i + 1], frame.pixels[i + 2], frame.pixels[i + 3]]
}

/// Color of a light -> dark ramp across `[left, right]` at pixel column `x`.
fn ramp(light: [f32; 3], dark: [f32; 3], left: f32, right: f32, x: u32) -> [f32; 3] {
    let t = ((x as f32 + 0.5) - left) / (right - left);
    [0, 1, 2].map(|c| light[c] + (dark[c] - light[c]) * t)
}

fn assert_close(got: [u8; 4], want: [f32; 3], at: (u32, u32)) {
    assert_eq!(got[3], 255, "alpha at {at:?}");
    for c in 0..3 {
        assert!((got[c] as f32 - want[c]).abs() <= 3.0, "pixel {at:?}: got {got:?}, want {want:?}");
    }
}

#[test]
fn pinned_geometry_and_colors() {
    let (d, style) = highlighted_style();
    let layout = plan(&d, &style).unwrap();

    // 480x320 with margins (0.1, 0.95, 0.11, 0.88).
    assert_relative_eq!(layout.plot.left, 48.0, epsilon = 1e-3);
    assert_relative_eq!(layout.plot.right, 456.0, epsilon = 1e-3);
    assert_relative_eq!(layout.plot.top, 38.4, epsilon = 1e-3);
    assert_relative_eq!(layout.plot.bottom, 284.8, epsilon = 1e-3);

    // Value axis 0..136.92 (130.4 padded 5%); category axis -0.9..2.4 at thickness 0.5.
    let rtx_avg = layout.bar_rect(0, 1).unwrap();
    assert_relative_eq!(rtx_avg.left, 48.0, epsilon = 1e-2);
    assert_relative_eq!(rtx_avg.right, 48.0 + 121.0 / 136.92 * 408.0, epsilon = 1e-2);
    assert_relative_eq!(rtx_avg.top, 217.6 - 0.25 * 246.4 / 3.3, epsilon = 1e-2);
    assert_relative_eq!(rtx_avg.bottom, 217.6 + 0.25 * 246.4 / 3.3, epsilon = 1e-2);

    let (_, frame) = BarChart::new(d, style).render_to_rgba8().unwrap();
    let background = [1.0, 103.0, 149.0];
    for at in [(10, 10), (470, 310), (440, 100)] {
        assert_close(pixel(&frame, at.0, at.1), background, at);
    }

    // Plain bar: #820000 ramps from x1.2 to x0.8.
    let x = ((rtx_avg.left + rtx_avg.right) / 2.0) as u32;
    let y = rtx_avg.center_y() as u32;
    let want = ramp([156.0, 0.0, 0.0], [104.0, 0.0, 0.0], rtx_avg.left, rtx_avg.right, x);
    assert_close(pixel(&frame, x, y), want, (x, y));

    // Highlighted row: #ffd700 ramps from (255, 255, 0) to (204, 172, 0) on both series.
    for series in 0..2 {
        let r = layout.bar_rect(1, series).unwrap();
        let x = ((r.left + r.right) / 2.0) as u32;
        let y = r.center_y() as u32;
        let want = ramp([255.0, 255.0, 0.0], [204.0, 172.0, 0.0], r.left, r.right, x);
        assert_close(pixel(&frame, x, y), want, (x, y));
    }
}

#[test]
fn golden_grouped_bars() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("grouped_bars.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
