// File: crates/chart-core/src/grid.rs
// Summary: Value-axis tick layout helpers.

/// Roughly how many value ticks a plot should carry.
pub const TARGET_TICKS: usize = 6;

/// Tick step from the {1, 2, 2.5, 5} x 10^k family covering `span` in about `target` steps.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * mag;
    // Subnormal spans underflow `mag` to zero.
    if step.is_finite() && step > 0.0 { step } else { 1.0 }
}

/// Multiples of the nice step inside `[start, end]`, never more than `4 * target` of them.
pub fn nice_ticks(start: f64, end: f64, target: usize) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || end < start {
        return Vec::new();
    }
    let span = end - start;
    let step = if span.is_finite() {
        nice_step(span, target)
    } else {
        // Span overflows f64; step over the half range instead.
        2.0 * nice_step(end / 2.0 - start / 2.0, target)
    };
    let first = (start / step).ceil();
    let last = (end / step + 1e-9).floor();
    if !(first <= last) {
        return Vec::new();
    }
    let count = ((last - first) as usize).saturating_add(1).min(target.max(1) * 4);
    (0..count).map(|k| (first + k as f64) * step).collect()
}

/// Shortest decimal form with at most six significant digits and no trailing zeros,
/// e.g. `20`, `2.5`, `0.125`, `1e+07`.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return v.to_string();
    }
    let exp = v.abs().log10().floor() as i32;
    if !(-5..6).contains(&exp) {
        let s = format!("{:.5e}", v);
        let (mantissa, e) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let e: i32 = e.parse().unwrap_or(0);
        return format!("{}e{}{:02}", trim_zeros(mantissa), if e < 0 { '-' } else { '+' }, e.abs());
    }
    let decimals = (5 - exp).max(0) as usize;
    trim_zeros(&format!("{:.*}", decimals, v)).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
