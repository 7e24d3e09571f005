// File: crates/chart-core/src/color.rs
// Summary: Hex parsing, brightness adjustment and two-stop bar gradients.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Light stop multiplier applied to a series base color.
pub const LIGHT_FACTOR: f32 = 1.2;
/// Dark stop multiplier applied to the same base color.
pub const DARK_FACTOR: f32 = 0.8;

/// Linear RGB color with every channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r: unit(r), g: unit(g), b: unit(b) }
    }

    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque 8-bit Skia color, rounding each channel to nearest.
    pub fn to_color(&self) -> skia::Color {
        skia::Color::from_argb(255, to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Relative luminance (Rec. 709 weights on linear channels).
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// White or black, whichever reads better on top of `self`.
    pub fn contrasting(&self) -> Rgb {
        if self.luminance() > 0.5 { Rgb::BLACK } else { Rgb::WHITE }
    }
}

#[inline]
fn unit(c: f32) -> f32 {
    if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (unit(c) * 255.0).round() as u8
}

/// Parse `#rrggbb` (leading `#` optional) into unit channels.
pub fn hex_to_unit(hex: &str) -> Result<Rgb> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.chars().count() != 6 {
        return Err(ChartError::format(format!(
            "color '{hex}' must have exactly six hex digits"
        )));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ChartError::format(format!("color '{hex}' has non-hex digit '{bad}'")));
    }
    let mut out = [0f32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        let v = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|e| ChartError::format(format!("color '{hex}': {e}")))?;
        *slot = v as f32 / 255.0;
    }
    Ok(Rgb { r: out[0], g: out[1], b: out[2] })
}

/// Scale every channel by `factor`, clamping the result to `[0, 1]`.
pub fn adjust_brightness(color: Rgb, factor: f32) -> Rgb {
    Rgb::new(color.r * factor, color.g * factor, color.b * factor)
}

/// Two-stop ramp derived from one base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub base: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
}

impl Gradient {
    /// Linear shader running light -> dark from the left edge of `rect` to its right edge.
    pub fn shader(&self, rect: skia::Rect) -> Option<skia::Shader> {
        let colors = [self.light.to_color(), self.dark.to_color()];
        skia::Shader::linear_gradient(
            ((rect.left, rect.top), (rect.right.max(rect.left + 1.0), rect.top)),
            colors.as_ref(),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        )
    }
}

/// Both stops come from the same base; the dark stop is not derived from the light one.
pub fn build_gradient(base: Rgb) -> Gradient {
    Gradient {
        base,
        light: adjust_brightness(base, LIGHT_FACTOR),
        dark: adjust_brightness(base, DARK_FACTOR),
    }
}

/// One gradient per series in column order, with the highlight gradient appended last.
pub fn build_all_gradients(series: &[Rgb], highlight: Rgb) -> Vec<Gradient> {
    series
        .iter()
        .copied()
        .chain(std::iter::once(highlight))
        .map(build_gradient)
        .collect()
}

/// Every color a render needs, parsed once up front.
#[derive(Clone, Debug)]
pub struct Palette {
    pub series: Vec<Rgb>,
    pub background: Rgb,
    pub highlight: Rgb,
    pub gradients: Vec<Gradient>,
}

impl Palette {
    pub fn parse<S: AsRef<str>>(series: &[S], background: &str, highlight: &str) -> Result<Self> {
        let series = series
            .iter()
            .map(|hex| hex_to_unit(hex.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let background = hex_to_unit(background)?;
        let highlight = hex_to_unit(highlight)?;
        let gradients = build_all_gradients(&series, highlight);
        Ok(Self { series, background, highlight, gradients })
    }

    pub fn series_gradient(&self, index: usize) -> &Gradient {
        &self.gradients[index]
    }

    pub fn highlight_gradient(&self) -> &Gradient {
        &self.gradients[self.gradients.len() - 1]
    }
}
