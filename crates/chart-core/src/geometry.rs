// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangle, data-to-pixel maps).

use skia_safe as skia;

use crate::types::{Anchor, Margins};

/// Plot area in canvas pixels (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Place the plot inside a `width` x `height` canvas using figure-fraction margins.
    pub fn from_margins(width: u32, height: u32, m: &Margins) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::from_ltrb(m.left * w, (1.0 - m.top) * h, m.right * w, (1.0 - m.bottom) * h)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Pixel position of an axes-fraction anchor.
    pub fn at(&self, a: Anchor) -> (f32, f32) {
        (self.left + a.x * self.width(), self.bottom - a.y * self.height())
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Affine map from a data interval onto a pixel interval; `px0` may exceed `px1` for flipped axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub d0: f64,
    pub d1: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearMap {
    pub fn new(d0: f64, d1: f64, px0: f32, px1: f32) -> Self {
        // Degenerate data spans collapse to a unit span.
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, px0, px1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        let t = if span.is_finite() {
            (v - self.d0) / span
        } else {
            (v / 2.0 - self.d0 / 2.0) / (self.d1 / 2.0 - self.d0 / 2.0)
        };
        self.px0 + (t as f32) * (self.px1 - self.px0)
    }

    /// Pixels per data unit (signed).
    pub fn scale(&self) -> f32 {
        (self.px1 - self.px0) / (self.d1 - self.d0) as f32
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
