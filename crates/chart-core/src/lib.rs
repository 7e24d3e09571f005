// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the gradient bar chart API and rendering entry points.

pub mod bars;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{render_chart, BarChart, RenderedChart, RgbaFrame};
pub use color::{adjust_brightness, build_all_gradients, build_gradient, hex_to_unit, Gradient, Palette, Rgb};
pub use dataset::{Dataset, Row, SortSpec};
pub use error::{ChartError, Result};
pub use layout::{plan, ChartLayout};
pub use style::{FontSizes, Presets, Resolution, SeriesStyle, StyleConfig};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Anchor, Margins};
