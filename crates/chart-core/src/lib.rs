// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod style;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::{Axis, ScaleKind, Tick};
pub use style::{Dash, Marker, SeriesStyle};
pub use theme::Theme;
pub use text::TextShaper;

/// Re-exported so callers can name colors without depending on skia-safe.
pub use skia_safe::Color;
