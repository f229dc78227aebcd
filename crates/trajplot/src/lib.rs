//! Categorized trajectory plots rasterized to PNG.
//!
//! Pipeline
//! - `normalize`: data space → unit drawing space (one uniform scale, y flipped).
//! - `canvas`: supersampled pixel surface with a device transform.
//! - `render`: margin/draw-scale transform, one stroked polyline, colored markers.
//!
//! `plot` runs the whole sequence and returns the canvas; nothing is produced
//! when any stage fails.

use std::fmt;

pub mod canvas;
pub mod normalize;
pub mod render;
pub mod sample;
pub mod style;
pub mod transform;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canvas::{Canvas, CanvasCfg, CanvasError};
pub use normalize::{normalize, Bounds2, Normalization, NormalizeError, Normalized};
pub use render::{render, RenderError};
pub use style::{Style, StyleError};
pub use types::{Category, Point, Rgb};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasCfg};
    pub use crate::normalize::{normalize, Normalized};
    pub use crate::render::render;
    pub use crate::style::Style;
    pub use crate::types::{Category, Point, Rgb};
    pub use crate::{plot, PlotError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Failure of one pipeline stage.
#[derive(Debug)]
pub enum PlotError {
    Style(StyleError),
    Normalize(NormalizeError),
    Canvas(CanvasError),
    Render(RenderError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Style(e) => write!(f, "invalid style: {e}"),
            PlotError::Normalize(e) => write!(f, "{e}"),
            PlotError::Canvas(e) => write!(f, "canvas: {e}"),
            PlotError::Render(e) => write!(f, "render: {e}"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Style(e) => Some(e),
            PlotError::Normalize(e) => Some(e),
            PlotError::Canvas(e) => Some(e),
            PlotError::Render(e) => Some(e),
        }
    }
}

impl From<StyleError> for PlotError {
    fn from(e: StyleError) -> Self {
        PlotError::Style(e)
    }
}
impl From<NormalizeError> for PlotError {
    fn from(e: NormalizeError) -> Self {
        PlotError::Normalize(e)
    }
}
impl From<CanvasError> for PlotError {
    fn from(e: CanvasError) -> Self {
        PlotError::Canvas(e)
    }
}
impl From<RenderError> for PlotError {
    fn from(e: RenderError) -> Self {
        PlotError::Render(e)
    }
}

/// Normalize `points`, fill the background, draw path and markers.
///
/// Order: validate style → normalize → create canvas → background → render.
pub fn plot(points: &[Point], cfg: CanvasCfg, style: &Style) -> Result<Canvas, PlotError> {
    style.validate()?;
    let normalized = normalize(points)?;
    let mut canvas = Canvas::create(cfg)?;
    canvas.fill_background(style.background)?;
    render(&mut canvas, &normalized.points, style)?;
    Ok(canvas)
}
