//! Path and marker rendering onto a `Canvas`.
//!
//! Model
//! - Drawing space is mapped to logical canvas units by a fixed margin
//!   (5% of width on the left, 5% of height on top) and one uniform draw scale
//!   `0.9 * width` for both axes.
//! - One open polyline visits every point in order and is stroked once, so
//!   joins come from the stroker's default join.
//! - Markers are filled afterwards, in order, with radius `ball_radius` in
//!   logical units (not multiplied by the draw scale).

use std::fmt;

use nalgebra::Vector2;
use tiny_skia::PathBuilder;

use crate::canvas::{Canvas, CanvasCfg, CanvasError};
use crate::style::{Style, StyleError};
use crate::transform::Affine2;
use crate::types::Point;

/// Fraction of the canvas width/height left as top-left margin.
pub const MARGIN_FRAC: f64 = 0.05;
/// Fraction of the canvas width used as draw scale.
pub const DRAW_SCALE_FRAC: f64 = 0.9;

#[derive(Debug)]
pub enum RenderError {
    Style(StyleError),
    Canvas(CanvasError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Style(e) => write!(f, "invalid style: {e}"),
            RenderError::Canvas(e) => write!(f, "canvas: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Style(e) => Some(e),
            RenderError::Canvas(e) => Some(e),
        }
    }
}

impl From<StyleError> for RenderError {
    fn from(e: StyleError) -> Self {
        RenderError::Style(e)
    }
}

impl From<CanvasError> for RenderError {
    fn from(e: CanvasError) -> Self {
        RenderError::Canvas(e)
    }
}

/// Drawing space → logical canvas units: `scale(0.9 w)` then `translate(0.05 w, 0.05 h)`.
pub fn draw_transform(cfg: &CanvasCfg) -> Affine2 {
    let w = cfg.width as f64;
    let h = cfg.height as f64;
    let s = w * DRAW_SCALE_FRAC;
    Affine2::scaling(s, s).then(&Affine2::translation(Vector2::new(
        w * MARGIN_FRAC,
        h * MARGIN_FRAC,
    )))
}

fn to_canvas(map: &Affine2, p: &Point) -> (f32, f32) {
    let q = map.apply(p.pos);
    (q.x as f32, q.y as f32)
}

/// Stroke the connecting path, then fill one marker per point.
///
/// `points` are expected in drawing space (see `normalize`). The canvas
/// background must already be filled.
pub fn render(canvas: &mut Canvas, points: &[Point], style: &Style) -> Result<(), RenderError> {
    style.validate()?;
    if !canvas.background_filled() {
        return Err(CanvasError::BackgroundNotFilled.into());
    }
    let map = draw_transform(&canvas.cfg());

    if style.line_width > 0.0 {
        let mut pb = PathBuilder::new();
        for (i, p) in points.iter().enumerate() {
            let (x, y) = to_canvas(&map, p);
            if i == 0 {
                pb.move_to(x, y);
            } else {
                pb.line_to(x, y);
            }
        }
        // A lone move_to has no segments and yields no path.
        if let Some(path) = pb.finish() {
            canvas.stroke(&path, style.line_color, style.line_width as f32)?;
        }
    }

    if style.ball_radius > 0.0 {
        let r = style.ball_radius as f32;
        for p in points {
            let (x, y) = to_canvas(&map, p);
            if let Some(marker) = PathBuilder::from_circle(x, y, r) {
                canvas.fill(&marker, style.marker_color(p.category))?;
            }
        }
    }
    Ok(())
}
