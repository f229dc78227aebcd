//! Normalization of raw points into drawing space.
//!
//! Model
//! - One uniform scale `s = max(x_range, y_range)` for both axes, so aspect ratio
//!   is preserved. Each axis is anchored at its own minimum; the smaller-range
//!   axis is not centered.
//! - `x' = (x - min_x) / s`, `y' = 1 - (y - min_y) / s` (image convention, y down).
//! - The input is never mutated; a new sequence in the same order is returned.
//!
//! Empty, non-finite, overflowing and degenerate (single location) inputs are
//! rejected.

use std::fmt;

use nalgebra::{Matrix2, Vector2};

use crate::transform::Affine2;
use crate::types::Point;

/// Errors surfaced while fitting the normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// No points to normalize.
    Empty,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Both axis ranges are zero (every point at one location).
    Degenerate { x: f64, y: f64 },
    /// An axis range exceeds the largest finite `f64`.
    RangeOverflow {
        min: Vector2<f64>,
        max: Vector2<f64>,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Empty => write!(f, "empty dataset: nothing to normalize"),
            NormalizeError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            NormalizeError::Degenerate { x, y } => write!(
                f,
                "degenerate dataset: all points lie at ({x}, {y}), axis ranges are zero"
            ),
            NormalizeError::RangeOverflow { min, max } => write!(
                f,
                "axis range from ({}, {}) to ({}, {}) is not representable as a finite f64",
                min.x, min.y, max.x, max.y
            ),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Axis-aligned bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Single pass with `+∞/−∞` sentinels. `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = Vector2::repeat(f64::INFINITY);
        let mut max = Vector2::repeat(f64::NEG_INFINITY);
        for p in points {
            min = min.inf(&p.pos);
            max = max.sup(&p.pos);
        }
        Some(Self { min, max })
    }

    /// `(max_x - min_x, max_y - min_y)`.
    #[inline]
    pub fn span(&self) -> Vector2<f64> {
        self.max - self.min
    }
}

/// Fitted data → drawing space map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    pub bounds: Bounds2,
    pub scale: f64,
}

impl Normalization {
    pub fn fit(points: &[Point]) -> Result<Self, NormalizeError> {
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x().is_finite() && p.y().is_finite()))
        {
            return Err(NormalizeError::NonFinite { index });
        }
        let bounds = Bounds2::from_points(points).ok_or(NormalizeError::Empty)?;
        let span = bounds.span();
        if !(span.x.is_finite() && span.y.is_finite()) {
            return Err(NormalizeError::RangeOverflow {
                min: bounds.min,
                max: bounds.max,
            });
        }
        let scale = span.x.max(span.y);
        if scale <= 0.0 {
            return Err(NormalizeError::Degenerate {
                x: bounds.min.x,
                y: bounds.min.y,
            });
        }
        Ok(Self { bounds, scale })
    }

    /// The map as an affine transform:
    /// `M = diag(1/s, -1/s)`, `t = (-min_x/s, 1 + min_y/s)`.
    pub fn to_affine(&self) -> Affine2 {
        let inv = 1.0 / self.scale;
        Affine2 {
            m: Matrix2::new(inv, 0.0, 0.0, -inv),
            t: Vector2::new(-self.bounds.min.x * inv, 1.0 + self.bounds.min.y * inv),
        }
    }

    pub fn apply(&self, p: &Point) -> Point {
        let x = (p.x() - self.bounds.min.x) / self.scale;
        let y = 1.0 - (p.y() - self.bounds.min.y) / self.scale;
        p.with_pos(Vector2::new(x, y))
    }

    /// Drawing space back to data space.
    pub fn invert(&self, p: &Point) -> Point {
        let x = p.x() * self.scale + self.bounds.min.x;
        let y = (1.0 - p.y()) * self.scale + self.bounds.min.y;
        p.with_pos(Vector2::new(x, y))
    }
}

/// Points in drawing space plus the map that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
    pub points: Vec<Point>,
    pub normalization: Normalization,
}

/// Fit and apply the normalization; order is preserved 1:1.
pub fn normalize(points: &[Point]) -> Result<Normalized, NormalizeError> {
    let normalization = Normalization::fit(points)?;
    let points = points.iter().map(|p| normalization.apply(p)).collect();
    Ok(Normalized {
        points,
        normalization,
    })
}
