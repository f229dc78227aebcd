//! Basic value types shared by the pipeline.
//!
//! - `Category`: the binary class of a point (A or B), controls marker color.
//! - `Point`: a labeled position; sequences of points are ordered and the order
//!   defines the stroked path.
//! - `Rgb`: a flat color with components in `[0, 1]`.

use std::fmt;

use nalgebra::Vector2;

/// Binary point class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    A,
    B,
}

impl Category {
    #[inline]
    pub fn is_a(self) -> bool {
        matches!(self, Category::A)
    }
}

impl From<bool> for Category {
    #[inline]
    fn from(is_a: bool) -> Self {
        if is_a {
            Category::A
        } else {
            Category::B
        }
    }
}

/// A labeled 2D point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub category: Category,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, category: impl Into<Category>) -> Self {
        Self {
            pos: Vector2::new(x, y),
            category: category.into(),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    /// Same category, new position.
    #[inline]
    pub fn with_pos(&self, pos: Vector2<f64>) -> Self {
        Self {
            pos,
            category: self.category,
        }
    }
}

/// Flat RGB color, each component in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// All components finite and within `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Opaque rasterizer color; `None` if a component is out of range.
    pub(crate) fn to_skia(self) -> Option<tiny_skia::Color> {
        if !self.is_valid() {
            return None;
        }
        tiny_skia::Color::from_rgba(self.r, self.g, self.b, 1.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}
