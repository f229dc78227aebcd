//! Render style: marker radius, stroke, and the two category colors.

use std::fmt;

use crate::types::{Category, Rgb};

/// Style configuration, read-only during a render.
///
/// Lengths are in logical canvas units; `ball_radius` is not affected by the
/// draw scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub ball_radius: f64,
    pub line_width: f64,
    pub line_color: Rgb,
    pub a_color: Rgb,
    pub b_color: Rgb,
    pub background: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            ball_radius: 5.0,
            line_width: 1.0,
            line_color: Rgb::BLACK,
            a_color: Rgb::RED,
            b_color: Rgb::BLUE,
            background: Rgb::WHITE,
        }
    }
}

/// Invalid style values.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    ColorOutOfRange { field: &'static str, color: Rgb },
    InvalidLength { field: &'static str, value: f64 },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::ColorOutOfRange { field, color } => {
                write!(f, "{field} {color} has a component outside [0, 1]")
            }
            StyleError::InvalidLength { field, value } => {
                write!(f, "{field} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

impl Style {
    pub fn validate(&self) -> Result<(), StyleError> {
        for (field, value) in [
            ("ball_radius", self.ball_radius),
            ("line_width", self.line_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(StyleError::InvalidLength { field, value });
            }
        }
        for (field, color) in [
            ("line_color", self.line_color),
            ("a_color", self.a_color),
            ("b_color", self.b_color),
            ("background", self.background),
        ] {
            if !color.is_valid() {
                return Err(StyleError::ColorOutOfRange { field, color });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn marker_color(&self, category: Category) -> Rgb {
        match category {
            Category::A => self.a_color,
            Category::B => self.b_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Style::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.ball_radius, 5.0);
        assert_eq!(s.marker_color(Category::A), Rgb::RED);
        assert_eq!(s.marker_color(Category::B), Rgb::BLUE);
    }

    #[test]
    fn rejects_bad_values() {
        let s = Style {
            a_color: Rgb::new(0.0, 1.2, 0.0),
            ..Style::default()
        };
        assert!(matches!(
            s.validate(),
            Err(StyleError::ColorOutOfRange {
                field: "a_color",
                ..
            })
        ));
        let s = Style {
            line_width: -1.0,
            ..Style::default()
        };
        assert!(matches!(
            s.validate(),
            Err(StyleError::InvalidLength {
                field: "line_width",
                ..
            })
        ));
        let s = Style {
            ball_radius: f64::INFINITY,
            ..Style::default()
        };
        assert!(s.validate().is_err());
    }
}
