//! 2D affine maps between coordinate spaces.
//!
//! Data space → drawing space (normalization) and drawing space → logical
//! canvas units (margin + draw scale) are both `Affine2`. The device scale
//! (supersampling) is applied by the canvas on top.

use nalgebra::{Matrix2, Vector2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Axis-aligned scale `diag(sx, sy)`.
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    /// `other ∘ self`: apply `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: &Affine2) -> Self {
        Self {
            m: other.m * self.m,
            t: other.m * self.t + other.t,
        }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            self.m[(0, 0)] as f32,
            self.m[(1, 0)] as f32,
            self.m[(0, 1)] as f32,
            self.m[(1, 1)] as f32,
            self.t.x as f32,
            self.t.y as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn compose_applies_left_to_right() {
        let s = Affine2::scaling(2.0, 3.0);
        let t = Affine2::translation(vector![1.0, -1.0]);
        let st = s.then(&t);
        let p = vector![1.0, 1.0];
        assert!((st.apply(p) - vector![3.0, 2.0]).norm() < 1e-12);
        assert!((st.apply(p) - t.apply(s.apply(p))).norm() < 1e-12);
    }

    #[test]
    fn inverse_roundtrip_and_singular() {
        let f = Affine2::scaling(0.5, -0.25).then(&Affine2::translation(vector![2.0, 7.0]));
        let inv = f.inverse().unwrap();
        let p = vector![-3.0, 11.5];
        assert!((inv.apply(f.apply(p)) - p).norm() < 1e-12);
        assert!(Affine2::scaling(1.0, 0.0).inverse().is_none());
    }

    #[test]
    fn skia_transform_matches() {
        let f = Affine2::scaling(4.0, 2.0).then(&Affine2::translation(vector![10.0, 20.0]));
        let mut pts = [tiny_skia::Point::from_xy(1.0, 1.0)];
        f.to_skia().map_points(&mut pts);
        assert!((pts[0].x - 14.0).abs() < 1e-6);
        assert!((pts[0].y - 22.0).abs() < 1e-6);
    }
}
