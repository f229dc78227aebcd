//! Seeded two-class random walks for demos and benchmarks.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Category, Point};

/// Random-walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of points.
    pub len: usize,
    /// Maximum step length per axis; steps are uniform in `[-step, step]`.
    pub step: f64,
    /// Probability of class A. Clamped to [0, 1].
    pub p_a: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            len: 100,
            step: 1.0,
            p_a: 0.5,
        }
    }
}

/// Walk starting at the origin. Same `(cfg, seed)` gives the same points.
pub fn random_walk(cfg: WalkCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = cfg.step.abs().max(1e-9);
    let p_a = cfg.p_a.clamp(0.0, 1.0);
    let mut pos = Vector2::zeros();
    let mut out = Vec::with_capacity(cfg.len);
    for _ in 0..cfg.len {
        out.push(Point {
            pos,
            category: Category::from(rng.gen_bool(p_a)),
        });
        pos += Vector2::new(rng.gen_range(-step..=step), rng.gen_range(-step..=step));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_stable() {
        let cfg = WalkCfg::default();
        assert_eq!(random_walk(cfg, 7), random_walk(cfg, 7));
        assert_ne!(random_walk(cfg, 7), random_walk(cfg, 8));
    }

    #[test]
    fn steps_are_bounded() {
        let cfg = WalkCfg {
            len: 50,
            step: 0.5,
            p_a: 1.0,
        };
        let walk = random_walk(cfg, 3);
        assert_eq!(walk.len(), 50);
        assert_eq!(walk[0].pos, Vector2::zeros());
        for w in walk.windows(2) {
            let d = w[1].pos - w[0].pos;
            assert!(d.x.abs() <= 0.5 && d.y.abs() <= 0.5);
        }
        assert!(walk.iter().all(|p| p.category.is_a()));
    }
}
