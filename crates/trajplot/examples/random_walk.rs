//! Render a seeded two-class random walk to `random_walk.png`.
//!
//! Usage: cargo run -p trajplot --example random_walk [SEED] [LEN]

use trajplot::sample::{random_walk, WalkCfg};
use trajplot::{plot, CanvasCfg, Style};

fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let len: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(300);

    let walk = random_walk(
        WalkCfg {
            len,
            p_a: 0.3,
            ..WalkCfg::default()
        },
        seed,
    );
    let canvas = plot(&walk, CanvasCfg::default(), &Style::default()).expect("plot succeeds");
    canvas
        .save_png("random_walk.png")
        .expect("write random_walk.png");
    println!("seed={seed} len={len} out=random_walk.png");
}
