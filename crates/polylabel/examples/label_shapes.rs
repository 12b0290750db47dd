//! Print label points for a few fixture shapes and random star rings.
//!
//! Usage:
//!   cargo run -p polylabel --example label_shapes -- 0.01
//!
//! The optional argument is the precision (default 1.0).

use polylabel::api::{
    draw_star_polygon, find_pole_with_stats, ring_from_pairs, LabelCfg, RingReplay, StarCfg,
    DEFAULT_PRECISION,
};

fn main() {
    let precision = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_PRECISION);
    let cfg = LabelCfg::with_precision(precision);

    let fixtures = [
        (
            "square",
            ring_from_pairs(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
        ),
        (
            "l-shape",
            ring_from_pairs(&[
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 2.0),
                (2.0, 2.0),
                (2.0, 10.0),
                (0.0, 10.0),
            ]),
        ),
        (
            "triangle",
            ring_from_pairs(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.660254037844386)]),
        ),
    ];
    for (name, ring) in fixtures.iter() {
        show(name, ring, cfg);
    }
    for index in 0..3 {
        let ring = draw_star_polygon(StarCfg::default(), RingReplay { seed: 2025, index });
        show(&format!("star#{index}"), &ring, cfg);
    }
}

fn show(name: &str, ring: &[nalgebra::Vector2<f64>], cfg: LabelCfg) {
    match find_pole_with_stats(ring, cfg) {
        Ok((pole, stats)) => println!(
            "{name:>10}: n={:<3} pole=({:.4}, {:.4}) d={:?} probes={}",
            ring.len(),
            pole.point.x,
            pole.point.y,
            pole.distance,
            stats.probes
        ),
        Err(err) => eprintln!("{name:>10}: {err}"),
    }
}
