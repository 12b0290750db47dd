//! Scenario tests for the label search.
//!
//! Expected coordinates and probe counts are fixed fixtures: the search is
//! deterministic, so these are exact up to the listed tolerances.

use super::*;
use crate::geom2::{signed_distance, Ring};
use nalgebra::{vector, Vector2};

fn square(side: f64) -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ]
}

fn l_shape() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 2.0],
        vector![2.0, 2.0],
        vector![2.0, 10.0],
        vector![0.0, 10.0],
    ]
}

fn triangle() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![5.0, 8.660254037844386],
    ]
}

fn u_shape() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![20.0, 0.0],
        vector![20.0, 20.0],
        vector![14.0, 20.0],
        vector![14.0, 6.0],
        vector![6.0, 6.0],
        vector![6.0, 20.0],
        vector![0.0, 20.0],
    ]
}

fn solve(pts: &[Vector2<f64>], precision: f64) -> (Pole, SearchStats) {
    find_pole_with_stats(pts, LabelCfg::with_precision(precision)).unwrap()
}

#[test]
fn square_pole_is_center() {
    let (pole, stats) = solve(&square(10.0), 0.01);
    assert!((pole.point - vector![5.0, 5.0]).norm() < 1e-12);
    assert!((pole.distance.unwrap() - 5.0).abs() < 1e-12);
    assert_eq!(stats.probes, 117);
    assert_eq!(stats.improvements, 0);
    assert!(!stats.degenerate);
}

#[test]
fn square_coarse_precision_probe_count() {
    // One tile, one split into four, four more splits into sixteen.
    let (pole, stats) = solve(&square(10.0), 1.0);
    assert!((pole.point - vector![5.0, 5.0]).norm() < 1e-12);
    assert_eq!(stats.probes, 21);
}

#[test]
fn l_shape_pole_sits_in_the_corner() {
    let (pole, stats) = solve(&l_shape(), 0.01);
    assert!((pole.point - vector![1.171875, 1.171875]).norm() < 1e-12);
    assert!((pole.distance.unwrap() - 1.1711456063402192).abs() < 1e-12);
    assert_eq!(stats.probes, 241);
    assert_eq!(stats.improvements, 4);

    let (coarse, coarse_stats) = solve(&l_shape(), 1.0);
    assert!((coarse.point - vector![1.25, 1.25]).norm() < 1e-12);
    assert!((coarse.distance.unwrap() - 1.0606601717798212).abs() < 1e-12);
    assert_eq!(coarse_stats.probes, 45);
    assert_eq!(coarse_stats.improvements, 2);
}

#[test]
fn triangle_pole_is_incenter() {
    let (pole, stats) = solve(&triangle(), 0.01);
    let incenter = vector![5.0, 10.0 / (2.0 * 3f64.sqrt())];
    assert!((pole.point - incenter).norm() < 0.01);
    assert!((pole.distance.unwrap() - 2.8867513459481287).abs() < 1e-9);
    assert_eq!(stats.probes, 62);
}

#[test]
fn u_shape_pole_in_lower_corner() {
    let (pole, stats) = solve(&u_shape(), 0.01);
    assert!((pole.point - vector![3.515625, 3.515625]).norm() < 1e-12);
    assert!((pole.distance.unwrap() - 3.513436819020658).abs() < 1e-12);
    assert_eq!(stats.probes, 349);
    assert_eq!(stats.improvements, 5);
}

#[test]
fn distance_omitted_unless_requested() {
    let pole = find_pole_with_defaults(&square(10.0)).unwrap();
    assert!((pole.point - vector![5.0, 5.0]).norm() < 1e-12);
    assert_eq!(pole.distance, None);
}

#[test]
fn degenerate_segment_returns_min_corner() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 0.0],
        vector![0.0, 0.0],
    ];
    let (pole, stats) = solve(&pts, 1.0);
    assert_eq!(pole.point, vector![0.0, 0.0]);
    assert_eq!(pole.distance, None);
    assert!(stats.degenerate);
    assert_eq!(stats.probes, 0);
    assert_eq!(stats.best_distance, None);

    let shifted = vec![vector![3.0, -1.0], vector![3.0, 5.0], vector![3.0, 2.0]];
    let (pole, _) = solve(&shifted, 1.0);
    assert_eq!(pole.point, vector![3.0, -1.0]);
}

#[test]
fn zero_area_diagonal_falls_back_gracefully() {
    // Non-degenerate box but zero enclosed area: the centroid seed falls back
    // to the first vertex and nothing beats it.
    let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    let (pole, stats) = solve(&pts, 1.0);
    assert_eq!(pole.point, vector![0.0, 0.0]);
    assert!(pole.distance.unwrap() <= 0.0);
    assert_eq!(stats.probes, 5);
}

#[test]
fn too_few_vertices_is_error() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert_eq!(
        find_pole(&pts, LabelCfg::default()),
        Err(LabelError::TooFewVertices { got: 2 })
    );
    let err = find_pole(&[], LabelCfg::default()).unwrap_err();
    assert!(err.to_string().contains("at least 3 vertices"));
}

#[test]
fn invalid_precision_is_error() {
    let pts = square(1.0);
    assert!(matches!(
        find_pole(&pts, LabelCfg::with_precision(-0.5)),
        Err(LabelError::InvalidPrecision { .. })
    ));
    assert!(matches!(
        find_pole(&pts, LabelCfg::with_precision(f64::NAN)),
        Err(LabelError::InvalidPrecision { .. })
    ));
    assert!(LabelCfg::with_precision(0.0).validate().is_ok());
}

#[test]
fn best_distance_never_decreases() {
    let mut rec = Recorder::default();
    let (pole, stats) =
        find_pole_observed(&u_shape(), LabelCfg::with_precision(0.001), &mut rec).unwrap();
    assert!(!rec.steps.is_empty());
    let mut last = f64::NEG_INFINITY;
    for (popped, best) in &rec.steps {
        assert!(best.d >= last, "best.d went from {last} to {}", best.d);
        assert!(best.d >= popped.d);
        last = best.d;
    }
    for w in rec.improvements.windows(2) {
        assert!(w[1].0 > w[0].0);
        assert!(w[1].1 >= w[0].1);
    }
    assert_eq!(rec.improvements.len(), stats.improvements);
    assert_eq!(rec.finished, Some(stats));
    assert_eq!(pole.distance, Some(last));
}

#[test]
fn every_created_cell_is_popped_once() {
    let mut rec = Recorder::default();
    let (_, stats) =
        find_pole_observed(&l_shape(), LabelCfg::with_precision(0.01), &mut rec).unwrap();
    assert_eq!(rec.steps.len(), stats.probes);
}

#[test]
fn search_is_bit_reproducible() {
    let cfg = LabelCfg::with_precision(0.001);
    let a = find_pole_with_stats(&u_shape(), cfg).unwrap();
    let b = find_pole_with_stats(&u_shape(), cfg).unwrap();
    assert_eq!(a.0.point.x.to_bits(), b.0.point.x.to_bits());
    assert_eq!(a.0.point.y.to_bits(), b.0.point.y.to_bits());
    assert_eq!(a.0.distance.map(f64::to_bits), b.0.distance.map(f64::to_bits));
    assert_eq!(a.1, b.1);
}

#[test]
fn observers_do_not_change_the_result() {
    let cfg = LabelCfg::with_precision(0.01);
    let plain = find_pole(&l_shape(), cfg).unwrap();
    let mut rec = Recorder::default();
    let (recorded, _) = find_pole_observed(&l_shape(), cfg, &mut rec).unwrap();
    let (traced, _) = find_pole_observed(&l_shape(), cfg, &mut TraceObserver).unwrap();
    assert_eq!(plain, recorded);
    assert_eq!(plain, traced);
}

#[test]
fn tighter_precision_never_hurts() {
    for pts in [square(10.0), l_shape(), triangle(), u_shape()] {
        let mut last_probes = 0;
        let mut last_d = f64::NEG_INFINITY;
        for precision in [1.0, 0.1, 0.01, 0.001] {
            let (pole, stats) = solve(&pts, precision);
            let d = pole.distance.unwrap();
            assert!(stats.probes >= last_probes);
            assert!(d >= last_d);
            last_probes = stats.probes;
            last_d = d;
        }
    }
}

#[test]
fn centroid_cell_is_a_point_probe() {
    let pts = square(10.0);
    let ring = Ring::new(&pts).unwrap();
    let c = centroid_cell(ring);
    assert_eq!(c.h, 0.0);
    assert_eq!(c.max, c.d);
    assert!((c.center - vector![5.0, 5.0]).norm() < 1e-12);

    let flat = vec![vector![2.0, 1.0], vector![4.0, 1.0], vector![3.0, 1.0]];
    let ring = Ring::new(&flat).unwrap();
    assert_eq!(centroid_cell(ring).center, vector![2.0, 1.0]);
}

#[test]
fn children_halve_and_tighten() {
    let pts = square(8.0);
    let ring = Ring::new(&pts).unwrap();
    let parent = Cell::new(vector![4.0, 4.0], 4.0, ring);
    let kids = parent.children(ring);
    let centers: Vec<_> = kids.iter().map(|c| c.center).collect();
    assert_eq!(
        centers,
        vec![
            vector![2.0, 2.0],
            vector![6.0, 2.0],
            vector![2.0, 6.0],
            vector![6.0, 6.0]
        ]
    );
    for k in &kids {
        assert_eq!(k.h, 2.0);
        assert!(k.max >= k.d);
        assert!(k.max <= parent.max);
        assert_eq!(k.d, signed_distance(k.center, ring));
    }
}
