//! Best-first branch-and-bound search for the pole of inaccessibility.
//!
//! Bootstrap: bounding box → square tiling → centroid / box-center seeds.
//! Refine: pop the highest upper bound, update the best cell, prune when the
//! bound is within `precision` of the best distance, otherwise split into
//! quadrants. Terminates when the frontier drains; every split halves `h`.

use nalgebra::Vector2;

use crate::geom2::{area_centroid, Bbox, Ring};

use super::cfg::LabelCfg;
use super::frontier::Frontier;
use super::observer::{NoopObserver, SearchObserver};
use super::types::{Cell, LabelError, Pole, SearchStats};

/// Find the pole of inaccessibility of `polygon` (implicitly closed ring).
pub fn find_pole(polygon: &[Vector2<f64>], cfg: LabelCfg) -> Result<Pole, LabelError> {
    find_pole_observed(polygon, cfg, &mut NoopObserver).map(|(pole, _)| pole)
}

/// Convenience: default precision (1.0), point only.
pub fn find_pole_with_defaults(polygon: &[Vector2<f64>]) -> Result<Pole, LabelError> {
    find_pole(polygon, LabelCfg::default())
}

/// Search and also return the probe counters.
pub fn find_pole_with_stats(
    polygon: &[Vector2<f64>],
    cfg: LabelCfg,
) -> Result<(Pole, SearchStats), LabelError> {
    find_pole_observed(polygon, cfg, &mut NoopObserver)
}

/// Search while reporting progress to `obs`.
pub fn find_pole_observed<O: SearchObserver + ?Sized>(
    polygon: &[Vector2<f64>],
    cfg: LabelCfg,
    obs: &mut O,
) -> Result<(Pole, SearchStats), LabelError> {
    cfg.validate()?;
    let ring = Ring::new(polygon)?;
    Ok(LabelRunner::new(ring, cfg, obs).solve())
}

/// Point probe at the area centroid; the first vertex when the area is zero.
pub fn centroid_cell(ring: Ring<'_>) -> Cell {
    let seed = area_centroid(ring).unwrap_or(ring.points()[0]);
    Cell::point(seed, ring)
}

/// Runner carrying the ring, the frontier, and the counters of one search.
struct LabelRunner<'r, 'o, O: ?Sized> {
    ring: Ring<'r>,
    cfg: LabelCfg,
    obs: &'o mut O,
    frontier: Frontier,
    probes: usize,
    improvements: usize,
}

impl<'r, 'o, O: SearchObserver + ?Sized> LabelRunner<'r, 'o, O> {
    fn new(ring: Ring<'r>, cfg: LabelCfg, obs: &'o mut O) -> Self {
        Self {
            ring,
            cfg,
            obs,
            frontier: Frontier::new(),
            probes: 0,
            improvements: 0,
        }
    }

    fn solve(mut self) -> (Pole, SearchStats) {
        let bbox = self.ring.bbox();
        let cell_size = bbox.cell_size();
        if cell_size == 0.0 {
            tracing::trace!(x = bbox.min.x, y = bbox.min.y, "degenerate_bbox");
            let stats = SearchStats {
                degenerate: true,
                ..SearchStats::default()
            };
            self.obs.on_finish(&stats);
            return (
                Pole {
                    point: bbox.min,
                    distance: None,
                },
                stats,
            );
        }

        self.tile(&bbox, cell_size);
        let mut best = self.seed(&bbox);

        while let Some(cell) = self.frontier.pop() {
            if cell.d > best.d {
                best = cell;
                self.improvements += 1;
                self.obs.on_improve(&best, self.probes);
            }
            self.obs.on_step(&cell, &best);

            if cell.max - best.d <= self.cfg.precision {
                continue;
            }
            for child in cell.children(self.ring) {
                self.frontier.push(child);
            }
            self.probes += 4;
        }

        let stats = SearchStats {
            probes: self.probes,
            improvements: self.improvements,
            best_distance: Some(best.d),
            degenerate: false,
        };
        self.obs.on_finish(&stats);
        let pole = Pole {
            point: best.center,
            distance: self.cfg.with_distance.then_some(best.d),
        };
        (pole, stats)
    }

    /// Cover the box with squares of side `cell_size` from the min corner.
    /// Edge tiles may stick out past the max corner.
    fn tile(&mut self, bbox: &Bbox, cell_size: f64) {
        let h = cell_size / 2.0;
        let mut x = bbox.min.x;
        while x < bbox.max.x {
            let mut y = bbox.min.y;
            while y < bbox.max.y {
                self.frontier
                    .push(Cell::new(Vector2::new(x + h, y + h), h, self.ring));
                self.probes += 1;
                y += cell_size;
            }
            x += cell_size;
        }
    }

    /// Better of the centroid and box-center probes (ties keep the centroid).
    fn seed(&self, bbox: &Bbox) -> Cell {
        let centroid = centroid_cell(self.ring);
        let center = Cell::point(bbox.center(), self.ring);
        if center.d > centroid.d {
            center
        } else {
            centroid
        }
    }
}
