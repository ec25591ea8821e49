//! Reference patterns.

use std::f64::consts::SQRT_2;

use crate::geom2::XY;

use super::pattern::CreasePattern;
use super::types::{Crease, Orientation};

/// Bird base on the unit square: 17 vertices, 40 creases.
///
/// Nodes: corners `0..4` (counter-clockwise from the origin), side midpoints
/// `4..8`, center `8`, midline kite points `9..13` and diagonal points
/// `13..17`. Every interior node satisfies Maekawa and Kawasaki.
pub fn bird_base() -> CreasePattern {
    use Orientation::{Border as B, Mountain as M, Valley as V};

    // Where a 22.5° line from a corner meets the nearer midline.
    let t = 0.5 * (SQRT_2 - 1.0);
    // Where the kite tops cross the diagonals.
    let d = SQRT_2 / 4.0;
    let nodes: [XY; 17] = [
        XY::new(0.0, 0.0),
        XY::new(1.0, 0.0),
        XY::new(1.0, 1.0),
        XY::new(0.0, 1.0),
        XY::new(0.5, 0.0),
        XY::new(1.0, 0.5),
        XY::new(0.5, 1.0),
        XY::new(0.0, 0.5),
        XY::new(0.5, 0.5),
        XY::new(0.5, t),
        XY::new(1.0 - t, 0.5),
        XY::new(0.5, 1.0 - t),
        XY::new(t, 0.5),
        XY::new(d, d),
        XY::new(1.0 - d, d),
        XY::new(1.0 - d, 1.0 - d),
        XY::new(d, 1.0 - d),
    ];
    let creases: [(usize, usize, Orientation); 40] = [
        // sheet outline
        (0, 4, B),
        (4, 1, B),
        (1, 5, B),
        (5, 2, B),
        (2, 6, B),
        (6, 3, B),
        (3, 7, B),
        (7, 0, B),
        // midlines through the kite points
        (4, 9, M),
        (9, 8, M),
        (5, 10, M),
        (10, 8, M),
        (6, 11, M),
        (11, 8, M),
        (7, 12, M),
        (12, 8, M),
        // diagonals through the diagonal points
        (0, 13, M),
        (13, 8, V),
        (1, 14, M),
        (14, 8, V),
        (2, 15, V),
        (15, 8, M),
        (3, 16, M),
        (16, 8, V),
        // 22.5° kite edges
        (0, 9, M),
        (1, 9, M),
        (1, 10, M),
        (2, 10, M),
        (2, 11, M),
        (3, 11, M),
        (3, 12, M),
        (0, 12, M),
        // kite tops
        (9, 13, V),
        (12, 13, V),
        (9, 14, V),
        (10, 14, V),
        (10, 15, V),
        (11, 15, V),
        (11, 16, V),
        (12, 16, V),
    ];

    let mut cp = CreasePattern::new();
    cp.graph.clear();
    for p in nodes {
        cp.graph.add_node(p);
    }
    for (a, b, o) in creases {
        cp.graph.add_edge_from_existing_vertices(a, b, Crease::new(o));
    }
    let eps_merge = cp.cfg.eps_merge;
    cp.graph.clean(eps_merge);
    cp
}
