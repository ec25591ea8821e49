//! The seven Huzita–Justin single-fold constructions.
//!
//! Every axiom returns infinite fold lines; clip and commit them with
//! `CreasePattern::crease_line`.

use crate::geom2::{intersect, solve_cubic, Circle, Edge, Line, LinearLocus, XY};

/// Axiom 1: the fold through two points.
pub fn axiom1(a: impl Into<XY>, b: impl Into<XY>) -> Option<Line> {
    Line::from_points(a, b)
}

/// Axiom 2: the fold bringing `a` onto `b` (their perpendicular bisector).
pub fn axiom2(a: impl Into<XY>, b: impl Into<XY>) -> Option<Line> {
    Edge::new(a, b).perpendicular_bisector()
}

/// Axiom 3: folds laying line `a` onto line `b`. Parallel lines give their
/// midline; crossing lines give both angle bisectors.
pub fn axiom3(a: impl Into<Line>, b: impl Into<Line>, eps: f64) -> Vec<Line> {
    let (a, b) = (a.into(), b.into());
    let (Some(ua), Some(ub)) = (a.direction.normalize(), b.direction.normalize()) else {
        return Vec::new();
    };
    match intersect(&a, &b, eps) {
        Some(p) => [ua + ub, ua - ub]
            .into_iter()
            .filter(|d| d.magnitude() > eps)
            .map(|d| Line::new(p, d))
            .collect(),
        None => {
            let mid = a.point.midpoint(&b.nearest_point(a.point));
            vec![Line::new(mid, ua)]
        }
    }
}

/// Axiom 4: the fold through `point` perpendicular to `line`.
pub fn axiom4(point: impl Into<XY>, line: impl Into<Line>) -> Option<Line> {
    let line = line.into();
    let d = line.direction.normalize()?;
    Some(Line::new(point, d.rotate90()))
}

/// Axiom 5: folds through `pivot` that place `moving` onto `line` (0–2).
pub fn axiom5(
    pivot: impl Into<XY>,
    moving: impl Into<XY>,
    line: impl Into<Line>,
    eps: f64,
) -> Vec<Line> {
    let (pivot, moving, line) = (pivot.into(), moving.into(), line.into());
    let circle = Circle::new(pivot, pivot.distance_to(&moving));
    circle
        .intersection(&line, eps)
        .into_iter()
        .filter(|q| !q.equivalent(&moving, eps))
        .filter_map(|q| axiom2(moving, q))
        .collect()
}

/// Axiom 6: folds placing `p1` onto `l1` and `p2` onto `l2` simultaneously
/// (0–3 solutions).
///
/// With `q = o1 + t·d1` the landing point of `p1`, the fold is the
/// perpendicular bisector of `p1`–`q`. Requiring the reflection of `p2` to
/// lie on `l2` and clearing the denominator `|q − p1|²` leaves a cubic in
/// `t`. It degrades to a quadratic or linear equation when `l1` and `l2` are
/// parallel; every root is checked against both conditions before it is
/// returned.
pub fn axiom6(
    p1: impl Into<XY>,
    l1: impl Into<Line>,
    p2: impl Into<XY>,
    l2: impl Into<Line>,
    eps: f64,
) -> Vec<Line> {
    let (p1, l1, p2, l2) = (p1.into(), l1.into(), p2.into(), l2.into());
    let (Some(d1), Some(d2)) = (l1.direction.normalize(), l2.direction.normalize()) else {
        return Vec::new();
    };
    let (o1, o2) = (l1.point, l2.point);

    let a = o1 - p1;
    let b = p2 - p1.midpoint(&o1);
    let e = d1.dot(&d1);
    let k = (p2 - o2).cross(&d2);
    let (c0, c1) = (a.cross(&d2), d1.cross(&d2));
    let (dd0, dd1) = (b.dot(&a), b.dot(&d1) - 0.5 * a.dot(&d1));
    let (n0, n1) = (a.dot(&a), 2.0 * a.dot(&d1));

    let cubic = e * c1;
    let quadratic = k * e - 2.0 * dd1 * c1 + e * c0;
    let linear = k * n1 - 2.0 * (dd0 * c1 + dd1 * c0);
    let constant = k * n0 - 2.0 * dd0 * c0;

    let tolerance = eps.max(1e-9).sqrt();
    let mut out: Vec<Line> = Vec::new();
    for t in solve_cubic(cubic, quadratic, linear, constant, eps) {
        let q = o1 + d1 * t;
        if q.equivalent(&p1, eps) {
            continue;
        }
        let Some(fold) = axiom2(p1, q) else {
            continue;
        };
        if l2.distance_to(fold.reflect(p2)) > tolerance {
            continue;
        }
        if !out.iter().any(|l| l.equivalent(&fold, tolerance)) {
            out.push(fold);
        }
    }
    out
}

/// Axiom 7: the fold perpendicular to `perpendicular_to` that places `point`
/// onto `onto`.
pub fn axiom7(
    point: impl Into<XY>,
    onto: impl Into<Line>,
    perpendicular_to: impl Into<Line>,
    eps: f64,
) -> Option<Line> {
    let (point, onto, perpendicular_to) = (point.into(), onto.into(), perpendicular_to.into());
    let path = Line::new(point, perpendicular_to.direction);
    let landing = intersect(&path, &onto, eps)?;
    if landing.equivalent(&point, eps) {
        return None;
    }
    axiom2(point, landing)
}
