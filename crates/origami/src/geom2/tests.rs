use super::*;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: XY, b: XY) -> bool {
    a.equivalent(&b, 1e-9)
}

#[test]
fn line_variants_share_one_intersection_routine() {
    let diag = Line::from_points((0.0, 0.0), (1.0, 1.0)).unwrap();
    let anti = Line::from_points((0.0, 1.0), (1.0, 0.0)).unwrap();
    let p = diag.intersection(&anti, EPSILON).unwrap();
    assert!(close(p, XY::new(0.5, 0.5)));

    // Ray pointing away never reaches the crossing.
    let away = Ray::new((0.0, 0.0), (-1.0, -1.0));
    assert!(away.intersection(&anti, EPSILON).is_none());

    // Edge stops short of the crossing.
    let short = Edge::from_coords(0.0, 0.0, 0.25, 0.25);
    assert!(short.intersection(&anti, EPSILON).is_none());
    let long = Edge::from_coords(0.0, 0.0, 0.75, 0.75);
    assert!(close(long.intersection(&anti, EPSILON).unwrap(), XY::new(0.5, 0.5)));

    // Parallel and collinear loci report nothing.
    let shifted = Line::new((0.0, 1.0), (1.0, 1.0));
    assert!(diag.intersection(&shifted, EPSILON).is_none());
    assert!(diag.intersection(&diag, EPSILON).is_none());
}

#[test]
fn edge_endpoint_touch_counts_within_epsilon() {
    let a = Edge::from_coords(0.0, 0.0, 1.0, 0.0);
    let b = Edge::from_coords(1.0, 0.0, 1.0, 1.0);
    assert!(close(a.intersection(&b, EPSILON).unwrap(), XY::new(1.0, 0.0)));
}

#[test]
fn collinear_respects_parameter_range() {
    let e = Edge::from_coords(0.0, 0.0, 1.0, 0.0);
    assert!(e.collinear(XY::new(0.5, 0.0), EPSILON));
    assert!(!e.collinear(XY::new(1.5, 0.0), EPSILON));
    assert!(e.to_line().collinear(XY::new(1.5, 0.0), EPSILON));
    assert!(!e.collinear(XY::new(0.5, 0.1), EPSILON));
}

#[test]
fn reflection_and_rotation_matrices() {
    let mirror = Line::new((0.5, 0.0), (0.0, 1.0));
    let m = Matrix::reflection(&mirror);
    assert!(close(m.transform(XY::new(0.0, 0.3)), XY::new(1.0, 0.3)));
    assert!(!m.is_orientation_preserving());
    assert!(m.mult(&m).equivalent(&Matrix::identity(), 1e-12));

    let r = Matrix::rotation(FRAC_PI_2, (1.0, 1.0));
    assert!(close(r.transform(XY::new(2.0, 1.0)), XY::new(1.0, 2.0)));
    let inv = r.inverse().unwrap();
    assert!(close(inv.transform(XY::new(1.0, 2.0)), XY::new(2.0, 1.0)));
}

#[test]
fn half_turn_about_axis_matches_reflection_in_plane() {
    let axis = Line::from_points((0.0, 0.2), (1.0, 0.7)).unwrap();
    let flat = Matrix::reflection(&axis);
    let lifted = Matrix::axis_rotation(PI, &axis);
    for p in [XY::new(0.3, 0.9), XY::new(-1.0, 2.0), XY::new(0.0, 0.0)] {
        let q = lifted.transform(p);
        assert!(q.z.abs() < 1e-9);
        assert!(close(q.flatten(), flat.transform(p)));
    }
    // Quarter turn lifts points off the plane but keeps distance to the axis.
    let quarter = Matrix::axis_rotation(FRAC_PI_2, &Line::new((0.0, 0.0), (1.0, 0.0)));
    let q = quarter.transform(XY::new(0.0, -1.0));
    assert!(q.y.abs() < 1e-12 && (q.z.abs() - 1.0).abs() < 1e-12);
}

#[test]
fn convex_hull_drops_interior_point() {
    let pts = [
        XY::new(0.0, 0.0),
        XY::new(1.0, 0.0),
        XY::new(0.5, 0.5),
        XY::new(1.0, 1.0),
        XY::new(0.0, 1.0),
    ];
    let hull = ConvexPolygon::convex_hull(&pts, EPSILON).unwrap();
    let corners = hull.points();
    assert_eq!(corners.len(), 4);
    assert!(!corners.iter().any(|p| close(*p, XY::new(0.5, 0.5))));
    assert!((hull.area() - 1.0).abs() < 1e-12);
}

#[test]
fn convex_hull_skips_collinear_midpoints_and_degenerate_input() {
    let pts = [
        XY::new(0.0, 0.0),
        XY::new(0.5, 0.0),
        XY::new(1.0, 0.0),
        XY::new(1.0, 1.0),
    ];
    let hull = ConvexPolygon::convex_hull(&pts, EPSILON).unwrap();
    assert_eq!(hull.points().len(), 3);
    assert!(ConvexPolygon::convex_hull(&[], EPSILON).is_none());
    assert!(ConvexPolygon::convex_hull(&[XY::new(0.0, 0.0), XY::new(1.0, 1.0)], EPSILON).is_none());
}

#[test]
fn clip_against_unit_square() {
    let sq = ConvexPolygon::square(1.0);
    let inside = Edge::from_coords(0.0, 0.0, 1.0, 1.0);
    let c = sq.clip_edge(&inside, EPSILON).unwrap();
    assert!(c.equivalent(&inside, 1e-9));

    let crossing = Edge::from_coords(0.5, 0.5, 2.0, 0.5);
    let c = sq.clip_edge(&crossing, EPSILON).unwrap();
    assert!(c.equivalent(&Edge::from_coords(0.5, 0.5, 1.0, 0.5), 1e-9));

    let outside = Edge::from_coords(2.0, 2.0, 3.0, 3.0);
    assert!(sq.clip_edge(&outside, EPSILON).is_none());

    let through = Line::new((0.0, 0.5), (1.0, 0.0));
    let c = sq.clip_line(&through, EPSILON).unwrap();
    assert!(c.equivalent(&Edge::from_coords(0.0, 0.5, 1.0, 0.5), 1e-9));

    // A line through two corners is deduplicated down to the diagonal.
    let diag = Line::new((0.0, 0.0), (1.0, 1.0));
    let c = sq.clip_line(&diag, EPSILON).unwrap();
    assert!((c.length() - 2f64.sqrt()).abs() < 1e-9);

    let ray = Ray::new((0.5, 0.5), (0.0, -1.0));
    let c = sq.clip_ray(&ray, EPSILON).unwrap();
    assert!(c.equivalent(&Edge::from_coords(0.5, 0.5, 0.5, 0.0), 1e-9));

    let missing = Line::new((0.0, 2.0), (1.0, 0.0));
    assert!(sq.clip_line(&missing, EPSILON).is_none());
}

#[test]
fn sector_angle_bisect_and_subsect() {
    let s = Sector::new((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
    assert!((s.angle() - FRAC_PI_2).abs() < 1e-12);
    let bis = s.bisect();
    assert!((bis.direction.angle() - PI / 4.0).abs() < 1e-12);
    let rays = s.subsect(3);
    assert_eq!(rays.len(), 2);
    assert!((rays[0].direction.angle() - PI / 6.0).abs() < 1e-12);
    assert!(s.contains(XY::new(1.0, 1.0), EPSILON));
    assert!(!s.contains(XY::new(-1.0, 1.0), EPSILON));

    // Reflex sweep wraps through 2π.
    let reflex = Sector::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
    assert!((reflex.angle() - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!(reflex.contains(XY::new(-1.0, -1.0), EPSILON));
}

#[test]
#[should_panic(expected = "at least 2 divisions")]
fn subsect_by_one_is_a_programmer_error() {
    Sector::new((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)).subsect(1);
}

#[test]
fn triangle_centers() {
    let t = Triangle::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
    assert!(t.area() > 0.0);
    let inc = t.incenter(EPSILON).unwrap();
    let r = 1.0 - 1.0 / 2f64.sqrt();
    assert!(close(inc, XY::new(r, r)));
    let cc = t.circumcenter(EPSILON).unwrap();
    assert!(close(cc, XY::new(0.5, 0.5)));
}

#[test]
fn circle_meets_loci() {
    let c = Circle::new((0.0, 0.0), 1.0);
    let hits = c.intersection(&Line::new((0.0, 0.0), (1.0, 0.0)), EPSILON);
    assert_eq!(hits.len(), 2);
    let hits = c.intersection(&Ray::new((0.0, 0.0), (1.0, 0.0)), EPSILON);
    assert_eq!(hits.len(), 1);
    assert!(close(hits[0], XY::new(1.0, 0.0)));
    let tangent = c.intersection(&Line::new((0.0, 1.0), (1.0, 0.0)), EPSILON);
    assert_eq!(tangent.len(), 1);
    let other = Circle::new((1.0, 0.0), 1.0);
    assert_eq!(c.intersection_circle(&other, EPSILON).len(), 2);
}

#[test]
fn cubic_roots() {
    // (x-1)(x-2)(x-3)
    let r = solve_cubic(1.0, -6.0, 11.0, -6.0, 1e-10);
    assert_eq!(r.len(), 3);
    for (got, want) in r.iter().zip([1.0, 2.0, 3.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    // x³ - 2: single real root.
    let r = solve_cubic(1.0, 0.0, 0.0, -2.0, 1e-10);
    assert_eq!(r.len(), 1);
    assert!((r[0] - 2f64.cbrt()).abs() < 1e-12);
    // Degree drops to a quadratic.
    let r = solve_cubic(0.0, 1.0, 0.0, -4.0, 1e-10);
    assert_eq!(r.len(), 2);
    assert!((r[0] + 2.0).abs() < 1e-12 && (r[1] - 2.0).abs() < 1e-12);
    assert!(solve_quadratic(1.0, 0.0, 1.0, 1e-10).is_empty());
    // (x-1)²(x-2): the double root survives.
    let r = solve_cubic(1.0, -4.0, 5.0, -2.0, 1e-10);
    assert_eq!(r.len(), 2);
    assert!((r[0] - 1.0).abs() < 1e-6 && (r[1] - 2.0).abs() < 1e-9);
}

#[test]
fn cubic_with_tiny_linear_term_keeps_its_real_root() {
    let f = |x: f64| x * x * x + 1e-12 * x + 1.5e-8;
    let r = solve_cubic(1.0, 0.0, 1e-12, 1.5e-8, 1e-8);
    assert_eq!(r.len(), 1);
    assert!((r[0] + 1.5e-8f64.cbrt()).abs() < 1e-9);
    assert!(f(r[0]).abs() < 1e-15);
    // Scaling every coefficient leaves the roots alone.
    let scaled = solve_cubic(1e6, 0.0, 1e-6, 1.5e-2, 1e-8);
    assert_eq!(scaled.len(), 1);
    assert!((scaled[0] - r[0]).abs() < 1e-9);
}

#[test]
fn polygon_containment_and_centroid() {
    let p = Polygon::new([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    assert!(p.contains(XY::new(1.0, 1.0)));
    assert!(!p.contains(XY::new(3.0, 1.0)));
    assert!(close(p.centroid().unwrap(), XY::new(1.0, 1.0)));
    assert!(p.is_convex(EPSILON));
    let cw = Polygon::new([(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    assert!(cw.signed_area() < 0.0);
    assert!(cw.to_convex().unwrap().area() > 0.0);
}

fn coord() -> impl Strategy<Value = f64> {
    -10.0..10.0f64
}

proptest! {
    #[test]
    fn intersection_is_symmetric(
        ax in coord(), ay in coord(), adx in coord(), ady in coord(),
        bx in coord(), by in coord(), bdx in coord(), bdy in coord(),
    ) {
        let l1 = Line::from_coords(ax, ay, adx, ady);
        let l2 = Line::from_coords(bx, by, bdx, bdy);
        match (l1.intersection(&l2, EPSILON), l2.intersection(&l1, EPSILON)) {
            (Some(p), Some(q)) => {
                let scale = 1.0 + p.magnitude();
                prop_assert!(p.distance_to(&q) < 1e-6 * scale);
            }
            (None, None) => {}
            other => prop_assert!(false, "asymmetric result {:?}", other),
        }
    }

    #[test]
    fn edge_intersection_is_symmetric(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        x3 in coord(), y3 in coord(), x4 in coord(), y4 in coord(),
    ) {
        let e1 = Edge::from_coords(x1, y1, x2, y2);
        let e2 = Edge::from_coords(x3, y3, x4, y4);
        let p = e1.intersection(&e2, EPSILON);
        let q = e2.intersection(&e1, EPSILON);
        prop_assert_eq!(p.is_some(), q.is_some());
        if let (Some(p), Some(q)) = (p, q) {
            prop_assert!(p.distance_to(&q) < 1e-6 * (1.0 + p.magnitude()));
        }
    }
}
