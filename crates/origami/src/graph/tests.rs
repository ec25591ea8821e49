use super::*;
use crate::geom2::{EPSILON, MERGE_EPSILON, XY};
use proptest::prelude::*;

fn square_with_diagonals() -> PlanarGraph<()> {
    let mut g = PlanarGraph::new();
    let c = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    for i in 0..4 {
        g.add_edge_with_vertices(c[i], c[(i + 1) % 4], ()).unwrap();
    }
    g.add_edge_with_vertices(c[0], c[2], ()).unwrap();
    g.add_edge_with_vertices(c[1], c[3], ()).unwrap();
    g
}

#[test]
fn construction_rejects_degenerate_and_out_of_range_input() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    assert!(g.add_edge_with_vertices((0.0, 0.0), (0.0, 0.0), ()).is_none());
    let a = g.add_node((0.0, 0.0));
    assert!(g.add_edge_from_existing_vertices(a, a, ()).is_none());
    assert!(g.add_edge_from_existing_vertices(a, 7, ()).is_none());
    assert!(g.add_edge_from_vertex(9, (1.0, 0.0), ()).is_none());
    let e = g.add_edge_from_vertex(a, (1.0, 0.0), ()).unwrap();
    assert_eq!(g.edge(e).unwrap().nodes, [0, 1]);
    assert!(g.remove_edge(5).is_none());
    assert!(g.remove_edge(e).is_some());
    assert!(g.edges().is_empty());
}

#[test]
fn merge_respects_epsilon() {
    let build = || {
        let mut g: PlanarGraph<()> = PlanarGraph::new();
        g.add_edge_with_vertices((0.5, 0.5), (0.0, 0.0), ()).unwrap();
        g.add_edge_with_vertices((0.5 + 0.001, 0.5), (1.0, 1.0), ()).unwrap();
        g
    };
    let mut loose = build();
    assert_eq!(loose.merge_duplicate_vertices(0.003), 1);
    assert_eq!(loose.nodes().len(), 3);
    // Both edges now meet at the surviving first node.
    assert!(loose.edges().iter().all(|e| e.contains_node(0)));

    let mut tight = build();
    assert_eq!(tight.merge_duplicate_vertices(0.0001), 0);
    assert_eq!(tight.nodes().len(), 4);
}

#[test]
fn clean_drops_collapsed_and_duplicate_edges() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    g.add_edge_with_vertices((0.0, 0.0), (1.0, 0.0), ()).unwrap();
    g.add_edge_with_vertices((1.0, 0.0), (0.0, 0.0), ()).unwrap();
    g.add_edge_with_vertices((2.0, 2.0), (2.001, 2.0), ()).unwrap();
    g.clean(MERGE_EPSILON);
    assert_eq!(g.edges().len(), 1);
    assert_eq!(g.nodes().len(), 2);
}

#[test]
fn adjacency_is_angle_sorted_and_walks_clockwise() {
    let mut g = square_with_diagonals();
    g.clean(MERGE_EPSILON);
    let origin = g.nearest_node(XY::new(0.0, 0.0)).unwrap();
    let angles: Vec<f64> = g.node(origin).unwrap().adjacency().iter().map(|a| a.angle).collect();
    assert_eq!(angles.len(), 3);
    assert!(angles.windows(2).all(|w| w[0] <= w[1]));

    let right = g.nearest_node(XY::new(1.0, 0.0)).unwrap();
    let up = g.nearest_node(XY::new(0.0, 1.0)).unwrap();
    let diag = g.nearest_node(XY::new(1.0, 1.0)).unwrap();
    // Arriving at the origin from the top neighbour, the next edge clockwise is the diagonal.
    assert_eq!(g.clockwise_neighbor_around(origin, up).unwrap().node, diag);
    assert_eq!(g.clockwise_neighbor_around(origin, diag).unwrap().node, right);
}

#[test]
fn shared_endpoint_edges_do_not_intersect() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    let a = g.add_node((0.0, 0.0));
    let b = g.add_node((1.0, 0.0));
    let c = g.add_node((0.0, 1.0));
    let e1 = g.add_edge_from_existing_vertices(a, b, ()).unwrap();
    let e2 = g.add_edge_from_existing_vertices(a, c, ()).unwrap();
    assert!(g.edges_intersect(e1, e2, EPSILON).is_none());
}

#[test]
fn chop_splits_crossing_diagonals_into_four_triangles() {
    let mut g = square_with_diagonals();
    g.clean(MERGE_EPSILON);
    let points = g.chop(EPSILON);
    assert_eq!(points.len(), 1);
    assert!(points[0].equivalent(&XY::new(0.5, 0.5), 1e-12));
    g.clean(MERGE_EPSILON);
    assert_eq!(g.nodes().len(), 5);
    assert_eq!(g.edges().len(), 8);
    assert_eq!(g.faces().len(), 4);
    assert!(g.faces().iter().all(|f| f.nodes.len() == 3 && f.edges.len() == 3));
    let center = g.nearest_node(XY::new(0.5, 0.5)).unwrap();
    assert_eq!(g.junction(center).unwrap().sectors.len(), 4);
}

#[test]
fn chop_handles_t_junctions() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    g.add_edge_with_vertices((0.0, 0.0), (1.0, 0.0), ()).unwrap();
    g.add_edge_with_vertices((0.5, 0.0), (0.5, 1.0), ()).unwrap();
    let points = g.chop(EPSILON);
    assert_eq!(points.len(), 1);
    g.clean(MERGE_EPSILON);
    assert_eq!(g.edges().len(), 3);
    let t = g.nearest_node(XY::new(0.5, 0.0)).unwrap();
    assert_eq!(g.node(t).unwrap().degree(), 3);
}

#[test]
fn faces_of_split_square() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    let n: Vec<NodeIndex> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .into_iter()
        .map(|p| g.add_node(p))
        .collect();
    for i in 0..4 {
        g.add_edge_from_existing_vertices(n[i], n[(i + 1) % 4], ()).unwrap();
    }
    let diag = g.add_edge_from_existing_vertices(n[0], n[2], ()).unwrap();
    g.refresh_adjacencies();
    g.generate_faces();
    assert_eq!(g.faces().len(), 2);
    assert_eq!(g.faces_adjacent_across(diag).len(), 2);
    let adjacency = g.face_adjacency();
    assert_eq!(adjacency[0], vec![(1, diag)]);
    let lower = g.face_containing(XY::new(0.75, 0.25)).unwrap();
    let c = g.face_centroid(lower).unwrap();
    assert!(c.equivalent(&XY::new(2.0 / 3.0, 1.0 / 3.0), 1e-12));
    assert!(g.face_containing(XY::new(2.0, 2.0)).is_none());
}

#[test]
fn dangling_edges_alone_bound_no_face() {
    let mut g: PlanarGraph<()> = PlanarGraph::new();
    g.add_edge_with_vertices((0.0, 0.0), (1.0, 0.0), ()).unwrap();
    g.clean(MERGE_EPSILON);
    assert!(g.faces().is_empty());
}

#[test]
fn nearest_queries() {
    let mut g = square_with_diagonals();
    g.clean(MERGE_EPSILON);
    let (e, p) = g.nearest_edge(XY::new(0.5, -0.2)).unwrap();
    assert!(p.equivalent(&XY::new(0.5, 0.0), 1e-12));
    let seg = g.edge_segment(e).unwrap();
    assert!((seg.a.y).abs() < 1e-12 && (seg.b.y).abs() < 1e-12);
    assert!(PlanarGraph::<()>::new().nearest_node(XY::new(0.0, 0.0)).is_none());
}

fn segment() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn clean_is_idempotent(segs in prop::collection::vec(segment(), 1..8)) {
        let mut g: PlanarGraph<()> = PlanarGraph::new();
        for (x1, y1, x2, y2) in segs {
            let _ = g.add_edge_with_vertices((x1, y1), (x2, y2), ());
        }
        g.chop(EPSILON);
        g.clean(MERGE_EPSILON);
        let once = g.clone();
        g.clean(MERGE_EPSILON);
        prop_assert_eq!(once.nodes().len(), g.nodes().len());
        prop_assert_eq!(once.edges().len(), g.edges().len());
        prop_assert_eq!(once.faces().len(), g.faces().len());
        for (a, b) in once.nodes().iter().zip(g.nodes()) {
            prop_assert!(a.xy().equivalent(&b.xy(), 1e-12));
        }
        for (a, b) in once.edges().iter().zip(g.edges()) {
            prop_assert_eq!(a.nodes, b.nodes);
        }
    }

    #[test]
    fn chop_leaves_no_interior_crossings(segs in prop::collection::vec(segment(), 2..7)) {
        let mut g: PlanarGraph<()> = PlanarGraph::new();
        for (x1, y1, x2, y2) in segs {
            let _ = g.add_edge_with_vertices((x1, y1), (x2, y2), ());
        }
        g.chop(EPSILON);
        for i in 0..g.edges().len() {
            for j in (i + 1)..g.edges().len() {
                if let Some(p) = g.edges_intersect(i, j, EPSILON) {
                    let si = g.edge_segment(i).unwrap();
                    let sj = g.edge_segment(j).unwrap();
                    let at_end = |s: &crate::geom2::Edge| {
                        s.a.equivalent(&p, EPSILON) || s.b.equivalent(&p, EPSILON)
                    };
                    prop_assert!(at_end(&si) && at_end(&sj));
                }
            }
        }
    }
}
