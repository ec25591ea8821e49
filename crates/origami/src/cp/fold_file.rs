//! FOLD (`.fold` JSON) import/export.
//!
//! Fold angles are stored in degrees with mountains negated; flat folds
//! (180°) read back as `angle: None`. Import keeps vertex and edge order so
//! indices map one to one.

use serde::{Deserialize, Serialize};

use crate::geom2::{ConvexPolygon, XY};
use crate::graph::PlanarGraph;

use super::pattern::CreasePattern;
use super::types::{Crease, Orientation};

pub const FOLD_SPEC_VERSION: f64 = 1.1;

#[derive(Debug, thiserror::Error)]
pub enum FoldError {
    #[error("invalid FOLD json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("FOLD document has no `{0}`")]
    MissingField(&'static str),
    #[error("edge {index} does not join two distinct known vertices")]
    BadEdge { index: usize },
    #[error("vertex {index} needs two or three coordinates")]
    BadVertex { index: usize },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FoldFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_spec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_creator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices_coords: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_vertices: Option<Vec<Vec<usize>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges_assignment: Vec<String>,
    #[serde(
        default,
        rename = "edges_foldAngle",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub edges_fold_angle: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faces_vertices: Vec<Vec<usize>>,
}

impl CreasePattern {
    pub fn to_fold(&self) -> FoldFile {
        let edges = self.graph.edges();
        FoldFile {
            file_spec: Some(FOLD_SPEC_VERSION),
            file_creator: Some(format!("origami {}", crate::VERSION)),
            frame_classes: vec!["creasePattern".to_string()],
            frame_attributes: vec!["2D".to_string()],
            vertices_coords: Some(self.graph.nodes().iter().map(|n| vec![n.x, n.y]).collect()),
            edges_vertices: Some(edges.iter().map(|e| e.nodes.to_vec()).collect()),
            edges_assignment: edges
                .iter()
                .map(|e| e.data.orientation.fold_assignment().to_string())
                .collect(),
            edges_fold_angle: edges.iter().map(|e| e.data.signed_angle()).collect(),
            faces_vertices: self.graph.faces().iter().map(|f| f.nodes.clone()).collect(),
        }
    }

    pub fn export_fold_json(&self) -> Result<String, FoldError> {
        Ok(serde_json::to_string_pretty(&self.to_fold())?)
    }

    /// Build a pattern from a FOLD document. The boundary is the hull of the
    /// border vertices (all vertices if there are none).
    pub fn from_fold(fold: &FoldFile) -> Result<CreasePattern, FoldError> {
        let coords = fold
            .vertices_coords
            .as_ref()
            .ok_or(FoldError::MissingField("vertices_coords"))?;
        let edges = fold
            .edges_vertices
            .as_ref()
            .ok_or(FoldError::MissingField("edges_vertices"))?;

        let declared_3d = fold.frame_attributes.iter().any(|a| a == "3D");
        let mut lifted = false;
        let mut graph: PlanarGraph<Crease> = PlanarGraph::new();
        for (index, c) in coords.iter().enumerate() {
            let p = XY::try_from_slice(c).ok_or(FoldError::BadVertex { index })?;
            lifted |= p.z.abs() > f64::EPSILON;
            graph.add_node(p.flatten());
        }
        if declared_3d || lifted {
            tracing::warn!(
                vertices = coords.len(),
                "FOLD document is 3D; projecting orthographically onto the plane"
            );
        }

        for (index, pair) in edges.iter().enumerate() {
            let [a, b] = pair.as_slice() else {
                return Err(FoldError::BadEdge { index });
            };
            let orientation = fold
                .edges_assignment
                .get(index)
                .and_then(|s| Orientation::from_fold_assignment(s))
                .unwrap_or_default();
            let angle = fold
                .edges_fold_angle
                .get(index)
                .map(|a| a.abs())
                .filter(|a| orientation.is_fold() && (a - 180.0).abs() > 1e-9);
            let crease = Crease { orientation, angle };
            graph
                .add_edge_from_existing_vertices(*a, *b, crease)
                .ok_or(FoldError::BadEdge { index })?;
        }
        graph.refresh_adjacencies();
        graph.generate_faces();

        let border: Vec<XY> = graph
            .edges()
            .iter()
            .filter(|e| e.data.orientation == Orientation::Border)
            .flat_map(|e| e.nodes)
            .filter_map(|n| graph.node_xy(n))
            .collect();
        let all: Vec<XY> = graph.nodes().iter().map(|n| n.xy()).collect();
        let mut cp = CreasePattern::new();
        let eps = cp.cfg.eps;
        let boundary = ConvexPolygon::convex_hull(&border, eps)
            .or_else(|| ConvexPolygon::convex_hull(&all, eps))
            .unwrap_or_else(|| ConvexPolygon::square(1.0));
        cp.boundary = boundary;
        cp.graph = graph;
        tracing::debug!(
            vertices = cp.graph.nodes().len(),
            edges = cp.graph.edges().len(),
            faces = cp.graph.faces().len(),
            "imported FOLD"
        );
        Ok(cp)
    }

    pub fn import_fold_json(json: &str) -> Result<CreasePattern, FoldError> {
        let fold: FoldFile = serde_json::from_str(json)?;
        Self::from_fold(&fold)
    }
}
