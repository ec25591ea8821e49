use anyhow::{bail, Context, Result};
use origami::cp::fixtures::bird_base;
use origami::CreasePattern;
use serde::Serialize;
use std::path::Path;

use crate::files::{read_pattern, write_output, write_pattern};

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub flat_foldable: bool,
    /// Interior nodes failing Maekawa or Kawasaki.
    pub failing_nodes: Vec<usize>,
}

pub fn check_summary(cp: &CreasePattern) -> CheckSummary {
    let failing_nodes = cp
        .foldability_report()
        .into_iter()
        .filter(|r| !(r.maekawa && r.kawasaki))
        .map(|r| r.node)
        .collect();
    CheckSummary {
        vertices: cp.graph().nodes().len(),
        edges: cp.graph().edges().len(),
        faces: cp.graph().faces().len(),
        flat_foldable: cp.flat_foldable(),
        failing_nodes,
    }
}

pub fn check(input: &Path, clean: bool) -> Result<CheckSummary> {
    let mut cp = read_pattern(input)?;
    if clean {
        cp.clean();
    }
    let summary = check_summary(&cp);
    tracing::info!(
        vertices = summary.vertices,
        edges = summary.edges,
        flat_foldable = summary.flat_foldable,
        "check"
    );
    Ok(summary)
}

/// Per-node Maekawa/Kawasaki results as pretty JSON.
pub fn report(input: &Path) -> Result<String> {
    let cp = read_pattern(input)?;
    Ok(serde_json::to_string_pretty(&cp.foldability_report())?)
}

pub fn fold(input: &Path, out: &Path, root: Option<usize>) -> Result<()> {
    let mut cp = read_pattern(input)?;
    cp.clean();
    if let Some(r) = root {
        let faces = cp.graph().faces().len();
        if r >= faces {
            bail!("root face {r} out of range (pattern has {faces} faces)");
        }
    }
    let state = cp
        .folded_state(root)
        .context("pattern has no faces to fold")?;
    let unreached = state.face_matrices.iter().filter(|m| m.is_none()).count();
    if unreached > 0 {
        tracing::warn!(unreached, "faces not reachable from the root stay unfolded");
    }
    write_pattern(out, &cp.folded_cp_from(&state))
}

pub fn svg(input: &Path, out: &Path, size: f64) -> Result<()> {
    let cp = read_pattern(input)?;
    write_output(out, cp.to_svg_string(size).as_bytes())
}

pub fn write_bird_base(out: &Path) -> Result<()> {
    write_pattern(out, &bird_base())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bird_base_checks_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bird.fold");
        write_bird_base(&path).unwrap();
        let summary = check(&path, false).unwrap();
        assert!(summary.flat_foldable);
        assert!(summary.failing_nodes.is_empty());
        assert_eq!(summary.vertices, 17);

        let json = report(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 17);
    }

    #[test]
    fn svg_and_fold_write_outputs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bird.fold");
        write_bird_base(&input).unwrap();

        let picture = dir.path().join("out/bird.svg");
        svg(&input, &picture, 200.0).unwrap();
        assert!(std::fs::read_to_string(&picture).unwrap().contains("<svg"));

        let folded = dir.path().join("out/folded.fold");
        fold(&input, &folded, None).unwrap();
        let back = read_pattern(&folded).unwrap();
        assert_eq!(back.graph().edges().len(), 40);

        assert!(fold(&input, &folded, Some(10_000)).is_err());
    }
}
