use anyhow::{Context, Result};
use origami::CreasePattern;
use std::fs;
use std::path::Path;

/// Read and parse a `.fold` document.
pub fn read_pattern<P: AsRef<Path>>(path: P) -> Result<CreasePattern> {
    let path = path.as_ref();
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    CreasePattern::import_fold_json(&json)
        .with_context(|| format!("parsing FOLD document {}", path.display()))
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}

pub fn write_pattern<P: AsRef<Path>>(path: P, cp: &CreasePattern) -> Result<()> {
    let json = cp.export_fold_json().context("serialising FOLD document")?;
    write_output(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use origami::cp::fixtures::bird_base;
    use tempfile::tempdir;

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/deeper/a.svg");
        write_output(&out, b"<svg/>").unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"<svg/>");
    }

    #[test]
    fn pattern_survives_a_trip_through_disk() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("bird.fold");
        write_pattern(&out, &bird_base()).unwrap();
        let back = read_pattern(&out).unwrap();
        assert_eq!(back.graph().nodes().len(), 17);
        assert_eq!(back.graph().edges().len(), 40);
    }

    #[test]
    fn unreadable_inputs_name_the_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.fold");
        let err = read_pattern(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("missing.fold"));

        let broken = dir.path().join("broken.fold");
        fs::write(&broken, "{}").unwrap();
        let err = read_pattern(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("vertices_coords"));
    }
}
