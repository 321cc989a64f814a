use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of a `<stem>.provenance.json` sidecar.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub crate_version: &'static str,
    pub command: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Sidecar {
    /// Stamp revision, library version and the caller's location.
    #[track_caller]
    pub fn new(command: &'static str, params: Value) -> Self {
        let at = Location::caller();
        Self {
            code_rev: current_git_rev(),
            crate_version: eulerian::VERSION,
            command,
            callsite: Callsite {
                file: at.file(),
                line: at.line(),
            },
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar next to `artifact`, listing it as the output.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut sidecar: Sidecar) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    sidecar.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/circuits.json"));
        assert_eq!(derived, Path::new("/tmp/out/circuits.provenance.json"));
    }

    #[test]
    fn sidecar_lists_artifact_and_version() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("a.json");
        let path = write_sidecar(&artifact, Sidecar::new("solve", json!({"algo": "all"}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["crate_version"], eulerian::VERSION);
        assert_eq!(parsed["command"], "solve");
        assert_eq!(parsed["params"]["algo"], "all");
    }
}
