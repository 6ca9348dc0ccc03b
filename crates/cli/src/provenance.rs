//! Sidecar records for CLI artifacts.
//!
//! Every file the CLI writes (a hull JSON or a sampled cloud CSV) gets a
//! `<stem>.provenance.json` next to it, holding enough to regenerate it: the
//! code revision, the `graham` version, the command parameters, and the run tag.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of the command that produced an artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Params {
    /// `hull run`.
    Run {
        input: String,
        sort: String,
        degenerate: String,
    },
    /// `hull sample`.
    Sample {
        count: usize,
        shape: String,
        extent: f64,
        lattice: bool,
        seed: u64,
        index: u64,
    },
    /// `hull report` has no inputs.
    Report,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// On-disk layout of a sidecar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub graham_version: String,
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub callsite: Option<Callsite>,
    pub params: Params,
    pub outputs: Vec<String>,
}

impl Sidecar {
    /// Record for `params` with no outputs and no callsite yet.
    pub fn new(params: Params, tag: Option<String>) -> Self {
        Self {
            code_rev: git_rev(),
            graham_version: graham::VERSION.to_string(),
            tag,
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact` and return its path. The caller's location is recorded.
#[track_caller]
pub fn write_sidecar(artifact: &Path, params: Params, tag: Option<String>) -> Result<PathBuf> {
    let caller = Location::caller();
    let mut record = Sidecar::new(params, tag);
    record.callsite = Some(Callsite {
        file: caller.file().to_string(),
        line: caller.line(),
    });
    record.outputs.push(artifact.to_string_lossy().into_owned());

    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let body = serde_json::to_vec_pretty(&record).context("encoding sidecar")?;
    fs::write(&path, body).with_context(|| format!("writing sidecar {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), "provenance written");
    Ok(path)
}

/// `dir/hull.json` -> `dir/hull.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision of the running code: `GIT_COMMIT` at build or run time, else `git rev-parse`.
pub fn git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
