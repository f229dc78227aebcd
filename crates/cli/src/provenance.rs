use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What went into a rendered image.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// Write `<image stem>.provenance.json` next to `image`: git commit, callsite,
/// crate version, inputs, params, and the image path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(image: P, payload: Payload) -> Result<PathBuf> {
    let image = image.as_ref();
    let sidecar = sidecar_path(image);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": trajplot::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "inputs": payload.inputs,
        "params": payload.params,
        "outputs": [image.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(image: &Path) -> PathBuf {
    let mut name = image
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("image"));
    name.push(".provenance.json");
    image.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build or run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
