//! Replay sidecar: `<frames>.provenance.json` next to a replay output.
//!
//! Records which scene and trace produced the frames, how many events were
//! handled, and every change of the active shape, so a frames file can be
//! checked against its inputs without re-running the replay.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::FrameDto;

/// Change of the active shape between consecutive frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transition {
    /// Trace event index of the frame where the change was observed.
    pub event: usize,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Inputs of one replay run.
pub struct ReplayInputs<'a> {
    pub scene: Option<&'a Path>,
    pub shapes: usize,
    pub trace: &'a Path,
    pub hover: bool,
    pub events: usize,
}

#[derive(Debug, Serialize)]
pub struct ReplayRecord {
    pub code_rev: String,
    pub polysnap: &'static str,
    pub callsite: Callsite,
    /// `None` for the built-in demo scene.
    pub scene: Option<String>,
    pub shapes: usize,
    pub trace: String,
    pub hover: bool,
    pub events: usize,
    pub frames: usize,
    pub final_active: Option<usize>,
    pub transitions: Vec<Transition>,
    pub output: String,
}

/// Active-shape changes along `frames`; the tracker starts with no active shape.
pub fn transitions(frames: &[FrameDto]) -> Vec<Transition> {
    let mut prev = None;
    let mut out = Vec::new();
    for f in frames {
        if f.active != prev {
            out.push(Transition {
                event: f.event,
                from: prev,
                to: f.active,
            });
            prev = f.active;
        }
    }
    out
}

/// Write the replay record for `frames_path`; returns the sidecar path.
#[track_caller]
pub fn write_replay_sidecar(
    frames_path: &Path,
    inputs: ReplayInputs<'_>,
    frames: &[FrameDto],
) -> Result<PathBuf> {
    let caller = Location::caller();
    let record = ReplayRecord {
        code_rev: git_rev(),
        polysnap: polysnap::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        scene: inputs.scene.map(|p| p.display().to_string()),
        shapes: inputs.shapes,
        trace: inputs.trace.display().to_string(),
        hover: inputs.hover,
        events: inputs.events,
        frames: frames.len(),
        final_active: frames.last().and_then(|f| f.active),
        transitions: transitions(frames),
        output: frames_path.display().to_string(),
    };
    let path = sidecar_path(frames_path);
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(frames_path: &Path) -> PathBuf {
    let stem = frames_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frames".to_string());
    frames_path.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
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
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
