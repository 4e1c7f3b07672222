use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use polysnap::api::{PointerEvent, Scene, TrackCfg, Tracker};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{FrameDto, HitDto};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon snapping and containment queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Nearest boundary point of a polygon to (x, y)
    Nearest {
        /// JSON array of {x, y} vertices
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Ray-casting containment of (x, y)
    Contains {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Replay a pointer trace through the drag-and-snap tracker
    Replay {
        /// Scene file ({"shapes": [...]}); defaults to the demo scene
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long)]
        trace: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Handle moves even without a preceding "down" event
        #[arg(long, default_value_t = false)]
        hover: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Nearest { polygon, x, y } => nearest(&polygon, Vector2::new(x, y)),
        Action::Contains { polygon, x, y } => contains(&polygon, Vector2::new(x, y)),
        Action::Replay {
            scene,
            trace,
            out,
            hover,
        } => {
            let frames = replay(scene.as_deref(), &trace, &out, hover)?;
            tracing::info!(frames, out = %out.display(), "replay_done");
            Ok(())
        }
        Action::Report => report(),
    }
}

fn nearest(polygon: &Path, query: Vector2<f64>) -> Result<()> {
    tracing::info!(polygon = %polygon.display(), x = query.x, y = query.y, "nearest");
    let poly = io::read_polygon(polygon)?;
    let hit = poly.nearest_boundary_hit(query)?;
    println!("{}", serde_json::to_string_pretty(&HitDto::from(hit))?);
    Ok(())
}

fn contains(polygon: &Path, query: Vector2<f64>) -> Result<()> {
    tracing::info!(polygon = %polygon.display(), x = query.x, y = query.y, "contains");
    let poly = io::read_polygon(polygon)?;
    let inside = poly.contains(query)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "inside": inside }))?
    );
    Ok(())
}

/// Replays `trace` and writes one frame per handled move to `out`, plus a
/// provenance sidecar. Returns the number of frames written.
fn replay(scene: Option<&Path>, trace: &Path, out: &Path, hover: bool) -> Result<usize> {
    let scene_obj = match scene {
        Some(path) => io::read_scene(path)?,
        None => Scene::demo(),
    };
    let shapes = scene_obj.len();
    tracing::info!(
        scene = ?scene.map(Path::display).map(|d| d.to_string()),
        shapes,
        trace = %trace.display(),
        "replay"
    );
    let events = io::read_trace(trace)?;
    let mut tracker = Tracker::new(
        scene_obj,
        TrackCfg {
            require_drag: !hover,
        },
    );
    let mut frames = Vec::new();
    for (i, ev) in events.iter().enumerate() {
        let frame = tracker
            .apply(PointerEvent::from(*ev))
            .with_context(|| format!("trace event {i}"))?;
        if let Some(frame) = frame {
            frames.push(FrameDto::new(i, frame));
        }
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&frames)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let inputs = provenance::ReplayInputs {
        scene,
        shapes,
        trace,
        hover,
        events: events.len(),
    };
    provenance::write_replay_sidecar(out, inputs, &frames)?;
    Ok(frames.len())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::git_rev(),
        "polysnap": polysnap::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
