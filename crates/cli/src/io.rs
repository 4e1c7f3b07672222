//! JSON file formats for polygons, scenes, pointer traces and frames.
//!
//! Points are `{ "x": f64, "y": f64 }` objects on the wire and
//! `nalgebra::Vector2<f64>` inside the library.

use anyhow::{Context, Result};
use nalgebra::Vector2;
use polysnap::api::{BoundaryHit, Frame, PointerEvent, Polygon2, Scene};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
}

impl From<PointDto> for Vector2<f64> {
    fn from(p: PointDto) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for PointDto {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// `{ "shapes": [[{x,y}, ...], ...] }`
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneFile {
    pub shapes: Vec<Vec<PointDto>>,
}

/// One entry of a pointer trace file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TraceEvent {
    Down,
    Move { x: f64, y: f64 },
    Up,
}

impl From<TraceEvent> for PointerEvent {
    fn from(e: TraceEvent) -> Self {
        match e {
            TraceEvent::Down => PointerEvent::Down,
            TraceEvent::Move { x, y } => PointerEvent::Move(Vector2::new(x, y)),
            TraceEvent::Up => PointerEvent::Up,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HitDto {
    pub point: PointDto,
    pub edge: usize,
    pub t: f64,
    pub distance: f64,
}

impl From<BoundaryHit> for HitDto {
    fn from(h: BoundaryHit) -> Self {
        Self {
            point: h.point.into(),
            edge: h.edge,
            t: h.t,
            distance: h.distance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameDto {
    /// Index of the trace event that produced this frame.
    pub event: usize,
    pub markers: Vec<PointDto>,
    pub active: Option<usize>,
    pub visible: Vec<usize>,
}

impl FrameDto {
    pub fn new(event: usize, frame: Frame) -> Self {
        Self {
            event,
            markers: frame.markers.into_iter().map(PointDto::from).collect(),
            active: frame.active,
            visible: frame.visible,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Vertex ring from `[{x,y}, ...]`; a repeated closing vertex is dropped.
pub fn read_polygon(path: &Path) -> Result<Polygon2> {
    let pts: Vec<PointDto> = read_json(path)?;
    let poly = Polygon2::from_closed_ring(pts.into_iter().map(Vector2::from).collect())
        .with_context(|| format!("invalid polygon in {}", path.display()))?;
    Ok(poly)
}

pub fn read_scene(path: &Path) -> Result<Scene> {
    let file: SceneFile = read_json(path)?;
    let shapes = file
        .shapes
        .into_iter()
        .enumerate()
        .map(|(i, ring)| {
            Polygon2::from_closed_ring(ring.into_iter().map(Vector2::from).collect())
                .with_context(|| format!("invalid shape {} in {}", i, path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Scene::new(shapes))
}

pub fn read_trace(path: &Path) -> Result<Vec<TraceEvent>> {
    read_json(path)
}
