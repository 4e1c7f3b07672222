//! Drag-and-snap interaction over a scene of polygons.
//!
//! Purpose
//! - Compose the two pure queries into the per-event workflow: on every
//!   pointer move, snap one marker per shape to that shape's boundary and
//!   decide which shape (if any) the cursor is inside.
//! - Own all mutable state (markers, active shape, drag flag) so the
//!   geometry stays free of it.
//!
//! Rules
//! - Containment is evaluated on the raw cursor, never on the snapped marker.
//! - Entering a shape makes it active; leaving the active shape clears it.
//!   Leaving some other shape leaves `active` alone.
//! - The active shape's marker is hidden (`Frame::visible` skips it).
//!
//! Code cross-refs: `geom2::{Polygon2, nearest_boundary_point, point_in_polygon}`

use nalgebra::{vector, Vector2};

use crate::geom2::{GeomError, Polygon2};


/// Shapes taking part in the interaction, in draw order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<Polygon2>,
}

impl Scene {
    pub fn new(shapes: Vec<Polygon2>) -> Self {
        Self { shapes }
    }

    /// Rectangle, triangle, pentagon and hexagon laid out on a 600×550 canvas
    /// (screen coordinates, y down).
    pub fn demo() -> Self {
        let rings: [&[(f64, f64)]; 4] = [
            &[(60.0, 20.0), (60.0, 180.0), (240.0, 180.0), (240.0, 20.0)],
            &[(450.0, 20.0), (530.0, 180.0), (370.0, 180.0)],
            &[
                (150.0, 380.0),
                (220.0, 430.0),
                (200.0, 520.0),
                (100.0, 520.0),
                (80.0, 430.0),
            ],
            &[
                (500.0, 380.0),
                (560.0, 410.0),
                (580.0, 480.0),
                (530.0, 530.0),
                (470.0, 530.0),
                (420.0, 480.0),
                (440.0, 410.0),
            ],
        ];
        let shapes = rings
            .iter()
            .map(|ring| Polygon2::from_trusted(ring.iter().map(|&(x, y)| vector![x, y]).collect()))
            .collect();
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Tracker configuration.
#[derive(Clone, Copy, Debug)]
pub struct TrackCfg {
    /// Only handle moves between `pointer_down` and `pointer_up`.
    pub require_drag: bool,
}

impl Default for TrackCfg {
    fn default() -> Self {
        Self { require_drag: true }
    }
}

/// Pointer input accepted by `Tracker::apply`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down,
    Move(Vector2<f64>),
    Up,
}

/// Snapshot after a handled pointer move.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// One snapped marker per shape, in scene order.
    pub markers: Vec<Vector2<f64>>,
    /// Shape the cursor is inside, if any.
    pub active: Option<usize>,
    /// Indices of markers to draw (every shape except the active one).
    pub visible: Vec<usize>,
}

/// Per-scene interaction state machine.
#[derive(Clone, Debug)]
pub struct Tracker {
    scene: Scene,
    cfg: TrackCfg,
    markers: Vec<Vector2<f64>>,
    active: Option<usize>,
    dragging: bool,
}

impl Tracker {
    /// Markers start on each shape's first vertex.
    pub fn new(scene: Scene, cfg: TrackCfg) -> Self {
        let markers = scene.shapes.iter().map(|s| s.verts()[0]).collect();
        Self {
            scene,
            cfg,
            markers,
            active: None,
            dragging: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn markers(&self) -> &[Vector2<f64>] {
        &self.markers
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer_down(&mut self) {
        self.dragging = true;
    }

    /// Ends the drag session; markers and the active shape are kept.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Handle a cursor move. Returns `None` when the move is ignored
    /// (outside a drag with `require_drag` set).
    ///
    /// A non-finite cursor is rejected before any state changes.
    pub fn pointer_move(&mut self, cursor: Vector2<f64>) -> Result<Option<Frame>, GeomError> {
        if !(cursor.x.is_finite() && cursor.y.is_finite()) {
            return Err(GeomError::NonFiniteQuery);
        }
        if self.cfg.require_drag && !self.dragging {
            return Ok(None);
        }
        for (i, shape) in self.scene.shapes.iter().enumerate() {
            self.markers[i] = shape.nearest_boundary_point(cursor)?;
            let inside = shape.contains(cursor)?;
            if inside {
                if self.active != Some(i) {
                    tracing::debug!(shape = i, "pointer entered shape");
                }
                self.active = Some(i);
            } else if self.active == Some(i) {
                tracing::debug!(shape = i, "pointer left shape");
                self.active = None;
            }
        }
        Ok(Some(self.frame()))
    }

    pub fn apply(&mut self, event: PointerEvent) -> Result<Option<Frame>, GeomError> {
        match event {
            PointerEvent::Down => {
                self.pointer_down();
                Ok(None)
            }
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up => {
                self.pointer_up();
                Ok(None)
            }
        }
    }

    pub fn frame(&self) -> Frame {
        let visible = (0..self.markers.len())
            .filter(|&i| Some(i) != self.active)
            .collect();
        Frame {
            markers: self.markers.clone(),
            active: self.active,
            visible,
        }
    }
}
