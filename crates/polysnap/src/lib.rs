//! Polygon snapping and containment.
//!
//! Two pure O(n) queries on simple (possibly concave) polygons, plus the
//! drag-and-snap interaction that composes them:
//! - `geom2::nearest_boundary_point`: closest point on the polygon boundary.
//! - `geom2::point_in_polygon`: ray-casting parity containment.
//! - `interact::Tracker`: per-event marker snapping and active-shape tracking.
//!
//! API Policy
//! - `api` and `prelude` are the curated import surfaces; module paths may move.

pub mod api;
pub mod geom2;
pub mod interact;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        nearest_boundary_hit, nearest_boundary_point, point_in_polygon, BoundaryHit, GeomError,
        Polygon2,
    };
    pub use crate::interact::{Frame, PointerEvent, Scene, TrackCfg, Tracker};
    pub use nalgebra::Vector2 as Vec2;
}
