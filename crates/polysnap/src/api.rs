//! Curated API surface.
//!
//! Re-exports grouped by concern so callers (the CLI, benches, examples) do
//! not depend on the internal module layout.

// Queries
pub use crate::geom2::{
    closest_point_on_segment, edges, nearest_boundary_hit, nearest_boundary_point,
    point_in_polygon, BoundaryHit, GeomError, Polygon2,
};
// Reference geometry
pub use crate::geom2::{convex_hull, halfplanes_ccw, signed_area, Hs2};
// Random rings
pub use crate::geom2::rand::{
    draw_convex_ring, draw_star_ring, RadialCfg, ReplayToken as RingReplay, VertexCount,
};
// Interaction
pub use crate::interact::{Frame, PointerEvent, Scene, TrackCfg, Tracker};

use nalgebra::Vector2;

/// Distance from `query` to the boundary of `verts`.
///
/// Pre: `verts` non-empty, all coordinates finite.
/// Post: `0.0` iff `query` lies on the boundary.
pub fn boundary_distance(verts: &[Vector2<f64>], query: Vector2<f64>) -> Result<f64, GeomError> {
    nearest_boundary_hit(verts, query).map(|hit| hit.distance)
}
