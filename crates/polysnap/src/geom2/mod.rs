//! 2D polygon queries: nearest boundary point and ray-casting containment.
//!
//! Purpose
//! - Answer the two per-pointer-move questions of the snapping workflow:
//!   where is the closest point on a polygon's boundary, and is the cursor
//!   inside the polygon.
//! - Both are pure O(n) passes over a closed vertex ring; winding is not
//!   assumed and nothing is cached between calls.
//!
//! Conventions
//! - Rings are `&[Vector2<f64>]`, implicitly closed (last vertex connects to
//!   the first). `Polygon2` is the validated owning wrapper.
//! - Empty rings and non-finite coordinates are rejected with `GeomError`
//!   before any arithmetic runs.
//!
//! Code cross-refs: `nearest`, `contains`, `ring::edges`, `rand`

mod contains;
mod nearest;
pub mod rand;
mod ring;
mod types;
mod util;

pub use contains::point_in_polygon;
pub use nearest::{closest_point_on_segment, nearest_boundary_hit, nearest_boundary_point};
pub use ring::{edges, Polygon2};
pub use types::{BoundaryHit, GeomError, Hs2};
pub use util::{convex_hull, halfplanes_ccw, signed_area};

#[cfg(test)]
mod tests;
