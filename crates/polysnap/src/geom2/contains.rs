//! Point-in-polygon via ray-casting parity.
//!
//! A horizontal ray leaves the query toward +x; the point is inside iff it
//! crosses an odd number of edges. An edge is a candidate only if exactly one
//! endpoint lies strictly above the query (`y > q.y`), which counts a vertex
//! on the ray once and never counts horizontal edges. Points exactly on the
//! boundary get whatever parity falls out; that ambiguity is accepted.

use nalgebra::Vector2;

use super::ring::edges;
use super::types::{check_inputs, GeomError};

/// Does the ray from `q` toward +x cross the edge `(p1, p2)`?
#[inline]
fn ray_crosses_edge(q: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> bool {
    if (p1.y > q.y) == (p2.y > q.y) {
        return false;
    }
    // Order endpoints by y so both windings round identically.
    let (lo, hi) = if p1.y < p2.y { (p1, p2) } else { (p2, p1) };
    let slope = (hi.x - lo.x) / (hi.y - lo.y);
    let cross_x = lo.x + slope * (q.y - lo.y);
    q.x < cross_x
}

/// Is `query` inside the polygon `verts`?
///
/// Rings with fewer than three vertices enclose no area and return `false`.
pub fn point_in_polygon(verts: &[Vector2<f64>], query: Vector2<f64>) -> Result<bool, GeomError> {
    check_inputs(verts, query)?;
    Ok(contains_unchecked(verts, query))
}

/// Caller guarantees finite coordinates.
pub(crate) fn contains_unchecked(verts: &[Vector2<f64>], query: Vector2<f64>) -> bool {
    if verts.len() < 3 {
        return false;
    }
    let crossings = edges(verts)
        .filter(|&(_, c1, c2)| ray_crosses_edge(query, c1, c2))
        .count();
    crossings % 2 == 1
}
