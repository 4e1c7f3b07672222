//! Nearest point on a polygon boundary.
//!
//! Each edge contributes the closest point of its finite segment (projection
//! parameter clamped to [0, 1]); the overall winner is the candidate with the
//! smallest distance, first edge in traversal order on ties. O(n), no
//! allocation, so it can run on every pointer move.
//!
//! Numerics
//! - All coordinates are first divided by a common power of two (exact), so
//!   differences and squares stay finite for any finite input.
//! - The projection parameter scales the edge direction and the query offset
//!   separately, so a short edge seen from far away still projects instead of
//!   collapsing to a point.

use nalgebra::Vector2;

use super::ring::edges;
use super::types::{check_inputs, BoundaryHit, GeomError};

/// Power of two near the largest magnitude in `coords` (1.0 if all are zero).
fn pow2_scale(coords: impl Iterator<Item = f64>) -> f64 {
    let m = coords.fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if m == 0.0 {
        return 1.0;
    }
    let e = (m.log2().floor() as i32).clamp(-1022, 1023);
    f64::from_bits(((e + 1023) as u64) << 52)
}

/// Segment projection on coordinates already brought to unit scale.
#[inline]
fn project_scaled(a: Vector2<f64>, b: Vector2<f64>, q: Vector2<f64>) -> (Vector2<f64>, f64) {
    let d = b - a;
    let sd = d.amax();
    if sd == 0.0 {
        return (a, 0.0);
    }
    let m = q - a;
    let sm = m.amax();
    if sm == 0.0 {
        return (a, 0.0);
    }
    let dn = d / sd;
    let t = dn.dot(&(m / sm)) / dn.norm_squared() * (sm / sd);
    // NaN only for an exactly perpendicular offset with an overflowed ratio
    if t.is_nan() || t <= 0.0 {
        (a, 0.0)
    } else if t >= 1.0 {
        (b, 1.0)
    } else {
        (a + d * t, t)
    }
}

/// Closest point to `q` on the segment `[a, b]`, with its parameter `t ∈ [0, 1]`.
///
/// A zero-length segment returns `(a, 0.0)` without dividing.
pub fn closest_point_on_segment(
    a: Vector2<f64>,
    b: Vector2<f64>,
    q: Vector2<f64>,
) -> (Vector2<f64>, f64) {
    let s = pow2_scale([a.x, a.y, b.x, b.y, q.x, q.y].into_iter());
    let (p, t) = project_scaled(a / s, b / s, q / s);
    (p * s, t)
}

/// Nearest boundary point of `verts` to `query`, with edge index and distance.
pub fn nearest_boundary_hit(
    verts: &[Vector2<f64>],
    query: Vector2<f64>,
) -> Result<BoundaryHit, GeomError> {
    check_inputs(verts, query)?;
    Ok(nearest_unchecked(verts, query))
}

/// Nearest boundary point of `verts` to `query`.
///
/// Errors on an empty ring or non-finite coordinates. One- and two-vertex
/// rings are fine: their edges collapse to a point or a doubled segment.
pub fn nearest_boundary_point(
    verts: &[Vector2<f64>],
    query: Vector2<f64>,
) -> Result<Vector2<f64>, GeomError> {
    nearest_boundary_hit(verts, query).map(|hit| hit.point)
}

/// Caller guarantees a non-empty ring and finite coordinates.
pub(crate) fn nearest_unchecked(verts: &[Vector2<f64>], query: Vector2<f64>) -> BoundaryHit {
    debug_assert!(!verts.is_empty(), "nearest_unchecked on empty ring");
    let s = pow2_scale(
        verts
            .iter()
            .chain(std::iter::once(&query))
            .flat_map(|v| [v.x, v.y]),
    );
    let qs = query / s;
    // (edge, scaled point, t, scaled distance)
    let mut best: Option<(usize, Vector2<f64>, f64, f64)> = None;
    for (i, c1, c2) in edges(verts) {
        let (p, t) = project_scaled(c1 / s, c2 / s, qs);
        let dist = (p.x - qs.x).hypot(p.y - qs.y);
        // strict: earlier edges win ties
        if best.as_ref().is_none_or(|&(_, _, _, d)| dist < d) {
            best = Some((i, p, t, dist));
        }
    }
    match best {
        Some((edge, p, t, dist)) => BoundaryHit {
            point: p * s,
            edge,
            t,
            distance: dist * s,
        },
        None => BoundaryHit {
            point: verts[0],
            edge: 0,
            t: 0.0,
            distance: (verts[0].x - query.x).hypot(verts[0].y - query.y),
        },
    }
}
