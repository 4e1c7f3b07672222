//! Basic 2D types shared by the boundary and containment queries.
//!
//! - `BoundaryHit`: nearest boundary point plus the edge it lies on.
//! - `Hs2`: closed half‑plane `n·x <= c`, used for convex reference checks.
//! - `GeomError`: input validation failures.
//!
//! Code cross-refs: `nearest::nearest_boundary_hit`, `rand::halfplanes_ccw`

use nalgebra::Vector2;
use std::fmt;

/// Closest boundary point of a polygon to some query.
///
/// `edge` indexes the segment `(verts[edge], verts[(edge + 1) % n])` and
/// `point = verts[edge] + t * (verts[edge + 1] - verts[edge])` with `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryHit {
    pub point: Vector2<f64>,
    pub edge: usize,
    pub t: f64,
    pub distance: f64,
}

/// Closed half‑plane `n · x <= c` (no normalization required here).
#[derive(Clone, Copy, Debug)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }
    /// `eps > 0` enlarges the half-plane, `eps < 0` shrinks it.
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

/// Invalid input to a polygon query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// The polygon has no vertices; no geometric question is well-posed.
    EmptyPolygon,
    /// A polygon vertex has a NaN or infinite coordinate.
    NonFiniteVertex { index: usize },
    /// The query point has a NaN or infinite coordinate.
    NonFiniteQuery,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::EmptyPolygon => write!(f, "polygon has no vertices"),
            GeomError::NonFiniteVertex { index } => {
                write!(f, "polygon vertex {} has a non-finite coordinate", index)
            }
            GeomError::NonFiniteQuery => write!(f, "query point has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for GeomError {}

#[inline]
pub(crate) fn is_finite(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Up-front validation shared by both queries.
pub(crate) fn check_inputs(verts: &[Vector2<f64>], query: Vector2<f64>) -> Result<(), GeomError> {
    check_ring(verts)?;
    if !is_finite(query) {
        return Err(GeomError::NonFiniteQuery);
    }
    Ok(())
}

pub(crate) fn check_ring(verts: &[Vector2<f64>]) -> Result<(), GeomError> {
    if verts.is_empty() {
        return Err(GeomError::EmptyPolygon);
    }
    if let Some(index) = verts.iter().position(|v| !is_finite(*v)) {
        return Err(GeomError::NonFiniteVertex { index });
    }
    Ok(())
}
