//! Validated polygon ring (`Polygon2`) and circular edge traversal.
//!
//! The ring is implicitly closed: edge `i` runs from `verts[i]` to
//! `verts[(i + 1) % n]`, so the last vertex connects back to the first.
//! Winding is not assumed anywhere.

use nalgebra::Vector2;

use super::contains::contains_unchecked;
use super::nearest::nearest_unchecked;
use super::types::{check_ring, is_finite, BoundaryHit, GeomError};

/// Iterate the edges of a closed ring as `(index, start, end)`, including
/// the wrap-around edge from the last vertex to the first.
pub fn edges(
    verts: &[Vector2<f64>],
) -> impl Iterator<Item = (usize, Vector2<f64>, Vector2<f64>)> + '_ {
    let n = verts.len();
    (0..n).map(move |i| (i, verts[i], verts[(i + 1) % n]))
}

/// Simple polygon as an ordered vertex ring.
///
/// Invariants:
/// - At least one vertex.
/// - All coordinates finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2 {
    verts: Vec<Vector2<f64>>,
}

impl Polygon2 {
    /// Validate and wrap a vertex ring.
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        check_ring(&verts)?;
        Ok(Self { verts })
    }

    /// Like `new`, but drops a trailing vertex that repeats the first one.
    ///
    /// Authored shape lists often spell the closing vertex out; the ring
    /// closes itself, so the repeat would only add a zero-length edge.
    pub fn from_closed_ring(mut verts: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        if verts.len() > 1 && verts.first() == verts.last() {
            verts.pop();
        }
        Self::new(verts)
    }

    /// For compile-time constant rings that are known to be valid.
    pub(crate) fn from_trusted(verts: Vec<Vector2<f64>>) -> Self {
        debug_assert!(check_ring(&verts).is_ok(), "untrusted ring");
        Self { verts }
    }

    #[inline]
    pub fn verts(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Whether the ring has no vertices; never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, Vector2<f64>, Vector2<f64>)> + '_ {
        edges(&self.verts)
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut verts = self.verts.clone();
        verts.reverse();
        Self { verts }
    }

    /// Nearest boundary point with edge index, parameter and distance.
    pub fn nearest_boundary_hit(&self, query: Vector2<f64>) -> Result<BoundaryHit, GeomError> {
        if !is_finite(query) {
            return Err(GeomError::NonFiniteQuery);
        }
        Ok(nearest_unchecked(&self.verts, query))
    }

    pub fn nearest_boundary_point(&self, query: Vector2<f64>) -> Result<Vector2<f64>, GeomError> {
        self.nearest_boundary_hit(query).map(|hit| hit.point)
    }

    /// Ray-casting containment; points on the boundary may go either way.
    pub fn contains(&self, query: Vector2<f64>) -> Result<bool, GeomError> {
        if !is_finite(query) {
            return Err(GeomError::NonFiniteQuery);
        }
        Ok(contains_unchecked(&self.verts, query))
    }
}

impl TryFrom<Vec<Vector2<f64>>> for Polygon2 {
    type Error = GeomError;

    fn try_from(verts: Vec<Vector2<f64>>) -> Result<Self, Self::Error> {
        Self::new(verts)
    }
}
