//! Convex-ring helpers used to build reference answers for the queries.

use nalgebra::Vector2;

use super::ring::edges;
use super::types::Hs2;

#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Convex hull in CCW order, without collinear points.
///
/// `None` when fewer than three non-collinear points remain.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return None;
    }
    let mut hull = left_turn_chain(sorted.iter().copied());
    hull.extend(left_turn_chain(sorted.iter().rev().copied()));
    (hull.len() >= 3).then_some(hull)
}

/// One half of the monotone chain: keeps only strict left turns, and drops
/// the final point since it starts the other half.
fn left_turn_chain(pts: impl Iterator<Item = Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut chain: Vec<Vector2<f64>> = Vec::new();
    for p in pts {
        while let [.., a, b] = chain[..] {
            if cross(a, b, p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}

/// Half-plane representation of a convex ring given in CCW order.
///
/// Edge `p → q` contributes `n·x <= n·p` with the outward normal
/// `n = (e.y, -e.x)`, `e = q - p`. Zero-length edges are skipped.
pub fn halfplanes_ccw(ring: &[Vector2<f64>]) -> Vec<Hs2> {
    edges(ring)
        .filter_map(|(_, p, q)| {
            let e = q - p;
            let n = Vector2::new(e.y, -e.x);
            let len = n.norm();
            (len.is_finite() && len > 0.0).then(|| Hs2::new(n / len, n.dot(&p) / len))
        })
        .collect()
}

/// Signed area (shoelace); positive for CCW rings.
pub fn signed_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    0.5 * edges(ring).map(|(_, p, q)| p.x * q.y - q.x * p.y).sum::<f64>()
}
