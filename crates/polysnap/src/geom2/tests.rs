use super::rand::{draw_convex_ring, draw_star_ring, RadialCfg, ReplayToken, VertexCount};
use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![0.0, 10.0],
        vector![10.0, 10.0],
        vector![10.0, 0.0],
    ]
}

fn reversed(ring: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    ring.iter().rev().copied().collect()
}

#[test]
fn square_query_below_snaps_to_bottom_edge() {
    let hit = nearest_boundary_hit(&square(), vector![5.0, -3.0]).unwrap();
    assert!((hit.point - vector![5.0, 0.0]).norm() < 1e-12);
    assert!((hit.distance - 3.0).abs() < 1e-12);
    // last edge (10,0) → (0,0) wraps around
    assert_eq!(hit.edge, 3);
}

#[test]
fn square_center_is_inside_and_first_edge_wins_the_tie() {
    let q = vector![5.0, 5.0];
    assert!(point_in_polygon(&square(), q).unwrap());
    let hit = nearest_boundary_hit(&square(), q).unwrap();
    assert!((hit.distance - 5.0).abs() < 1e-12);
    assert_eq!(hit.edge, 0);
    assert!((hit.point - vector![0.0, 5.0]).norm() < 1e-12);
}

#[test]
fn square_far_corner_is_outside() {
    let q = vector![20.0, 20.0];
    assert!(!point_in_polygon(&square(), q).unwrap());
    let p = nearest_boundary_point(&square(), q).unwrap();
    assert!((p - vector![10.0, 10.0]).norm() < 1e-12);
}

#[test]
fn repeated_vertex_does_not_produce_nan() {
    let ring = [vector![0.0, 0.0], vector![0.0, 0.0], vector![5.0, 5.0]];
    let q = vector![1.0, 0.0];
    // the zero-length edge contributes its start vertex
    let (p0, t0) = closest_point_on_segment(ring[0], ring[1], q);
    assert_eq!(p0, vector![0.0, 0.0]);
    assert_eq!(t0, 0.0);

    let hit = nearest_boundary_hit(&ring, q).unwrap();
    assert!(hit.point.x.is_finite() && hit.point.y.is_finite());
    assert!(hit.distance.is_finite());
    // the diagonal edge is closer than the collapsed one
    assert_eq!(hit.edge, 1);
    assert!((hit.point - vector![0.5, 0.5]).norm() < 1e-12);
}

#[test]
fn huge_ring_projects_exactly_without_overflow() {
    // squared lengths here exceed f64::MAX; the answer is exactly representable
    let big = 2f64.powi(530);
    let ring = [
        vector![0.0, 0.0],
        vector![big, 0.0],
        vector![big, big],
        vector![0.0, big],
    ];
    let hit = nearest_boundary_hit(&ring, vector![big / 2.0, -1.0]).unwrap();
    assert_eq!(hit.edge, 0);
    assert_eq!(hit.point, vector![big / 2.0, 0.0]);
    assert_eq!(hit.distance, 1.0);
    assert_eq!(hit.t, 0.5);
}

#[test]
fn far_query_snaps_to_nearest_side() {
    let ring: Vec<Vector2<f64>> = square().into_iter().map(|v| v * 1e198).collect();
    let q = vector![1e200, 5e198];
    let hit = nearest_boundary_hit(&ring, q).unwrap();
    assert_eq!(hit.edge, 2);
    assert!(((hit.point.x - 1e199) / 1e199).abs() < 1e-12);
    assert!(((hit.point.y - 5e198) / 5e198).abs() < 1e-12);
    assert!(((hit.distance - 9e199) / 9e199).abs() < 1e-12);
}

#[test]
fn far_query_against_small_square_stays_finite() {
    // every boundary point is 1e200 away at f64 resolution; the answer must
    // still be a real boundary point at a finite distance
    for q in [vector![1e200, 5.0], vector![-1e200, 5.0], vector![5.0, 1e200]] {
        let hit = nearest_boundary_hit(&square(), q).unwrap();
        let p = hit.point;
        let on_side = |c: f64| c == 0.0 || c == 10.0;
        let in_range = |c: f64| (0.0..=10.0).contains(&c);
        assert!((on_side(p.x) && in_range(p.y)) || (on_side(p.y) && in_range(p.x)));
        assert!(hit.distance.is_finite());
        assert!(((hit.distance - 1e200) / 1e200).abs() < 1e-12, "{q:?}");
    }
}

#[test]
fn short_edge_seen_from_far_still_projects() {
    let (p, t) = closest_point_on_segment(vector![0.0, 0.0], vector![0.0, 10.0], vector![1e300, 5.0]);
    assert!((t - 0.5).abs() < 1e-12);
    assert!((p - vector![0.0, 5.0]).norm() < 1e-9);
    // opposite corners of the plane: q - a alone would overflow
    let a = vector![-1e308, -1e308];
    let b = vector![1e308, -1e308];
    let (p, t) = closest_point_on_segment(a, b, vector![0.0, 1e308]);
    assert!((t - 0.5).abs() < 1e-12);
    assert!(p.x.abs() < 1e295 && p.y == -1e308);
}

#[test]
fn reversed_square_gives_same_answers() {
    let fwd = square();
    let rev = reversed(&fwd);
    for q in [
        vector![5.0, -3.0],
        vector![20.0, 20.0],
        vector![2.0, 7.0],
        vector![-1.0, 4.0],
    ] {
        assert_eq!(
            point_in_polygon(&fwd, q).unwrap(),
            point_in_polygon(&rev, q).unwrap()
        );
        let a = nearest_boundary_point(&fwd, q).unwrap();
        let b = nearest_boundary_point(&rev, q).unwrap();
        assert!((a - b).norm() < 1e-12, "{q:?}: {a:?} vs {b:?}");
    }
}

#[test]
fn polygon2_validates_and_strips_closing_vertex() {
    assert_eq!(Polygon2::new(Vec::new()), Err(GeomError::EmptyPolygon));
    assert_eq!(
        Polygon2::new(vec![vector![0.0, f64::NEG_INFINITY]]),
        Err(GeomError::NonFiniteVertex { index: 0 })
    );
    let mut closed = square();
    closed.push(closed[0]);
    let poly = Polygon2::from_closed_ring(closed).unwrap();
    assert_eq!(poly.len(), 4);
    assert!(!poly.is_empty());
    assert_eq!(poly.edges().count(), 4);
    assert!(poly.contains(vector![1.0, 1.0]).unwrap());
    assert_eq!(
        poly.nearest_boundary_point(vector![f64::NAN, 0.0]),
        Err(GeomError::NonFiniteQuery)
    );
    assert_eq!(poly.reversed().reversed(), poly);
}

#[test]
fn edges_wrap_around() {
    let ring = square();
    let last = edges(&ring).last().unwrap();
    assert_eq!(last, (3, ring[3], ring[0]));
}

#[test]
fn containment_matches_halfplane_reference_on_convex_rings() {
    let mut rng = StdRng::seed_from_u64(2025);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 24 },
        center: vector![4.0, -7.0],
        base_radius: 3.0,
        ..RadialCfg::default()
    };
    let eps = 1e-9;
    let mut checked = 0usize;
    for index in 0..10 {
        let ring = draw_convex_ring(cfg, ReplayToken { seed: 11, index }).expect("ring");
        let hs = halfplanes_ccw(&ring);
        for _ in 0..100 {
            let q = cfg.center
                + vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let strictly_inside = hs.iter().all(|h| h.satisfies_eps(q, -eps));
            let strictly_outside = hs.iter().any(|h| !h.satisfies_eps(q, eps));
            if !strictly_inside && !strictly_outside {
                continue; // on the boundary
            }
            assert_eq!(point_in_polygon(&ring, q).unwrap(), strictly_inside, "{q:?}");
            assert_eq!(
                point_in_polygon(&reversed(&ring), q).unwrap(),
                strictly_inside
            );
            checked += 1;
        }
    }
    assert!(checked > 990);
}

fn star_ring(seed: u64, n: usize) -> Vec<Vector2<f64>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.4,
        radial_jitter: 0.6,
        base_radius: 10.0,
        center: vector![1.0, 2.0],
        random_phase: true,
    };
    draw_star_ring(cfg, ReplayToken { seed, index: 0 })
}

const TOL: f64 = 1e-9;

proptest! {
    #[test]
    fn nearest_point_lies_on_its_edge(
        seed in any::<u64>(), n in 5usize..16, x in -40.0..40.0f64, y in -40.0..40.0f64,
    ) {
        let ring = star_ring(seed, n);
        let q = vector![x, y];
        let hit = nearest_boundary_hit(&ring, q).unwrap();
        prop_assert!((0.0..=1.0).contains(&hit.t));
        let c1 = ring[hit.edge];
        let c2 = ring[(hit.edge + 1) % ring.len()];
        let (back, _) = closest_point_on_segment(c1, c2, hit.point);
        prop_assert!((back - hit.point).norm() < TOL);
        prop_assert!(((hit.point - q).norm() - hit.distance).abs() < TOL);
    }

    #[test]
    fn nearest_point_is_no_farther_than_any_vertex_or_midpoint(
        seed in any::<u64>(), n in 5usize..16, x in -40.0..40.0f64, y in -40.0..40.0f64,
    ) {
        let ring = star_ring(seed, n);
        let q = vector![x, y];
        let d = nearest_boundary_hit(&ring, q).unwrap().distance;
        for (_, c1, c2) in edges(&ring) {
            prop_assert!(d <= (c1 - q).norm() + TOL);
            prop_assert!(d <= ((c1 + c2) * 0.5 - q).norm() + TOL);
        }
    }

    #[test]
    fn boundary_points_snap_to_themselves(
        seed in any::<u64>(), n in 5usize..16, k in any::<usize>(), t in 0.0..=1.0f64,
    ) {
        let ring = star_ring(seed, n);
        let c1 = ring[k % n];
        let c2 = ring[(k % n + 1) % n];
        let r = c1 + (c2 - c1) * t;
        let p = nearest_boundary_point(&ring, r).unwrap();
        prop_assert!((p - r).norm() < TOL);
    }

    #[test]
    fn reversing_the_ring_changes_nothing(
        seed in any::<u64>(), n in 5usize..16, x in -40.0..40.0f64, y in -40.0..40.0f64,
    ) {
        let ring = star_ring(seed, n);
        let rev = reversed(&ring);
        let q = vector![x, y];
        prop_assert_eq!(point_in_polygon(&ring, q).unwrap(), point_in_polygon(&rev, q).unwrap());
        let a = nearest_boundary_hit(&ring, q).unwrap();
        let b = nearest_boundary_hit(&rev, q).unwrap();
        prop_assert!((a.distance - b.distance).abs() < TOL);
    }
}
