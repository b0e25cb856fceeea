//! Metric contract compliance test helpers.
//!
//! These functions verify that a [`RadiusMetric`] variant satisfies the
//! geometric contract shared by every shape. Reused by the metric,
//! sampling and footprint test modules.

use crate::metric::RadiusMetric;
use reach_rng::RandomSource;

const PROBES: [f64; 7] = [0.0, 1.0, -1.0, 2.5, -3.25, 7.0, -40.0];

/// Assert `radius(d) == radius(-d) == radius(|d|)` over a probe grid.
pub fn assert_radius_sign_symmetric(metric: RadiusMetric) {
    for dx in PROBES {
        for dy in PROBES {
            for dz in PROBES {
                let r = metric.radius(dx, dy, dz);
                assert_eq!(r, metric.radius(-dx, -dy, -dz), "{metric} at ({dx},{dy},{dz})");
                assert_eq!(
                    r,
                    metric.radius(dx.abs(), dy.abs(), dz.abs()),
                    "{metric} at ({dx},{dy},{dz})"
                );
            }
        }
    }
}

/// Assert the radius is zero exactly at the origin.
pub fn assert_radius_zero_iff_origin(metric: RadiusMetric) {
    for dx in PROBES {
        for dy in PROBES {
            for dz in PROBES {
                let r = metric.radius(dx, dy, dz);
                let origin = dx == 0.0 && dy == 0.0 && dz == 0.0;
                assert_eq!(r == 0.0, origin, "{metric} at ({dx},{dy},{dz}) = {r}");
            }
        }
    }
}

/// Assert planar bounds span `[-d, d]` and vertical bounds follow
/// the dimensionality hint.
pub fn assert_extents_contract(metric: RadiusMetric) {
    for d in [0.0, 1.0, 5.0, 12.5] {
        let e = metric
            .extents(d)
            .expect("extents of a non-negative distance should succeed");
        assert_eq!((e.min_x, e.max_x), (-d, d), "{metric} x at {d}");
        assert_eq!((e.min_y, e.max_y), (-d, d), "{metric} y at {d}");
        let dz = if metric.is_3d() { d } else { 0.0 };
        assert_eq!(e.max_z, dz, "{metric} max_z at {d}");
        assert_eq!(e.min_z, -dz, "{metric} min_z at {d}");
    }
}

/// Assert every enumerated footprint cell is inside the shape and its
/// extents, and that no lattice cell inside the extents is missing.
pub fn assert_footprint_consistent(metric: RadiusMetric) {
    let d = 4.0;
    let cells = metric
        .cells_within(d)
        .expect("cells_within(4) should succeed");
    let e = metric.extents(d).expect("extents(4) should succeed");
    let axis = |c: &[i32], i: usize| c.get(i).copied().map_or(0.0, f64::from);
    for c in &cells {
        let (x, y, z) = (axis(&c[..], 0), axis(&c[..], 1), axis(&c[..], 2));
        assert!(metric.contains(x, y, z, d), "{metric}: {c:?} outside shape");
        assert!(e.contains(x, y, z), "{metric}: {c:?} outside extents");
    }
    let lattice = (-4..=4)
        .flat_map(|x| (-4..=4).flat_map(move |y| (-4..=4).map(move |z| (x, y, z))))
        .filter(|&(x, y, z)| {
            let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));
            e.contains(x, y, z) && metric.contains(x, y, z, d)
        })
        .count();
    assert_eq!(cells.len(), lattice, "{metric}: footprint size");
}

/// Assert `draws` samples at `distance` all fall inside the planar shape.
pub fn assert_sample_containment<R: RandomSource + ?Sized>(
    metric: RadiusMetric,
    distance: f64,
    draws: usize,
    rng: &mut R,
) {
    for _ in 0..draws {
        let (x, y) = metric
            .sample(distance, rng)
            .expect("sampling a valid distance should succeed");
        let r = metric.radius(f64::from(x), f64::from(y), 0.0);
        assert!(r <= distance, "{metric}: sample ({x},{y}) has radius {r} > {distance}");
    }
}

/// Run the deterministic compliance checks on a metric.
pub fn run_full_compliance(metric: RadiusMetric) {
    assert_radius_sign_symmetric(metric);
    assert_radius_zero_iff_origin(metric);
    assert_extents_contract(metric);
    assert_footprint_consistent(metric);
}
