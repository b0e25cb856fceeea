//! `sample_default` from several threads at once. Own test binary so the
//! configured seed is the one in use.

use reach_metric::RadiusMetric;
use reach_rng::{default_source_seed, init_default_source};
use std::thread;

const SAMPLES_PER_THREAD: usize = 1_000;

#[test]
fn concurrent_default_samples_stay_inside() {
    init_default_source(77).unwrap();

    let counts: Vec<usize> = thread::scope(|scope| {
        let workers: Vec<_> = RadiusMetric::ALL
            .into_iter()
            .map(|m| {
                scope.spawn(move || {
                    for _ in 0..SAMPLES_PER_THREAD {
                        let (x, y) = m.sample_default(5.0).unwrap();
                        assert!(
                            m.radius_2d(f64::from(x), f64::from(y)) <= 5.0,
                            "{m}: ({x}, {y})"
                        );
                    }
                    SAMPLES_PER_THREAD
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    assert_eq!(
        counts.iter().sum::<usize>(),
        RadiusMetric::ALL.len() * SAMPLES_PER_THREAD
    );
    assert_eq!(default_source_seed(), Some(77));
}
