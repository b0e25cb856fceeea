//! Sampling through the process-wide default source. Lives in its own
//! test binary so the default source starts uncreated.

use reach_metric::{MetricError, RadiusMetric};
use reach_rng::{default_source_seed, init_default_source, ChaChaSource};

#[test]
fn default_sampling_follows_configured_seed() {
    // Bad arguments are rejected before the default source exists.
    assert!(matches!(
        RadiusMetric::Circle.sample_default(-2.0),
        Err(MetricError::InvalidArgument { .. })
    ));
    assert_eq!(default_source_seed(), None);

    init_default_source(1234).unwrap();

    let mut reference = ChaChaSource::seeded(1234);
    for m in RadiusMetric::ALL {
        for _ in 0..50 {
            let shared = m.sample_default(6.0).unwrap();
            assert_eq!(shared, m.sample(6.0, &mut reference).unwrap(), "{m}");
        }
    }
}
