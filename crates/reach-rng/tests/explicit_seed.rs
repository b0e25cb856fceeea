//! Explicit seeding of the default source, run in its own test binary so
//! no other test creates the global first.

use reach_rng::{
    default_source_seed, init_default_source, with_default_source, ChaChaSource, RandomSource,
    RngError,
};

#[test]
fn explicit_seed_fixes_default_sequence() {
    assert_eq!(default_source_seed(), None);
    init_default_source(42).unwrap();
    assert_eq!(default_source_seed(), Some(42));

    let mut reference = ChaChaSource::seeded(42);
    for _ in 0..16 {
        let shared = with_default_source(|s| s.uniform_int(-50, 50));
        assert_eq!(shared, reference.uniform_int(-50, 50));
    }

    assert_eq!(
        init_default_source(7),
        Err(RngError::AlreadyInitialized { seed: 42 })
    );
}
