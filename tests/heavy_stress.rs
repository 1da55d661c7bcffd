#![cfg(feature = "heavy")]
use algo_trace::{
    builder::TraceEngineBuilder,
    inputs,
    problems::{copper_rods::{optimal_value, CopperRods}, lis_exponential::LisExponential},
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn heavy_stress_lis_exponential() {
    let mut rng = StdRng::seed_from_u64(123);
    let values = inputs::ramp_values(&mut rng, 18, 15);
    let trace = TraceEngineBuilder::new(LisExponential::new(&values))
        .with_default_limit()
        .build()
        .run()
        .unwrap();
    assert!(trace.len() <= 1 << 18);
    assert!(trace.best_value().unwrap() <= 18);
}

#[test]
fn heavy_stress_copper_rods() {
    let mut rng = StdRng::seed_from_u64(321);
    let prices = inputs::rod_prices(&mut rng, 18);
    let trace = TraceEngineBuilder::new(CopperRods::new(&prices, 18))
        .with_default_limit()
        .build()
        .run()
        .unwrap();
    assert_eq!(trace.len(), 1 << 17);
    assert_eq!(trace.best_value(), optimal_value(&prices, 18));
}
