#![cfg(feature = "parallel")]

use algo_trace::gallery::{run_all, run_all_sequential, Demo};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn parallel_gallery_matches_sequential(seed in any::<u64>()) {
        let demos = Demo::defaults(&mut StdRng::seed_from_u64(seed));
        let parallel = run_all(&demos);
        let sequential = run_all_sequential(&demos);
        prop_assert_eq!(parallel, sequential);
    }
}
