use algo_trace::{
    problems::binary_search::{self, BinarySearch},
    step::Cell,
};
use proptest::prelude::*;

fn sorted(mut v: Vec<i64>) -> Vec<i64> {
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn present_value_is_found(
        values in prop::collection::vec(0i64..100, 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let values = sorted(values);
        let target = values[pick.index(values.len())];
        let trace = binary_search::generate(&values, target).unwrap();
        let outcome = BinarySearch::outcome(&trace).unwrap();
        prop_assert!(outcome.found);
        prop_assert_eq!(values[outcome.mid], target);
        prop_assert_eq!(trace.best_value(), Some(target));
    }

    #[test]
    fn absent_value_collapses_to_single_index(
        values in prop::collection::vec(0i64..50, 1..30),
        target in 0i64..120,
    ) {
        let values = sorted(values);
        prop_assume!(!values.contains(&target));
        let trace = binary_search::generate(&values, target).unwrap();
        let last = trace.steps.last().unwrap();
        prop_assert!(last.terminal);
        prop_assert_eq!(last.marker.low, last.marker.high);
        prop_assert!(!BinarySearch::outcome(&trace).unwrap().found);
    }

    #[test]
    fn ranges_shrink_and_columns_stay_dimmed(
        values in prop::collection::vec(0i64..100, 1..40),
        target in 0i64..100,
    ) {
        let values = sorted(values);
        let n = values.len();
        let trace = binary_search::generate(&values, target).unwrap();
        prop_assert!(trace.len() <= (usize::BITS - n.leading_zeros()) as usize);
        prop_assert_eq!(trace.terminals().count(), 1);

        let mut dimmed = vec![false; n];
        for step in &trace.steps {
            prop_assert_eq!(step.cells.len(), n);
            let w = step.marker;
            prop_assert!(w.low <= w.mid && w.mid <= w.high);
            for (col, cell) in step.cells.iter().enumerate() {
                if dimmed[col] {
                    prop_assert_eq!(*cell, Cell::DIM);
                }
                if *cell == Cell::DIM {
                    dimmed[col] = true;
                }
            }
            // the probed range itself is never dimmed
            for col in w.low..=w.high {
                prop_assert!(!dimmed[col]);
            }
        }
    }
}
