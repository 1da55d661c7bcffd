use algo_trace::problems::{
    max_subarray_brute::{self, Framing},
    max_subarray_kadane,
};
use proptest::prelude::*;

/// Best contiguous sum where the empty window counts as 0.
fn max_contiguous(xs: &[i64]) -> Option<i64> {
    let mut best = 0;
    for i in 0..xs.len() {
        let mut sum = 0;
        for &x in &xs[i..] {
            sum += x;
            best = best.max(sum);
        }
    }
    Some(best)
}

#[test]
fn default_demo_sequence() {
    let inputs = [-2, 1, -3, 4, 5, 7];
    assert_eq!(
        max_subarray_kadane::generate(&inputs).unwrap().best_value(),
        Some(16)
    );
    for framing in [Framing::Subset, Framing::Interval] {
        let trace = max_subarray_brute::generate(&inputs, framing).unwrap();
        assert_eq!(trace.best_value(), Some(16));
    }
}

#[test]
fn empty_input_is_root_only() {
    for framing in [Framing::Subset, Framing::Interval] {
        let trace = max_subarray_brute::generate(&[], framing).unwrap();
        assert_eq!(trace.len(), 1);
        assert!(trace.steps[0].terminal);
        assert_eq!(trace.best_value(), Some(0));
    }
}

#[test]
fn all_negative_input_reports_empty_window() {
    let inputs = [-5, -1, -7];
    let kadane = max_subarray_kadane::generate(&inputs).unwrap();
    assert_eq!(kadane.best_value(), Some(0));
    assert_eq!(kadane.best_value(), kadane.steps.iter().map(|s| s.value).max());
    for framing in [Framing::Subset, Framing::Interval] {
        let trace = max_subarray_brute::generate(&inputs, framing).unwrap();
        assert_eq!(trace.best_value(), Some(0));
    }
}

proptest! {
    #[test]
    fn all_engines_match_reference(values in prop::collection::vec(-20i64..20, 0..=10)) {
        let expected = max_contiguous(&values);
        let kadane = max_subarray_kadane::generate(&values).unwrap();
        let subset = max_subarray_brute::generate(&values, Framing::Subset).unwrap();
        let interval = max_subarray_brute::generate(&values, Framing::Interval).unwrap();
        prop_assert_eq!(kadane.best_value(), expected);
        prop_assert_eq!(subset.best_value(), expected);
        prop_assert_eq!(interval.best_value(), expected);
        for trace in [&kadane, &subset, &interval] {
            prop_assert_eq!(trace.best_value(), trace.steps.iter().map(|s| s.value).max());
        }
    }

    #[test]
    fn kadane_is_linear_with_one_terminal(values in prop::collection::vec(-20i64..20, 0..30)) {
        let trace = max_subarray_kadane::generate(&values).unwrap();
        prop_assert_eq!(trace.len(), values.len() + 1);
        prop_assert_eq!(trace.terminals().count(), 1);
        prop_assert!(trace.steps.last().unwrap().terminal);
        for step in &trace.steps {
            prop_assert_eq!(step.cells.len(), values.len());
            let w = step.marker;
            prop_assert_eq!(step.value, values[w.from..w.to].iter().sum::<i64>());
        }
    }

    #[test]
    fn framings_visit_same_windows(values in prop::collection::vec(-9i64..9, 0..=7)) {
        let subset = max_subarray_brute::generate(&values, Framing::Subset).unwrap();
        let interval = max_subarray_brute::generate(&values, Framing::Interval).unwrap();
        let windows = |t: &algo_trace::TraceOf<max_subarray_brute::BruteMaxSubarray<'_>>| {
            let mut w: Vec<(usize, usize, i64)> = t
                .steps
                .iter()
                .map(|s| (s.marker.from, s.marker.to, s.value))
                .collect();
            w.sort_unstable();
            w
        };
        prop_assert_eq!(windows(&subset), windows(&interval));
        for step in subset.terminals() {
            prop_assert_eq!(step.marker.to, values.len());
        }
    }
}
