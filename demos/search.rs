//! Example: binary search rows.
//!
//! Run with:
//! `cargo run --example search`

use algo_trace::{
    inputs,
    problems::binary_search::{self, BinarySearch},
    step::Cell,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let values = inputs::sorted_values(&mut rng, 25, 100);
    let target = values[17];

    println!("target {target} in {values:?}");
    let trace = match binary_search::generate(&values, target) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("search: {err}");
            std::process::exit(1);
        }
    };

    for step in &trace.steps {
        let w = step.marker;
        println!(
            "[{:>2}, {:>2}] mid={:>2}  {}",
            w.low,
            w.high,
            w.mid,
            render(&step.cells)
        );
    }

    match BinarySearch::outcome(&trace) {
        Some(o) if o.found => println!("found at index {}", o.mid),
        Some(o) => println!("not found; search ended at index {}", o.mid),
        None => println!("empty input"),
    }
}

/// `|` marks a dropped bound, `^` the probe and `.` an eliminated column.
fn render(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|c| match c {
            Cell::Bound => '|',
            Cell::Probe => '^',
            c if *c == Cell::DIM => '.',
            _ => '-',
        })
        .collect()
}
