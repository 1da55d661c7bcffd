//! Example: rod cutting traced leaf by leaf.
//!
//! Run with:
//! `cargo run --example rods`
//!
//! Prints one line per partition of the rod; `*` marks the optimal ones and
//! `~` marks pieces cut from an already expanded remaining length.

use algo_trace::{
    problems::copper_rods::{optimal_value, CopperRods},
    step::Cell,
    TraceEngine,
};

fn main() {
    let prices = [1, 5, 8, 9, 10, 17, 17, 20];
    let length = 5;

    let engine = TraceEngine::new(CopperRods::new(&prices, length));
    let trace = match engine.run() {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("rods: {err}");
            std::process::exit(1);
        }
    };

    for step in &trace.steps {
        let mark = if step.best { '*' } else { ' ' };
        println!("{mark} {:>3}  {}", step.value, render(&step.cells));
    }

    println!();
    println!("Partitions explored: {}", trace.len());
    println!("Cached leaves: {}", trace.cached_count());
    println!("Best value: {:?}", trace.best_value());
    println!("Bottom-up optimum: {:?}", optimal_value(&prices, length));
}

fn render(cells: &[Cell]) -> String {
    cells
        .iter()
        .filter_map(|c| match c {
            Cell::Piece { len, cached: true } => Some(format!("{len}~")),
            Cell::Piece { len, cached: false } => Some(len.to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
