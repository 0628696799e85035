//! Demo: fair allocation of a shared pool across three consumers.

use fairalloc::{AllocationComparison, AllocationEngine, Consumer};

fn main() -> fairalloc::Result<()> {
    let consumers = vec![
        Consumer::new("1", 10.0),
        Consumer::new("2", 20.0),
        Consumer::new("3", 30.0),
    ];
    let engine = AllocationEngine::new(consumers, 45.0)?;

    let comparison = AllocationComparison::from_engine(&engine);
    print!("{}", comparison.render());

    Ok(())
}
