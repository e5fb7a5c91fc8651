//! Heap drain demonstration
//!
//! Builds a heap from random values, then removes the top until the heap is
//! empty and prints the values in the order they came out.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example drain
//!
//! # Reproducible run with 20 values and debug logging
//! RUST_LOG=debug HEAP_DEMO_COUNT=20 HEAP_DEMO_SEED=7 cargo run --example drain
//! ```

use binary_max_heap::{Heap, MaxHeap};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;
use std::env;
use std::error::Error;

const DEFAULT_COUNT: usize = 100;

/// Reads an optional numeric environment variable
fn env_number<T>(name: &str) -> Result<Option<T>, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| format!("invalid {}={:?}: {}", name, raw, e).into()),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let count = env_number("HEAP_DEMO_COUNT")?.unwrap_or(DEFAULT_COUNT);
    let seed = match env_number::<u64>("HEAP_DEMO_SEED")? {
        Some(seed) => seed,
        None => rand::thread_rng().gen(),
    };
    info!("generating {} values with seed {}", count, seed);

    let mut rng = SmallRng::seed_from_u64(seed);
    let unordered: Vec<f64> = (0..count)
        .map(|_| (rng.gen::<f64>() * 100_000.0).round() / 1000.0)
        .collect();
    println!("{:?}", unordered);

    let mut heap = Heap::from_elements(unordered);
    let mut ordered = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        ordered.push(heap.remove_top()?);
        info!("{} values left in heap", heap.len());
    }
    println!("{:?}", ordered);

    Ok(())
}
