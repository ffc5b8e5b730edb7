//! `splaylist-demo` — walk the sequence operations on a small list.
//!
//! Builds `[10, 20, 30, 40, 50]`, then interleaves range sums with a range
//! update, inserts and deletes, printing each result to stdout, and ends
//! with a rendering of the internal tree.

use splaylist::{SplayList, SplayListError};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SplayListError> {
    let mut list = SplayList::with_capacity(64);
    list.build(&[10, 20, 30, 40, 50])?;

    println!("sum of [1, 3] (20,30,40): {}", list.query_sum_range(1, 3)?);

    list.update_range(1, 3, 5)?;
    println!("sum of [1, 3] (25,35,45): {}", list.query_sum_range(1, 3)?);
    println!("sum of [0, 4] (10,25,35,45,50): {}", list.query_sum_range(0, 4)?);

    list.insert(2, 100)?;
    println!("sum of [0, 5]: {}", list.query_sum_range(0, 5)?);
    println!("sum of [2, 4] (100,35,45): {}", list.query_sum_range(2, 4)?);

    list.delete(3)?;
    println!("sum of [0, 4]: {}", list.query_sum_range(0, 4)?);
    println!("sum of [2, 3] (100,45): {}", list.query_sum_range(2, 3)?);

    list.update_range(0, 4, -10)?;
    println!("sum of [0, 4]: {}", list.query_sum_range(0, 4)?);

    list.insert(0, 999)?;
    println!("sum of [0, 0] (999): {}", list.query_sum_range(0, 0)?);

    let len = list.len();
    list.insert(len, 888)?;
    println!("contents: {:?}", list.to_vec());
    println!("tree:\n{}", list.dump());

    list.delete(0)?;
    let last = list.len() as i64 - 1;
    println!("sum of [0, {last}]: {}", list.query_sum_range(0, last)?);

    Ok(())
}
