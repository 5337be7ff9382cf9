//! Nested Traversal Example
//!
//! Walks the same matrix row by row and column by column with explicit
//! cursors, then with the iterator adapters, over a row-major layout. The
//! column walk runs against the storage order.
//!
//! Run with: cargo run --example nested_traversal --features tracing
//! (set `RUST_LOG=tenrso_assoc=trace` to see cursor re-seeks)

use tenrso_assoc::logging::{init_tracing, TracingConfig};
use tenrso_assoc::{SparseTraversal, SparseVecOfVec};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;
    println!("=== TenRSo Assoc: Nested Traversal Example ===\n");

    let mut m = SparseVecOfVec::<f64>::with_shape(3, 3, 3);
    m.insert(0, 0, 1.0);
    m.insert(1, 2, 5.0);
    m.insert(2, 1, 9.0);

    // 1. Explicit cursors, row-major
    println!("1. Rows via begin1()/end1():");
    let (mut row, end) = (m.begin1(), m.end1());
    while row != end {
        print!("   row {}:", row.index1());
        let (mut cell, stop) = (row.begin(), row.end());
        while cell != stop {
            print!(" ({}, {}) = {}", cell.index1(), cell.index2(), cell.value());
            cell.advance();
        }
        println!();
        row.advance();
    }

    // 2. Explicit cursors, column-major
    println!("\n2. Columns via begin2()/end2():");
    let (mut column, end) = (m.begin2(), m.end2());
    while column != end {
        print!("   column {}:", column.index2());
        for (i, j, v) in column.begin().to(column.end()) {
            print!(" ({}, {}) = {}", i, j, v);
        }
        println!();
        column.advance();
    }

    // 3. Adapters, walked backwards
    println!("\n3. Columns in reverse:");
    for (j, line) in m.columns().collect::<Vec<_>>().into_iter().rev() {
        let cells: Vec<_> = line.rev().map(|(i, _, v)| format!("{}:{}", i, v)).collect();
        println!("   column {}: {}", j, cells.join(" "));
    }

    // 4. Lookup from an arbitrary point
    println!("\n4. find1(1, 1) / find2(1, 1):");
    println!("   row-major hit:    {:?}", m.find1(1, 1).indices());
    println!("   column-major hit: {:?}", m.find2(1, 1).indices());

    // 5. Scale a single row in place
    println!("\n5. Doubling row 2 through a mutable cursor...");
    let mut row = m.find1_mut(2, 0);
    let mut cell = row.begin();
    while !cell.is_end() {
        *cell.value_mut() *= 2.0;
        cell.advance();
    }
    println!("   m(2, 1) = {}", m.get(2, 1));

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
