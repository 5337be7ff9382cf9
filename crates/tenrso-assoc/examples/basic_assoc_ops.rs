//! Basic Associative Matrix Operations Example
//!
//! This example demonstrates:
//! - Building flat and two-level sparse matrices
//! - Reading absent elements without populating them
//! - Assignment between layouts and from dense arrays
//! - Vector-matrix and matrix-vector products
//!
//! Run with: cargo run --example basic_assoc_ops

use scirs2_core::ndarray_ext::array;
use tenrso_assoc::logging::{init_tracing, TracingConfig};
use tenrso_assoc::{
    prec_prod_vec_mat, prod_mat_vec, prod_vec_mat, ColumnMajor, SparseMatrix, SparseVecOfVec,
};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;
    println!("=== TenRSo Assoc: Basic Operations Example ===\n");

    // 1. Flat row-major storage
    println!("1. Building a 4x4 flat matrix...");
    let mut a = SparseMatrix::<f64>::from_triplets(
        (4, 4),
        vec![(0, 0, 4.0), (0, 3, 1.0), (1, 1, 3.0), (2, 2, 2.0), (3, 0, 1.0), (3, 3, 5.0)],
    )?;
    println!(
        "   {}x{}, {} non-zeros, density {:.1}%",
        a.size1(),
        a.size2(),
        a.nnz(),
        a.density() * 100.0
    );
    println!("   a(1, 2) = {} (absent)", a.get(1, 2));
    println!("   nnz after the read: {}\n", a.nnz());

    // 2. Write through the inserting accessor
    println!("2. Writing through access()...");
    *a.access(1, 2) = -2.0;
    *a.access(0, 0) += 1.0;
    println!("   a(1, 2) = {}, a(0, 0) = {}", a.get(1, 2), a.get(0, 0));
    println!("   nnz: {}\n", a.nnz());

    // 3. Copy into two-level column-major storage
    println!("3. Assigning into a column-major vector of vectors...");
    let mut b = SparseVecOfVec::<f64, ColumnMajor>::with_shape(4, 4, a.nnz());
    b.assign_from(&a)?;
    println!("   {} non-zeros in {} buckets", b.nnz(), b.bucket_count());
    let dense = array![
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0]
    ];
    b.plus_assign(&dense)?;
    println!("   after += I: b(3, 3) = {}\n", b.get(3, 3));

    // 4. Products
    println!("4. Products with x = [1, 2, 3, 4]...");
    let x = array![1.0, 2.0, 3.0, 4.0];
    println!("   xᵀ·A     = {}", prod_vec_mat(&x.view(), &a)?);
    println!("   A·x      = {}", prod_mat_vec(&a, &x.view())?);
    println!("   xᵀ·B f64 = {}\n", prec_prod_vec_mat(&x.view(), &b)?);

    // 5. Errors are values
    println!("5. Mismatched shapes...");
    let short = array![1.0, 2.0];
    match prod_vec_mat(&short.view(), &a) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   error: {}", e),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
