//! Benchmarks for associative sparse matrices
//!
//! Compares the flat and two-level layouts for element insertion, lookup,
//! nested traversal in both orders and the vector-matrix product.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scirs2_core::ndarray_ext::Array1;
use std::hint::black_box;
use tenrso_assoc::{
    prod_vec_mat, ColumnMajor, Major, RowMajor, SparseMatrix, SparseStorage, SparseTraversal,
    SparseVecOfVec,
};

/// Pseudo-random coordinates with a fixed seed for reproducibility
fn random_cells(size: usize, density: f64) -> Vec<(usize, usize, f64)> {
    let nnz = ((size * size) as f64 * density).max(1.0) as usize;
    let mut seed = 12345u64;
    let mut next = |modulus: usize| {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        (seed % modulus as u64) as usize
    };
    (0..nnz)
        .map(|_| (next(size), next(size), next(10000) as f64 / 10000.0))
        .collect()
}

fn fill<S: SparseStorage<Value = f64>>(mut m: S, cells: &[(usize, usize, f64)]) -> S {
    for &(i, j, v) in cells {
        m.insert_entry(i, j, v);
    }
    m
}

fn nested_sum<S: SparseStorage<Value = f64>>(m: &S, order: Major) -> f64 {
    let (mut outer, end) = match order {
        Major::Row => (m.begin1(), m.end1()),
        Major::Column => (m.begin2(), m.end2()),
    };
    let mut sum = 0.0;
    while outer != end {
        let (mut inner, stop) = (outer.begin(), outer.end());
        while inner != stop {
            sum += *inner.value();
            inner.advance();
        }
        outer.advance();
    }
    sum
}

/// Benchmark building a matrix element by element
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 500].iter() {
        let cells = random_cells(*size, 0.02);
        group.throughput(Throughput::Elements(cells.len() as u64));

        group.bench_with_input(BenchmarkId::new("flat", size), &cells, |b, cells| {
            b.iter(|| {
                let m = fill(SparseMatrix::<f64>::with_shape(*size, *size, cells.len()), cells);
                black_box(m.nnz());
            });
        });
        group.bench_with_input(BenchmarkId::new("nested", size), &cells, |b, cells| {
            b.iter(|| {
                let m = fill(SparseVecOfVec::<f64>::with_shape(*size, *size, cells.len()), cells);
                black_box(m.nnz());
            });
        });
    }

    group.finish();
}

/// Benchmark reads of present and absent elements
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    let size = 500;
    let cells = random_cells(size, 0.02);
    let flat = fill(SparseMatrix::<f64>::with_shape(size, size, 0), &cells);
    let nested = fill(SparseVecOfVec::<f64>::with_shape(size, size, 0), &cells);

    group.bench_function("flat", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in (0..size).step_by(7) {
                for j in (0..size).step_by(11) {
                    acc += flat.get(black_box(i), black_box(j));
                }
            }
            black_box(acc)
        });
    });
    group.bench_function("nested", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in (0..size).step_by(7) {
                for j in (0..size).step_by(11) {
                    acc += nested.get(black_box(i), black_box(j));
                }
            }
            black_box(acc)
        });
    });

    group.finish();
}

/// Benchmark nested traversal in native and transposed order
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for density in [0.01, 0.05].iter() {
        let size = 300;
        let cells = random_cells(size, *density);
        let flat = fill(SparseMatrix::<f64, RowMajor>::with_shape(size, size, 0), &cells);
        let nested = fill(SparseVecOfVec::<f64, RowMajor>::with_shape(size, size, 0), &cells);
        group.throughput(Throughput::Elements(flat.nnz() as u64));

        for (label, order) in [("rows", Major::Row), ("columns", Major::Column)] {
            group.bench_with_input(
                BenchmarkId::new(format!("flat_{}", label), density),
                &order,
                |b, &order| b.iter(|| black_box(nested_sum(&flat, order))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("nested_{}", label), density),
                &order,
                |b, &order| b.iter(|| black_box(nested_sum(&nested, order))),
            );
        }
    }

    group.finish();
}

/// Benchmark xᵀ·A
fn bench_prod_vec_mat(c: &mut Criterion) {
    let mut group = c.benchmark_group("prod_vec_mat");

    for size in [100, 500].iter() {
        let cells = random_cells(*size, 0.02);
        let m = fill(SparseVecOfVec::<f64, ColumnMajor>::with_shape(*size, *size, 0), &cells);
        let x = Array1::from_shape_fn(*size, |k| (k % 13) as f64);
        group.throughput(Throughput::Elements(m.nnz() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &(m, x), |b, (m, x)| {
            b.iter(|| {
                let y = prod_vec_mat(black_box(&x.view()), m).expect("shapes match");
                black_box(y);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_traversal,
    bench_prod_vec_mat
);
criterion_main!(benches);
