use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmv::{iterate, spmv, CsrMatrix, DoubleBuffer, Placement, Triplet, TripletHeader};

/// Random square matrix with `per_row` entries per row on average
fn random_triplets(n: usize, per_row: usize, seed: u64) -> (TripletHeader, Vec<Triplet<f32>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let triplets: Vec<Triplet<f32>> = (0..n * per_row)
        .map(|_| Triplet::new(rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(-1.0..1.0)))
        .collect();
    (TripletHeader::new(n, n, triplets.len()), triplets)
}

/// Square matrix whose entries all sit in row 0, the worst case for probing
fn dense_row_triplets(n: usize) -> (TripletHeader, Vec<Triplet<f32>>) {
    let triplets: Vec<Triplet<f32>> = (0..n).map(|col| Triplet::new(0, col, 1.0)).collect();
    (TripletHeader::new(n, n, n), triplets)
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("spmv_kernel");
    for n in [1_000, 10_000, 100_000] {
        let (header, triplets) = random_triplets(n, 8, 42);
        let matrix = CsrMatrix::from_triplets(header, &triplets, Placement::Cursor).unwrap();
        let x = vec![1.0f32; n];
        let mut y = vec![0.0f32; n];

        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            let view = m.view();
            b.iter(|| spmv(&view, black_box(&x), black_box(&mut y)).unwrap())
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let (header, triplets) = random_triplets(10_000, 8, 7);
    let matrix = CsrMatrix::from_triplets(header, &triplets, Placement::Cursor).unwrap();

    c.bench_function("iterate_100_reps", |b| {
        let view = matrix.view();
        b.iter(|| {
            let mut buffers = DoubleBuffer::new(matrix.num_rows());
            iterate(&view, &mut buffers, black_box(100)).unwrap();
            black_box(buffers.into_current())
        })
    });
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_build");
    let cases = [
        ("random", random_triplets(20_000, 8, 1)),
        ("dense_row", dense_row_triplets(4_000)),
    ];

    for (name, (header, triplets)) in &cases {
        for placement in [Placement::Cursor, Placement::Probe] {
            let id = BenchmarkId::new(format!("{placement:?}"), name);
            group.bench_with_input(id, triplets, |b, triplets| {
                b.iter(|| CsrMatrix::from_triplets(*header, black_box(triplets), placement).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_kernel, bench_iterate, bench_placement);
criterion_main!(benches);
