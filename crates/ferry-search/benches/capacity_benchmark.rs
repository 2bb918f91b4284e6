// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ferry_model::instance::Instance;
use ferry_search::feasibility::is_feasible;
use ferry_search::search::{CapacitySearchBuilder, min_capacity};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Random weights in `1..=1000`, with roughly `n / 20` trips.
fn random_instance(num_items: usize, seed: u64) -> Instance<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let weights: Vec<u64> = (0..num_items).map(|_| rng.gen_range(1..=1000)).collect();
    let num_trips = (num_items / 20).max(1);
    Instance::new(num_trips, weights).expect("generated instance must be valid")
}

fn bench_feasibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("feasibility");

    for n in SIZES {
        let instance = random_instance(n, n as u64);
        // The hardest probe sits right at the answer.
        let capacity = min_capacity(&instance);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("is_feasible", n), &instance, |b, inst| {
            b.iter(|| {
                let ok = is_feasible(black_box(inst), black_box(capacity));
                if !ok {
                    panic!("Benchmark configuration error: minimal capacity reported infeasible.");
                }
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity_search");

    for n in SIZES {
        let instance = random_instance(n, n as u64 ^ 0xfe44);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("min_capacity", n), &instance, |b, inst| {
            b.iter(|| black_box(min_capacity(black_box(inst))))
        });

        let mut search = CapacitySearchBuilder::new().build();
        group.bench_with_input(BenchmarkId::new("solve", n), &instance, |b, inst| {
            b.iter(|| black_box(search.solve(black_box(inst))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_feasibility, bench_search);
criterion_main!(benches);
