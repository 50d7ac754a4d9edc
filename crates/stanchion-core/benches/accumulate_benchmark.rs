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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stanchion_core::num::stepping::{try_accumulate, FloorPolicy, StepDirection};
use std::hint::black_box;

/// Throughput of the bounded add walk over i64, per step performed.
///
/// Starting points are randomized but chosen so the walk stays in
/// bounds; the measurement covers the precondition test plus the step.
fn bench_add_walk(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xACC0);
    let starts: Vec<i64> = (0..64).map(|_| rng.gen_range(0..1_000_000)).collect();

    let mut group = c.benchmark_group("try_accumulate/add");
    for steps in [64u64, 1_024, 16_384] {
        group.throughput(Throughput::Elements(steps));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                for &start in &starts {
                    let result = try_accumulate(
                        black_box(start),
                        black_box(3i64),
                        steps,
                        StepDirection::Add,
                        FloorPolicy::Zero,
                    );
                    black_box(result).expect("walk stays in bounds");
                }
            })
        });
    }
    group.finish();
}

/// Cost of a walk that crosses immediately, i.e. the fail-fast path.
fn bench_fail_fast(c: &mut Criterion) {
    c.bench_function("try_accumulate/fail_fast", |b| {
        b.iter(|| {
            let result = try_accumulate(
                black_box(i64::MAX - 1),
                black_box(2i64),
                black_box(1_000_000u64),
                StepDirection::Add,
                FloorPolicy::Zero,
            );
            assert!(black_box(result).is_err());
        })
    });
}

criterion_group!(benches, bench_add_walk, bench_fail_fast);
criterion_main!(benches);
