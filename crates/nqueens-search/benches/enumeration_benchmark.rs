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
use nqueens_model::size::BoardSize;
use nqueens_search::engine::QueensSearch;
use nqueens_search::result::SearchOutcome;
use std::hint::black_box;

/// Known solution counts, used as throughput and as a sanity check.
const SIZES: &[(usize, u64)] = &[(6, 4), (8, 92), (10, 724), (12, 14_200)];

fn bench_full_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_enumeration");

    for &(n, expected) in SIZES {
        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let search = QueensSearch::new(BoardSize::new(black_box(n)));
                let count = search.count() as u64;
                assert_eq!(count, expected);
                count
            });
        });
    }

    group.finish();
}

fn bench_first_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_solution");

    for n in [8usize, 12, 16, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut search = QueensSearch::new(BoardSize::new(n));
            b.iter(|| {
                search.reset();
                match search.next_solution() {
                    SearchOutcome::Found(solution) => black_box(solution),
                    other => panic!("expected a solution for n = {}, got {}", n, other),
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_enumeration, bench_first_solution);
criterion_main!(benches);
