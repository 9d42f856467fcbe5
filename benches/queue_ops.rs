//! Criterion benchmarks for the three queue backends
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_ops
//!
//! # Only the pairing heap's handle operations
//! cargo bench --bench queue_ops -- 'update_elt'
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pairing_pq::binary::BinaryHeapPq;
use pairing_pq::compare::MinFirst;
use pairing_pq::pairing::PairingHeap;
use pairing_pq::sorted::SortedPq;
use pairing_pq::{AddressableQueue, PriorityQueue};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 14];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

fn push_then_drain<Q: PriorityQueue<u64>>(mut queue: Q, values: &[u64]) -> u64 {
    for &v in values {
        queue.push(v);
    }
    let mut acc = 0u64;
    while let Some(v) = queue.pop() {
        acc = acc.wrapping_add(v);
    }
    acc
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &n in &SIZES {
        let values = random_values(n, 1);

        group.bench_with_input(BenchmarkId::new("binary", n), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain(BinaryHeapPq::with_comparator(MinFirst), vs)))
        });
        group.bench_with_input(BenchmarkId::new("pairing", n), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain(PairingHeap::with_comparator(MinFirst), vs)))
        });
        // The sorted backend's O(n) insert makes the largest size uninteresting
        if n <= 1 << 12 {
            group.bench_with_input(BenchmarkId::new("sorted", n), &values, |b, vs| {
                b.iter(|| black_box(push_then_drain(SortedPq::with_comparator(MinFirst), vs)))
            });
        }
    }

    group.finish();
}

fn bench_bulk_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_build");

    for &n in &SIZES {
        let values = random_values(n, 2);

        group.bench_with_input(BenchmarkId::new("binary", n), &values, |b, vs| {
            b.iter(|| {
                black_box(BinaryHeapPq::from_iter_with(vs.iter().copied(), MinFirst).len())
            })
        });
        group.bench_with_input(BenchmarkId::new("sorted", n), &values, |b, vs| {
            b.iter(|| black_box(SortedPq::from_iter_with(vs.iter().copied(), MinFirst).len()))
        });
        group.bench_with_input(BenchmarkId::new("pairing", n), &values, |b, vs| {
            b.iter(|| black_box(PairingHeap::from_iter_with(vs.iter().copied(), MinFirst).len()))
        });
    }

    group.finish();
}

fn bench_update_elt(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_elt");

    for &n in &SIZES {
        let values = random_values(n, 3);

        group.bench_with_input(BenchmarkId::new("pairing", n), &values, |b, vs| {
            b.iter(|| {
                let mut heap = PairingHeap::with_comparator(MinFirst);
                let handles: Vec<_> = vs.iter().map(|&v| heap.add_node(v)).collect();
                // Settle some structure before the updates
                heap.pop();
                for (i, h) in handles.iter().enumerate() {
                    if let Some(&current) = heap.get(h) {
                        let _ = heap.update_elt(h, current / 2 + i as u64 % 7);
                    }
                }
                black_box(heap.top().copied())
            })
        });

        group.bench_with_input(BenchmarkId::new("pairing_rebuild", n), &values, |b, vs| {
            let mut heap = PairingHeap::with_comparator(MinFirst);
            let handles: Vec<_> = vs.iter().map(|&v| heap.add_node(v)).collect();
            b.iter(|| {
                for h in handles.iter().step_by(3) {
                    if let Some(v) = heap.get_mut(h) {
                        *v = v.rotate_left(7);
                    }
                }
                heap.update_priorities();
                black_box(heap.top().copied())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_bulk_build, bench_update_elt);

criterion_main!(benches);
