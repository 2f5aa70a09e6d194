//! Criterion benchmarks for u-crossword.
//!
//! Uses open grids and seeded random word lists over a small alphabet so
//! that propagation and backtracking both have work to do.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_crossword::crossword::{ConstraintGraph, Lexicon};
use u_crossword::csp::{ac3, enforce_node_consistency, ArcOrder, CrosswordSolver, DomainStore, SolverConfig};

// ===========================================================================
// Inputs
// ===========================================================================

/// Open `size x size` grid with every other cell of odd rows and columns
/// blocked, giving interlocking slots of length `size`.
fn lattice(size: usize) -> ConstraintGraph {
    let grid: Vec<Vec<bool>> = (0..size)
        .map(|r| (0..size).map(|c| r % 2 == 0 || c % 2 == 0).collect())
        .collect();
    ConstraintGraph::from_structure(&grid).unwrap()
}

fn random_lexicon(seed: u64, count: usize, lengths: &[usize]) -> Lexicon {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = "abcdefgh".chars().collect();
    let words: Vec<String> = (0..count)
        .map(|_| {
            let len = lengths[rng.random_range(0..lengths.len())];
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect();
    Lexicon::new(words)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ac3(c: &mut Criterion) {
    let mut group = c.benchmark_group("ac3");
    group.sample_size(20);

    for &size in &[5usize, 7, 9] {
        let graph = lattice(size);
        let lexicon = random_lexicon(42, 4000, &[size]);
        for order in [ArcOrder::Stack, ArcOrder::Queue] {
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), size),
                &(&graph, &lexicon),
                |b, (g, l)| {
                    b.iter(|| {
                        let mut store = DomainStore::new(g, l);
                        enforce_node_consistency(g, l, &mut store);
                        black_box(ac3(g, l, &mut store, None, order))
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for &size in &[5usize, 7] {
        let graph = lattice(size);
        let lexicon = random_lexicon(7, 6000, &[size]);
        for mac in [true, false] {
            let config = SolverConfig::default()
                .with_maintain_arc_consistency(mac)
                .with_node_limit(200_000);
            group.bench_with_input(
                BenchmarkId::new(if mac { "mac" } else { "plain" }, size),
                &(&graph, &lexicon, config),
                |b, (g, l, cfg)| {
                    b.iter(|| {
                        let result = CrosswordSolver::run(black_box(g), black_box(l), cfg).unwrap();
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_ac3, bench_solve);
criterion_main!(benches);
