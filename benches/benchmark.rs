use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use ukkonen::SuffixTreeBuilder;

const REGRESSION_LENGTHS: &[(&str, usize)] = &[("1k", 1_000), ("10k", 10_000)];

const REPORTING_LENGTHS: &[(&str, usize)] = &[("100k", 100_000)];

/// Pseudo-random DNA-like text of `len` characters.
fn random_text(len: usize) -> String {
    let alphabet = ['A', 'C', 'G', 'T'];
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % 4) as usize]
        })
        .collect()
}

/// Highly repetitive text, which exercises rule 3 and long suffix link walks.
fn repetitive_text(len: usize) -> String {
    "abcab".chars().cycle().take(len).collect()
}

fn build(builder: &SuffixTreeBuilder, text: &str) {
    let tree = builder.build(black_box(text));
    black_box(tree.num_nodes());
}

fn construction(c: &mut Criterion, lengths: &[(&str, usize)]) {
    let list = SuffixTreeBuilder::new();
    let table = SuffixTreeBuilder::new().with_list_capacity(0);
    for (name, len) in lengths {
        let random = random_text(*len);
        let repetitive = repetitive_text(*len);
        c.bench_function(&format!("random-{name}"), |b| {
            b.iter(|| build(&list, &random));
        });
        c.bench_function(&format!("random-table-{name}"), |b| {
            b.iter(|| build(&table, &random));
        });
        c.bench_function(&format!("repetitive-{name}"), |b| {
            b.iter(|| build(&list, &repetitive));
        });
    }
}

fn construction_regression(c: &mut Criterion) {
    construction(c, REGRESSION_LENGTHS);
}

fn construction_reporting(c: &mut Criterion) {
    construction(c, REPORTING_LENGTHS);
}

criterion_group!(regression, construction_regression);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = construction_reporting
}
criterion_main!(regression, reporting);
