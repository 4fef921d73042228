//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package monkeyc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkeyc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).len()
}

fn bench_lexer_let_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_let");

    let source = "let x = 42; let add = fn(a, b) { a + b; }; add(x, 1);";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_recursive_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        let fibonacci = fn(n) {
            if (n < 2) {
                return n;
            } else {
                return fibonacci(n - 1) + fibonacci(n - 2);
            }
        };

        let counter = fn(x) {
            if (x > 100) {
                return true;
            } else {
                return counter(x + 1);
            }
        };
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_if_and_recursion", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("arithmetic", |b| {
        b.iter(|| token_count(black_box("1 + 2 * 3 / 4 - 5;")))
    });

    group.bench_function("comparisons", |b| {
        b.iter(|| token_count(black_box("1 < 2; 3 > 4; 5 == 5; 6 != 7;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| token_count(black_box("let x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("let very_long_variable_name = 42;")))
    });

    group.bench_function("many_idents", |b| {
        b.iter(|| {
            token_count(black_box(
                "let a = 1; let b = 2; let c = 3; let d = 4; let e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_let_statements,
    bench_lexer_recursive_function,
    bench_lexer_operators,
    bench_lexer_identifiers
);
criterion_main!(benches);
