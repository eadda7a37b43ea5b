//! Performance benchmarks for the text formatting helpers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use textnum::text::{plural, split_lines, to_title_case};

/// Create a space-delimited input with the given number of words
fn create_words_input(num_words: usize) -> String {
    (0..num_words)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a multi-line input with the given number of lines
fn create_lines_input(num_lines: usize, crlf: bool) -> String {
    let boundary = if crlf { "\r\n" } else { "\n" };
    let mut text = String::new();
    for i in 0..num_lines {
        text.push_str(&format!("line {}{}", i, boundary));
    }
    text
}

fn bench_to_title_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_title_case");
    for num_words in [1usize, 16, 256] {
        let input = create_words_input(num_words);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_words),
            &input,
            |b, input| {
                b.iter(|| black_box(to_title_case(input)));
            },
        );
    }
    group.finish();
}

fn bench_split_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_lines");
    for (name, input) in [
        ("unix_1k", create_lines_input(1000, false)),
        ("windows_1k", create_lines_input(1000, true)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(split_lines(input)));
        });
    }
    group.finish();
}

fn bench_plural(c: &mut Criterion) {
    c.bench_function("plural", |b| {
        b.iter(|| {
            black_box(plural(black_box("Miss"), black_box(2)));
            black_box(plural(black_box("cat"), black_box(1)));
        });
    });
}

criterion_group!(
    benches,
    bench_to_title_case,
    bench_split_lines,
    bench_plural
);
criterion_main!(benches);
