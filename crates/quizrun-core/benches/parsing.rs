use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrun_core::loader::{parse_questions, LoaderOptions};

fn bench_parse_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_questions");
    let options = LoaderOptions::default();

    let small = "2+2\t4\nCapital of France\tParis\n";

    let large = {
        let mut s = String::new();
        for i in 0..1000 {
            s.push_str(&format!("What is {i} + {i}?\t{}\tarithmetic\n", i * 2));
        }
        s
    };

    let quoted = {
        let mut s = String::new();
        for i in 0..200 {
            s.push_str(&format!("\"Line {i}\twith tab\"\t\"answer {i}\"\n"));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| parse_questions(black_box(small.as_bytes()), &options))
    });
    group.bench_function("large_1000_rows", |b| {
        b.iter(|| parse_questions(black_box(large.as_bytes()), &options))
    });
    group.bench_function("quoted_200_rows", |b| {
        b.iter(|| parse_questions(black_box(quoted.as_bytes()), &options))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_questions);
criterion_main!(benches);
