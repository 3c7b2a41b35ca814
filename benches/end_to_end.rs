use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use string_calc::args::Args;
use string_calc_core::{Calculator, add};

fn long_default_input(n: usize) -> String {
    (0..n).map(|i| (i % 1500).to_string()).collect::<Vec<_>>().join(",")
}

fn long_header_input(n: usize) -> String {
    let body = (0..n).map(|i| (i % 1500).to_string()).collect::<Vec<_>>().join("plus");
    format!("//[d][plus]\n{body}")
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["string_calc", "1,2"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_add(c: &mut Criterion) {
    let default_input = long_default_input(10_000);
    let header_input = long_header_input(10_000);
    let calculator = Calculator::default();

    c.bench_function("add_kata_inputs", |b| {
        b.iter(|| {
            black_box(add(black_box("5,10\n25,1001")).unwrap());
            black_box(add(black_box("//[d][plus]\n1plus2plus5d10d12")).unwrap());
        })
    });
    c.bench_function("add_10k_default", |b| {
        b.iter(|| black_box(calculator.add(black_box(&default_input)).unwrap()))
    });
    c.bench_function("add_10k_bracketed", |b| {
        b.iter(|| black_box(calculator.add(black_box(&header_input)).unwrap()))
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_add);
criterion_main!(benches);
