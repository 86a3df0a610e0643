use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vsemver::Version;

mod support;
use support::{parsing_regex, regex_parser};

const INPUT_S: &str = "v1";
const INPUT_M: &str = "v1.0.0";
const INPUT_XL: &str = "v1.2.3-alpha1.9-build5.7.3aedf.01337";

fn sample_versions() -> Vec<Version> {
    (0..1_000_u64)
        .map(|i| {
            let pre = match i % 3 {
                0 => String::new(),
                1 => format!("rc.{}", i % 7),
                _ => format!("beta{}", i % 5),
            };
            Version::with_pre_release(i % 4, i % 11, i % 13, pre)
        })
        .collect()
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser");
    let re = parsing_regex();

    for &input in [INPUT_S, INPUT_M, INPUT_XL].iter() {
        let vsemver = BenchmarkId::new("vsemver", input);
        group.bench_with_input(vsemver, input, |b, input| {
            b.iter(|| vsemver::parse(black_box(input)).unwrap())
        });
        let validate = BenchmarkId::new("vsemver_validate", input);
        group.bench_with_input(validate, input, |b, input| {
            b.iter(|| vsemver::parse_into::<()>(black_box(input)).unwrap())
        });
        let regex = BenchmarkId::new("regex_parser", input);
        group.bench_with_input(regex, &(input, &re), |b, (input, re)| {
            b.iter(|| regex_parser(re, black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let versions = sample_versions();

    c.bench_function("sort", |b| {
        b.iter(|| {
            let mut versions = black_box(versions.clone());
            versions.sort();
            versions
        })
    });
}

criterion_group!(benches, bench_parsers, bench_ordering);
criterion_main!(benches);
