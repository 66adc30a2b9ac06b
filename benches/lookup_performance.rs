// benches/lookup_performance.rs
//! Benchmarks for curl_strerror lookups and buffer translations.
//!
//! Static lookups should be a single match with no allocation; buffer
//! translators should be dominated by the native call they wrap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curl_strerror::{
    easy_strerror, lookup, multi_strerror, resolve, strerror, strerror_with, system_message,
    url_strerror, Domain, MessageBuf, NativeErrors, NumberingStyle,
};

/// Collaborator with no native messages, isolating the crate's own cost.
struct Offline(NumberingStyle);

impl NativeErrors for Offline {
    fn style(&self) -> NumberingStyle {
        self.0
    }
}

// ============================================================================
// Static Tables
// ============================================================================

fn bench_static_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_lookup");

    group.bench_function("easy_known", |b| b.iter(|| easy_strerror(black_box(28))));
    group.bench_function("easy_unknown", |b| b.iter(|| easy_strerror(black_box(9_999))));
    group.bench_function("multi_negative", |b| b.iter(|| multi_strerror(black_box(-1))));
    group.bench_function("url_last", |b| b.iter(|| url_strerror(black_box(31))));

    group.finish();
}

fn bench_uniform_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_lookup");

    for domain in [Domain::Easy, Domain::Multi, Domain::Share, Domain::Url] {
        group.bench_with_input(BenchmarkId::from_parameter(domain), &domain, |b, &domain| {
            b.iter(|| lookup(black_box(domain), black_box(3)));
        });
    }

    group.finish();
}

fn bench_record_write(c: &mut Criterion) {
    let record = resolve(Domain::Easy, 28);
    let mut line = String::with_capacity(128);

    c.bench_function("record_write_to", |b| {
        b.iter(|| {
            line.clear();
            black_box(&record).write_to(&mut line).unwrap();
        })
    });
}

// ============================================================================
// Buffer Translators
// ============================================================================

fn bench_system_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("system_translation");

    group.bench_function("native", |b| {
        let mut buf = [0u8; 256];
        b.iter(|| {
            let _ = black_box(strerror(black_box(2), &mut buf));
        })
    });

    group.bench_function("owned_message", |b| b.iter(|| system_message(black_box(2))));

    for style in [NumberingStyle::Posix, NumberingStyle::Windows] {
        let native = Offline(style);
        group.bench_with_input(
            BenchmarkId::new("fallback", format!("{style:?}")),
            &native,
            |b, native| {
                let mut buf = [0u8; 256];
                b.iter(|| {
                    let _ = black_box(strerror_with(native, black_box(123_456), &mut buf));
                })
            },
        );
    }

    group.finish();
}

fn bench_buffer_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_capacity");
    let text = "The system cannot find the file specified.";

    for capacity in [8usize, 32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            let mut storage = vec![0u8; capacity];
            b.iter(|| {
                let mut out = MessageBuf::new(&mut storage).unwrap();
                out.push_str(black_box(text));
                out.strip_line_ending();
                black_box(out.len())
            })
        });
    }

    group.finish();
}

#[cfg(feature = "security_table")]
fn bench_security_translation(c: &mut Criterion) {
    use curl_strerror::security::{security_strerror_with, status};

    let native = Offline(NumberingStyle::Windows);
    c.bench_function("security_symbol", |b| {
        let mut buf = [0u8; 256];
        b.iter(|| {
            let _ = black_box(security_strerror_with(
                &native,
                black_box(status::SEC_E_CERT_EXPIRED),
                &mut buf,
            ));
        })
    });
}

#[cfg(not(feature = "security_table"))]
fn bench_security_translation(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_static_lookup,
    bench_uniform_lookup,
    bench_record_write,
    bench_system_translation,
    bench_buffer_capacity,
    bench_security_translation,
);
criterion_main!(benches);
