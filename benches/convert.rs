//! Benchmarks for the asset conversion pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use asset2c::{Mode, escape, render};

const INDEX_HTML: &str = include_str!("../tests/fixtures/index.html");
const ROOT_CA_PEM: &str = include_str!("../tests/fixtures/root_ca.pem");

fn bench_escape_html(c: &mut Criterion) {
    c.bench_function("escape_html", |b| {
        b.iter(|| escape(INDEX_HTML).into_owned());
    });
}

fn bench_escape_pem(c: &mut Criterion) {
    // PEM bodies contain no escapable characters, so this measures the
    // zero-copy fast path.
    c.bench_function("escape_pem", |b| {
        b.iter(|| escape(ROOT_CA_PEM));
    });
}

fn bench_render_markup(c: &mut Criterion) {
    c.bench_function("render_markup", |b| {
        b.iter(|| render(INDEX_HTML, &Mode::Markup, "index.html").unwrap());
    });
}

fn bench_render_certificate(c: &mut Criterion) {
    let mode = Mode::Certificate {
        var_name: "aws_cert_ca".into(),
    };
    c.bench_function("render_certificate", |b| {
        b.iter(|| render(ROOT_CA_PEM, &mode, "root_ca.pem").unwrap());
    });
}

criterion_group!(
    benches,
    bench_escape_html,
    bench_escape_pem,
    bench_render_markup,
    bench_render_certificate
);
criterion_main!(benches);
