use std::sync::Arc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taglog::{ColorMode, Logger, LoggerConfig, MemorySink};

fn logger(level: u8) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::builder()
        .with_config(LoggerConfig::new().tags(["bench", "path"]).level(level))
        .with_color(ColorMode::Never)
        .with_sink(sink.clone())
        .build()
        .expect("valid level");
    (logger, sink)
}

fn bench_suppressed(c: &mut Criterion) {
    let (quiet, _) = logger(1);

    c.bench_function("suppressed_debug", |b| {
        b.iter(|| taglog::debug!(quiet, black_box("value"), black_box(42)))
    });

    c.bench_function("disabled_profiler", |b| {
        b.iter(|| quiet.profiler(black_box("op")).finish(black_box("done")))
    });
}

fn bench_emitted(c: &mut Criterion) {
    let (loud, sink) = logger(5);

    c.bench_function("emitted_debug", |b| {
        b.iter(|| {
            taglog::debug!(loud, black_box("value"), black_box(42));
            sink.clear();
        })
    });
}

criterion_group!(benches, bench_suppressed, bench_emitted);
criterion_main!(benches);
