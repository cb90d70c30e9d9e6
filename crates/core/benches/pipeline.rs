use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use swiftread_core::{ContentProcessor, IdentityRewriter, ProcessorConfig, RewriteResult, assemble, chunk_text};

fn sample_text(words: usize) -> String {
    (0..words).map(|i| format!("word{}", i % 97)).collect::<Vec<_>>().join(" ")
}

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_text");

    for words in [1_000, 10_000, 100_000] {
        let text = sample_text(words);
        group.bench_with_input(BenchmarkId::new("words", words), &text, |b, text| {
            b.iter(|| chunk_text(black_box(text), 4000))
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let results: Vec<RewriteResult> =
        (0..25).map(|i| RewriteResult::rewritten(i, sample_text(4000))).collect();

    c.bench_function("assemble_25_chunks", |b| b.iter(|| assemble(black_box(results.clone()))));
}

fn bench_process(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let text = sample_text(40_000);
    let config = ProcessorConfig::builder().max_words(4000).max_concurrency(8).build();
    let processor = ContentProcessor::with_config(config, Arc::new(IdentityRewriter));

    c.bench_function("process_identity_40k_words", |b| {
        b.iter(|| runtime.block_on(processor.process(black_box(&text))))
    });
}

criterion_group!(benches, bench_chunking, bench_assemble, bench_process);
criterion_main!(benches);
