use chatmark::render::{MessageRenderer, RenderCache};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn make_reply(paragraphs: usize) -> String {
    let base = "lorem ipsum **dolor** sit amet `consectetur` adipiscing elit sed do eiusmod tempor";
    let mut reply = String::new();
    for i in 0..paragraphs {
        reply.push_str(base);
        reply.push_str("\n\n");
        if i % 4 == 3 {
            reply.push_str(
                "```ui-widget\n{\"type\":\"product\",\"title\":\"Kettle\",\"price\":39}\n```\n\n",
            );
        }
    }
    reply
}

/// Prefix ends a streaming reply passes through, every `step` bytes.
fn prefix_ends(reply: &str, step: usize) -> Vec<usize> {
    let mut ends: Vec<usize> = (step..reply.len())
        .step_by(step)
        .filter(|end| reply.is_char_boundary(*end))
        .collect();
    ends.push(reply.len());
    ends
}

fn bench_render_cache(c: &mut Criterion) {
    for &paragraphs in &[8usize, 32usize] {
        let reply = make_reply(paragraphs);
        let ends = prefix_ends(&reply, 64);

        let mut group = c.benchmark_group(format!("render_cache_paragraphs{paragraphs}"));
        group.throughput(Throughput::Elements(ends.len() as u64));

        group.bench_function(BenchmarkId::new("no_cache_stream", paragraphs), |b| {
            b.iter(|| {
                let mut renderer = MessageRenderer::new().with_cache(RenderCache::new(0));
                for end in &ends {
                    black_box(renderer.render(&reply[..*end]));
                }
            })
        });
        group.bench_function(BenchmarkId::new("with_cache_stream", paragraphs), |b| {
            let mut renderer = MessageRenderer::new();
            b.iter(|| {
                for end in &ends {
                    black_box(renderer.render(&reply[..*end]));
                }
            })
        });

        // Redraws of a finished message: one parse, then cache hits.
        group.bench_function(BenchmarkId::new("with_cache_redraw", paragraphs), |b| {
            let mut renderer = MessageRenderer::new();
            b.iter(|| black_box(renderer.render(&reply)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_render_cache);
criterion_main!(benches);
