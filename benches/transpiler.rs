mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gst::{Transpiler, TranspilerConfig, translate};

fn bench_transpiler(c: &mut Criterion) {
    for (label, path) in common::workloads() {
        let source = common::load_source(&path);
        let program = common::load_program(&path);

        c.bench_function(&format!("transpiler_render_only_{label}"), |b| {
            let transpiler = Transpiler::default();
            b.iter(|| {
                let output = transpiler
                    .transpile(black_box(&program))
                    .expect("transpile");
                black_box(output);
            })
        });

        c.bench_function(&format!("transpiler_total_{label}"), |b| {
            let config = TranspilerConfig::default();
            b.iter(|| {
                let output = translate(black_box(&source), &config).expect("translate");
                black_box(output);
            })
        });
    }
}

criterion_group!(benches, bench_transpiler);
criterion_main!(benches);
