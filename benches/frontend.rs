mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gst::ast::Statement;
use gst::node::{Assignment, ConditionalHeader};
use gst::{lexer, parser};

fn lower_all(statements: &[Statement]) -> usize {
    statements
        .iter()
        .filter(|statement| match statement {
            Statement::If { .. } => ConditionalHeader::try_from(*statement).is_ok(),
            _ => Assignment::try_from(*statement).is_ok(),
        })
        .count()
}

fn bench_frontend(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontend");

    for (label, path) in common::workloads() {
        let source = common::load_source(&path);
        let tokens = lexer::tokenize(&source).expect("tokenize");
        let program = common::load_program(&path);

        group.bench_function(format!("tokenize/{label}"), |b| {
            b.iter(|| black_box(lexer::tokenize(black_box(&source)).expect("tokenize")))
        });

        group.bench_function(format!("parse_tokens/{label}"), |b| {
            b.iter(|| black_box(parser::parse_tokens(black_box(tokens.clone())).expect("parse")))
        });

        group.bench_function(format!("parse_source/{label}"), |b| {
            b.iter(|| black_box(parser::parse(black_box(&source)).expect("parse")))
        });

        group.bench_function(format!("lower/{label}"), |b| {
            b.iter(|| black_box(lower_all(black_box(&program.statements))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frontend);
criterion_main!(benches);
