#![allow(dead_code)]
use std::fs;
use std::path::Path;

use gst::ast::Program;
use gst::{lexer, parser};
use test_support::load_cases;

/// Benchmark workloads: `(case name, program path)` for every case marked `bench`.
pub fn workloads() -> Vec<(String, String)> {
    load_cases(Path::new("tests/programs"))
        .unwrap_or_else(|err| panic!("load cases: {err:#}"))
        .into_iter()
        .filter(|case| case.spec.bench)
        .map(|case| (case.name, case.program_path.display().to_string()))
        .collect()
}

pub fn load_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("read {path}: {err}"))
}

pub fn load_program(path: &str) -> Program {
    let source = load_source(path);
    let tokens = lexer::tokenize(&source).unwrap_or_else(|err| panic!("tokenize {path}: {err}"));
    parser::parse_tokens(tokens).unwrap_or_else(|err| panic!("parse {path}: {err}"))
}
