//! Full analysis pipeline performance benchmarks.
//!
//! Measures end-to-end analysis including row parsing, normalization,
//! classification, scoring, and aggregation.

use std::hint::black_box;
use std::io::Write;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tally::{Parser, Tally};
use tempfile::NamedTempFile;

const DEPARTMENTS: &[&str] = &["Sales", "Support", "Engineering", "HR", "Finance"];
const LEVELS: &[&str] = &[
    "Very Satisfied",
    "Satisfied",
    "Neutral",
    "Dissatisfied",
    "Very Dissatisfied",
];
const TOOLS: &[&str] = &["Slack, Jira", "Jira", "Email, Slack, Wiki", "Wiki"];
const COMMENTS: &[&str] = &["Great team", "Too many meetings", "No answer", "More training"];

/// Generate a realistic survey export with four questions per row.
fn generate_survey_data(rows: usize) -> String {
    let mut data = String::new();
    data.push_str("Department,Question 1,Answer 1,Question 2,Answer 2,Question 3,Answer 3,Question 4,Answer 4\n");

    for row in 0..rows {
        data.push_str(DEPARTMENTS[row % DEPARTMENTS.len()]);
        data.push_str(",Overall satisfaction,");
        data.push_str(LEVELS[row % LEVELS.len()]);
        data.push_str(&format!(",Rate your manager,{} stars", (row % 5) + 1));
        data.push_str(&format!(",Tools used,\"{}\"", TOOLS[row % TOOLS.len()]));
        data.push_str(",Comments,");
        data.push_str(COMMENTS[row % COMMENTS.len()]);
        data.push('\n');
    }

    data
}

/// Benchmark the file-based pipeline.
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_survey_data(*rows);
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(data.as_bytes()).unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("survey_rows", rows), &file, |b, file| {
            let engine = Tally::new();
            b.iter(|| black_box(engine.analyze(file.path()).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the engine alone, with rows already decoded.
fn bench_in_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_memory");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_survey_data(*rows);
        let records: Vec<_> = Parser::new()
            .rows_from_bytes(data)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("survey_rows", rows), &records, |b, records| {
            let engine = Tally::new();
            b.iter(|| black_box(engine.analyze_records(records.clone()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_analysis, bench_in_memory);
criterion_main!(benches);
