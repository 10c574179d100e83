//! Integration tests for Tally.

use std::io::Write;
use tempfile::NamedTempFile;

use tally::{ParserConfig, QuestionType, Tally, TallyConfig, TallyError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_analyze_basic_csv() {
    let content = "Department,Question 1,Answer 1,Question 2,Answer 2\n\
                   Sales,How satisfied are you?,Very Satisfied,Rate the office,4 stars\n\
                   Sales,How satisfied are you?,Satisfied,Rate the office,5 stars\n\
                   Support,How satisfied are you?,Dissatisfied,Rate the office,2 stars\n\
                   Support,How satisfied are you?,Very Dissatisfied,Rate the office,1 star\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(analysis.department_count, 2);
    assert_eq!(analysis.statistics.rows_read, 4);
    assert_eq!(analysis.statistics.total_answers, 8);
    assert_eq!(analysis.most_dissatisfied_label(), "Support");

    let sales = analysis.department("Sales").unwrap();
    assert_eq!(sales.question_tallies[&1].question_type, QuestionType::SingleChoice);
    assert_eq!(sales.question_tallies[&2].question_type, QuestionType::StarRating);
    // 100, 75, 80, 100
    assert_eq!(sales.satisfaction, 89);
    assert_eq!(sales.dissatisfaction, 0);

    let support = analysis.department("Support").unwrap();
    // 75, 100, 60, 80
    assert_eq!(support.dissatisfaction, 79);

    let source = analysis.source.as_ref().expect("source metadata");
    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 4);
    assert_eq!(source.column_count, 5);
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_two_department_single_choice_scenario() {
    let content = "Department,Question 1,Answer 1\n\
                   A,Overall?,Very Satisfied\n\
                   A,Overall?,Satisfied\n\
                   B,Overall?,Dissatisfied\n\
                   B,Overall?,Very Dissatisfied\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).unwrap();

    assert_eq!(analysis.average_satisfaction, 88);
    assert_eq!(analysis.average_dissatisfaction, 88);
    assert_eq!(analysis.most_dissatisfied_department.as_deref(), Some("B"));
}

#[test]
fn test_tsv_with_multi_select_and_text() {
    let content = "Department\tQuestion 1\tAnswer 1\tQuestion 2\tAnswer 2\n\
                   IT\tWhich tools?\tSlack, Jira\tComments\tGood team\n\
                   IT\tWhich tools?\tJira\tComments\tNo answer\n\
                   IT\tWhich tools?\tJira, Slack, Jira\tComments\tToo many meetings\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).unwrap();
    assert_eq!(analysis.source.as_ref().unwrap().format, "tsv");

    let it = analysis.department("IT").unwrap();
    let tools = &it.question_tallies[&1];
    assert_eq!(tools.question_type, QuestionType::MultiSelect);
    assert_eq!(tools.option_counts["Jira"], 4);
    assert_eq!(tools.option_counts["Slack"], 2);
    assert_eq!(tools.total_answered, 3);

    let comments = &it.question_tallies[&2];
    assert_eq!(comments.question_type, QuestionType::Text);
    assert_eq!(comments.total_answered, 2);
    assert!(!comments.option_counts.contains_key("No answer"));
    assert_eq!(comments.samples, vec!["Good team", "Too many meetings"]);

    assert_eq!(it.satisfaction, 0);
    assert_eq!(it.dissatisfaction, 0);
    assert_eq!(analysis.most_dissatisfied_department, None);
}

#[test]
fn test_missing_department_and_non_contiguous_questions() {
    let content = "Department,Question 3,Answer 3,Question 7,Answer 7\n\
                   ,Rate us,3,Why?,Fast\n\
                   HR,Rate us,No answer,Why?,Slow\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).unwrap();
    let unknown = analysis.department("Unknown").unwrap();
    assert_eq!(unknown.question_tallies.keys().copied().collect::<Vec<_>>(), vec![3, 7]);

    let hr = analysis.department("HR").unwrap();
    assert!(!hr.question_tallies.contains_key(&3));
    assert_eq!(hr.response_count, 1);
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let content = "Department,Question 1,Answer 1\n\
                   A,Rate us,No answer\n\
                   A,,5\n\
                   A,Rate us,5\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).unwrap();
    assert_eq!(analysis.statistics.rows_read, 3);
    assert_eq!(analysis.statistics.rows_skipped, 2);
    assert_eq!(analysis.department("A").unwrap().satisfaction, 100);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_file_is_source_unavailable() {
    let result = Tally::new().analyze("/nonexistent/survey.csv");
    assert!(matches!(result, Err(TallyError::SourceUnavailable { .. })));
}

#[test]
fn test_header_only_file_is_empty_source() {
    let file = create_test_file("Department,Question 1,Answer 1\n");
    let result = Tally::new().analyze(file.path());
    assert!(matches!(result, Err(TallyError::EmptySource(_))));
}

#[test]
fn test_empty_file_is_empty_source() {
    let file = create_test_file("");
    let result = Tally::new().analyze(file.path());
    assert!(matches!(result, Err(TallyError::EmptySource(_))));
}

#[test]
fn test_explicit_delimiter() {
    let content = "Department;Question 1;Answer 1\nOps;Rate us;2\n";
    let file = create_test_file(content);
    let config = TallyConfig::default().with_parser(ParserConfig::default().with_delimiter(b';'));

    let analysis = Tally::with_config(config).analyze(file.path()).unwrap();
    assert_eq!(analysis.department("Ops").unwrap().dissatisfaction, 60);
}

// =============================================================================
// Determinism and output
// =============================================================================

#[test]
fn test_repeated_runs_are_identical() {
    let content = "Department,Question 1,Answer 1,Question 2,Answer 2\n\
                   B,Overall?,Neutral,Colors,\"Red, Blue\"\n\
                   A,Overall?,Satisfied,Colors,Green\n\
                   B,Overall?,Dissatisfied,Colors,Blue\n";

    let engine = Tally::new();
    let rows = || {
        tally::Parser::new()
            .rows_from_bytes(content)
            .expect("rows")
    };

    let first = engine.analyze_rows(rows()).unwrap();
    let second = engine.analyze_rows(rows()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());

    let departments: Vec<&str> = first.department_summaries.keys().map(String::as_str).collect();
    assert_eq!(departments, vec!["B", "A"]);
}

#[test]
fn test_json_output_shape() {
    let content = "Department,Question 1,Answer 1\nA,Rate us,4\n";
    let file = create_test_file(content);

    let analysis = Tally::new().analyze(file.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&analysis.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["department_count"], 1);
    assert_eq!(json["average_satisfaction"], 80);
    assert!(json["most_dissatisfied_department"].is_null());
    assert_eq!(
        json["department_summaries"]["A"]["question_tallies"]["1"]["type"],
        "star_rating"
    );
}
