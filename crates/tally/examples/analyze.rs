//! Example: Analyze a survey export with Tally.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use tally::{QuestionType, Tally};

fn main() -> tally::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let analysis = Tally::new().analyze(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Survey Analysis: {}", path.display());
    println!("{}", separator);
    println!();
    println!("  Departments:       {}", analysis.department_count);
    println!("  Satisfaction:      {}%", analysis.average_satisfaction);
    println!("  Dissatisfaction:   {}%", analysis.average_dissatisfaction);
    println!("  Most dissatisfied: {}", analysis.most_dissatisfied_label());
    println!();

    for summary in analysis.department_summaries.values() {
        println!(
            "## {} ({} responses, {}% satisfied, {}% dissatisfied)",
            summary.department, summary.response_count, summary.satisfaction, summary.dissatisfaction
        );
        for (index, tally) in &summary.question_tallies {
            println!("  Q{} [{}] {}", index, tally.question_type, tally.question_text);
            let options = match tally.question_type {
                QuestionType::MultiSelect => tally.options_by_count(),
                _ => tally.option_counts.iter().map(|(k, &v)| (k.as_str(), v)).collect(),
            };
            for (option, count) in options.iter().take(5) {
                println!("      {:30} {}", option, count);
            }
        }
        println!();
    }

    Ok(())
}
