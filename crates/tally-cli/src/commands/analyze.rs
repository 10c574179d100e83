//! Analyze command - run the engine and summarize the result.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tally::{QuestionType, Tally, TallyConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    no_answer: String,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = TallyConfig::default().with_no_answer_sentinel(no_answer);
    let analysis = Tally::with_config(config).analyze(&file)?;

    if json {
        println!("{}", analysis.to_json_pretty()?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "Read {} rows ({} skipped) from {} departments",
        analysis.statistics.rows_read.to_string().white().bold(),
        analysis.statistics.rows_skipped.to_string().yellow(),
        analysis.department_count.to_string().white().bold()
    );
    println!();
    println!(
        "Overall satisfaction:    {}",
        format!("{}%", analysis.average_satisfaction).green().bold()
    );
    println!(
        "Overall dissatisfaction: {}",
        format!("{}%", analysis.average_dissatisfaction).red().bold()
    );
    println!(
        "Most dissatisfied:       {}",
        analysis.most_dissatisfied_label().yellow().bold()
    );

    println!();
    println!("{}", "Departments:".yellow().bold());
    for summary in analysis.department_summaries.values() {
        println!(
            "  {:20} {:>5} responses  {:>4}% satisfied  {:>4}% dissatisfied",
            summary.department,
            summary.response_count,
            summary.satisfaction,
            summary.dissatisfaction
        );

        if verbose {
            for (index, tally) in &summary.question_tallies {
                println!(
                    "    Q{:<3} {:14} {} ({} answers)",
                    index,
                    tally.question_type.to_string(),
                    tally.question_text,
                    tally.total_answered
                );
                if tally.question_type == QuestionType::StarRating {
                    if let Some(mean) = tally.mean_stars {
                        println!("          mean {:.2} stars", mean);
                    }
                }
            }
        }
    }

    if let Some(path) = output {
        fs::write(&path, analysis.to_json_pretty()?)?;
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}
