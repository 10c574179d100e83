//! Rank command - order departments by dissatisfaction.

use std::path::PathBuf;

use colored::Colorize;
use serde_json::json;
use tally::Tally;

pub fn run(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = Tally::new().analyze(&file)?;
    let ranking = analysis.dissatisfaction_ranking();

    if json {
        let entries: Vec<_> = ranking
            .iter()
            .enumerate()
            .map(|(i, s)| {
                json!({
                    "rank": i + 1,
                    "department": s.department,
                    "dissatisfaction": s.dissatisfaction,
                    "satisfaction": s.satisfaction,
                    "responses": s.response_count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Dissatisfaction ranking".yellow().bold());
    for (i, summary) in ranking.iter().enumerate() {
        let line = format!(
            "{:>3}. {:20} {:>4}%",
            i + 1,
            summary.department,
            summary.dissatisfaction
        );
        if analysis.most_dissatisfied_department.as_deref() == Some(summary.department.as_str()) {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
