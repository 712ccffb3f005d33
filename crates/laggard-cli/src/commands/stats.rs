use crate::OutputFormat;
use anyhow::Result;
use laggard_core::analyze::{self, AnalysisOptions};
use laggard_core::stats::ReportEntry;
use std::path::Path;

/// Analyze one explicitly named log file and return the ranked entries
pub fn analyze_log(file: &Path, top: Option<usize>) -> Result<Vec<ReportEntry>> {
    let options = AnalysisOptions {
        report_size: top,
        ..AnalysisOptions::default()
    };
    Ok(analyze::analyze_file(file, &options)?)
}

pub fn execute(file: &Path, top: Option<usize>, format: OutputFormat) -> Result<()> {
    tracing::info!(
        "Collecting statistics from {} ({} output)",
        file.display(),
        format.as_str()
    );

    let entries = analyze_log(file, top)?;

    match format {
        OutputFormat::Json => output_json(&entries)?,
        OutputFormat::Table => output_table(&entries),
        OutputFormat::Pretty => output_pretty(&entries),
    }

    Ok(())
}

fn output_pretty(entries: &[ReportEntry]) {
    use console::style;

    println!("\n{}", style("Access Log Report").bold().cyan());
    println!("{}", style("=================").cyan());

    for (i, entry) in entries.iter().enumerate() {
        println!("\n  {}. {}", i + 1, style(&entry.url).bold());
        println!(
            "     requests: {} ({:.1}% of traffic)",
            entry.count,
            entry.count_perc * 100.0
        );
        println!(
            "     time:     avg {:.3}s  med {:.3}s  max {:.3}s  sum {:.3}s",
            entry.time_avg, entry.time_med, entry.time_max, entry.time_sum
        );
    }

    println!(); // trailing newline
}

fn output_json(entries: &[ReportEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    println!("{}", json);
    Ok(())
}

fn output_table(entries: &[ReportEntry]) {
    // Simple CSV-style table
    println!("url,count,count_perc,time_sum,time_perc,time_avg,time_max,time_med");
    for entry in entries {
        println!(
            "{},{},{},{},{},{},{},{}",
            entry.url,
            entry.count,
            entry.count_perc,
            entry.time_sum,
            entry.time_perc,
            entry.time_avg,
            entry.time_max,
            entry.time_med
        );
    }
}
