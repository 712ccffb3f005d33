use crate::config::Config;
use crate::render;
use anyhow::{Context, Result};
use laggard_core::analyze::{self, AnalysisOptions};
use laggard_core::select;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    run(&config)
}

/// Full report flow: pick the latest log, analyze it, write the HTML artifact
///
/// Finding no candidate log is a normal outcome (nothing to do). A log whose
/// report already exists is not re-analyzed. The timestamp marker is updated
/// on every successful run, including the already-reported case.
pub fn run(config: &Config) -> Result<()> {
    let Some(log) = select::latest_log_file(&config.log_dir)? else {
        tracing::info!("No access log to analyze in {}", config.log_dir.display());
        return Ok(());
    };

    let report_file = config
        .report_dir
        .join(format!("report-{}.html", log.date.format("%Y.%m.%d")));

    if report_file.exists() {
        tracing::info!("Log already covered by {}", report_file.display());
    } else {
        let options = AnalysisOptions {
            error_threshold: config.error_threshold,
            report_size: Some(config.report_size),
            ..AnalysisOptions::default()
        };
        let entries = analyze::analyze_file(&log.path, &options)?;

        let template = match &config.template_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?,
            None => render::EMBEDDED_TEMPLATE.to_string(),
        };
        let html = render::render_html(&template, &entries)?;

        std::fs::create_dir_all(&config.report_dir)?;
        std::fs::write(&report_file, html)
            .with_context(|| format!("Failed to write report: {}", report_file.display()))?;
        tracing::info!("Report written to {}", report_file.display());
    }

    update_timestamp(&config.timestamp_file)?;
    Ok(())
}

/// Record the unix time of the last successful run
pub fn update_timestamp(path: &Path) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)?
        .as_secs()
        .to_string();
    std::fs::write(path, &now)
        .with_context(|| format!("Failed to write timestamp file: {}", path.display()))?;

    tracing::debug!("Timestamp marker updated: {}", path.display());
    Ok(now)
}
