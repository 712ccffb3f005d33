use crate::parse::LineSchema;
use crate::stats::{self, ReportEntry};
use crate::{Result, aggregate, source};
use std::path::Path;

/// Minimum fraction of parseable lines required to accept a log
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.7;

/// Immutable knobs for one analysis run
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub schema: LineSchema,
    /// Quality gate: reject the run below this parse ratio
    pub error_threshold: f64,
    /// Keep only the N slowest URLs; `None` keeps everything
    pub report_size: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            schema: LineSchema::default(),
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            report_size: None,
        }
    }
}

/// Run the full pipeline over one log file
///
/// Opens the file (gunzipping if needed), aggregates samples in a single
/// pass, computes per-URL statistics and returns them ranked by descending
/// average response time.
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<Vec<ReportEntry>> {
    tracing::info!("Analyzing access log: {}", path.display());

    let lines = source::open_lines(path)?;
    let agg = aggregate::aggregate(lines, &options.schema, options.error_threshold)?;
    let mut entries = stats::compute_entries(&agg);
    stats::rank(&mut entries, options.report_size);

    tracing::info!("Analysis complete: {} urls ranked", entries.len());
    Ok(entries)
}
