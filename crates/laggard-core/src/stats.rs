use crate::aggregate::Aggregation;
use serde::Serialize;

/// Computed statistics for one URL, ready for ranking and rendering
///
/// Field names match the columns of the rendered report table.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub url: String,
    pub count: usize,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

/// Median of a non-empty sample list
///
/// Sorts in place. Odd-length lists yield the middle element; even-length
/// lists yield the mean of the two middle elements. Unrounded.
pub fn median(samples: &mut [f64]) -> f64 {
    debug_assert!(!samples.is_empty());
    samples.sort_by(f64::total_cmp);
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[mid]
    } else {
        0.5 * (samples[mid - 1] + samples[mid])
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compute one report entry per URL from a finished aggregation
///
/// The percentage and average columns are rounded to three decimals; sum,
/// max and median are left exact. Output order is unspecified; run the
/// result through [`rank`] before presenting it.
pub fn compute_entries(agg: &Aggregation) -> Vec<ReportEntry> {
    tracing::debug!("Computing statistics for {} urls", agg.per_url.len());

    let mut entries = Vec::with_capacity(agg.per_url.len());
    for (url, times) in &agg.per_url {
        let mut times = times.clone();
        let count = times.len();
        let time_sum: f64 = times.iter().sum();
        let time_max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let time_med = median(&mut times);

        // A log of all-zero times is valid; avoid a 0/0 NaN in the share
        let time_perc = if agg.time_sum == 0.0 {
            0.0
        } else {
            round3(time_sum / agg.time_sum)
        };

        entries.push(ReportEntry {
            url: url.clone(),
            count,
            count_perc: round3(count as f64 / agg.valid_lines as f64),
            time_sum,
            time_perc,
            time_avg: round3(time_sum / count as f64),
            time_max,
            time_med,
        });
    }
    entries
}

/// Order entries by descending average time, then truncate to the report size
///
/// Truncation happens strictly after sorting, so a limit keeps the slowest
/// URLs, not the first-seen ones.
pub fn rank(entries: &mut Vec<ReportEntry>, limit: Option<usize>) {
    entries.sort_by(|a, b| b.time_avg.total_cmp(&a.time_avg));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
}
