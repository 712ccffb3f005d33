use crate::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]{4}[0-1][0-9][0-3][0-9]").unwrap());

static STACKED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w{2,}\.").unwrap());

/// The rotated log file chosen as input for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Extract the 8-digit rotation date (YYYYMMDD) embedded in a filename
///
/// Returns the first such run of digits; the filename may carry other
/// digits around it.
pub fn date_token(name: &str) -> Option<&str> {
    DATE_TOKEN.find(name).map(|m| m.as_str())
}

/// Whether the filename carries stacked dotted suffixes (e.g. `.txt.bz2`)
///
/// Rotation tooling leaves re-compressed copies next to the originals;
/// anything with more than one trailing extension segment is one of those
/// and never a selection candidate. A single suffix (`.txt`, `.log`, `.gz`)
/// is fine.
pub fn has_stacked_suffix(name: &str) -> bool {
    STACKED_SUFFIX.is_match(name)
}

fn candidate_date(name: &str) -> Option<NaiveDate> {
    if has_stacked_suffix(name) {
        return None;
    }
    let token = date_token(name)?;
    match NaiveDate::parse_from_str(token, "%Y%m%d") {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!("Skipping {}: '{}' is not a calendar date ({})", name, token, err);
            None
        }
    }
}

/// Find the rotated access log with the most recent embedded date
///
/// Scans the immediate directory only. Returns `Ok(None)` when no filename
/// qualifies; that is a normal "nothing to do" outcome, not an error. Ties
/// on the date keep the first candidate seen.
pub fn latest_log_file(dir: &Path) -> Result<Option<LogFile>> {
    tracing::debug!("Scanning {} for rotated access logs", dir.display());

    let mut latest: Option<LogFile> = None;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(date) = candidate_date(name) else {
            continue;
        };
        if latest.as_ref().is_none_or(|l| date > l.date) {
            latest = Some(LogFile {
                path: entry.path(),
                date,
            });
        }
    }

    match &latest {
        Some(log) => tracing::info!("Latest access log: {} ({})", log.path.display(), log.date),
        None => tracing::info!("No candidate log files in {}", dir.display()),
    }

    Ok(latest)
}
