use crate::parse::LineSchema;
use crate::{Error, Result};
use std::collections::HashMap;
use std::io;

/// Per-URL samples plus run-wide totals from one pass over a log
///
/// `valid_lines` always equals the number of samples held in `per_url`;
/// `total_lines` additionally counts the lines the parser rejected.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub per_url: HashMap<String, Vec<f64>>,
    pub valid_lines: usize,
    pub total_lines: usize,
    pub time_sum: f64,
}

/// Consume a line source exactly once, accumulating samples per URL
///
/// Malformed lines are counted and skipped; they never abort the pass. The
/// quality gate runs once, after the whole source is consumed: if the source
/// was empty or fewer than `threshold` of its lines parsed, the run fails
/// with [`Error::DataQuality`] and no partial state is returned. An `Err`
/// item from the source (mid-stream read or decompression failure)
/// propagates immediately.
pub fn aggregate<I>(lines: I, schema: &LineSchema, threshold: f64) -> Result<Aggregation>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut agg = Aggregation::default();

    for line in lines {
        let line = line?;
        agg.total_lines += 1;
        let Some(sample) = schema.parse(&line) else {
            tracing::debug!("Skipping malformed line {}", agg.total_lines);
            continue;
        };
        agg.per_url.entry(sample.url).or_default().push(sample.time);
        agg.valid_lines += 1;
        agg.time_sum += sample.time;
    }

    if agg.total_lines == 0
        || (agg.valid_lines as f64 / agg.total_lines as f64) < threshold
    {
        return Err(Error::DataQuality {
            valid: agg.valid_lines,
            total: agg.total_lines,
            threshold,
        });
    }

    tracing::info!(
        "Aggregated {} of {} lines across {} urls",
        agg.valid_lines,
        agg.total_lines,
        agg.per_url.len()
    );

    Ok(agg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<io::Result<String>> {
        raw.iter().map(|l| Ok(l.to_string())).collect()
    }

    fn line(url: &str, time: &str) -> String {
        format!("ip - - [ts +0300] \"GET {url} HTTP/1.1\" 200 1 \"-\" \"-\" {time}")
    }

    #[test]
    fn test_accumulates_per_url() {
        let raw = vec![
            Ok(line("/a", "0.1")),
            Ok(line("/b", "0.2")),
            Ok(line("/a", "0.3")),
        ];
        let agg = aggregate(raw, &LineSchema::default(), 0.7).unwrap();

        assert_eq!(agg.total_lines, 3);
        assert_eq!(agg.valid_lines, 3);
        assert_eq!(agg.per_url["/a"], vec![0.1, 0.3]);
        assert_eq!(agg.per_url["/b"], vec![0.2]);
        assert!((agg.time_sum - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_url_sample_lists_are_independent() {
        let raw = vec![Ok(line("/a", "0.1")), Ok(line("/b", "0.2"))];
        let agg = aggregate(raw, &LineSchema::default(), 0.7).unwrap();

        assert_eq!(agg.per_url["/a"].len(), 1);
        assert_eq!(agg.per_url["/b"].len(), 1);
    }

    #[test]
    fn test_valid_count_matches_stored_samples() {
        let raw = vec![
            Ok(line("/a", "0.1")),
            Ok("garbage".to_string()),
            Ok(line("/a", "0.2")),
            Ok(line("/c", "0.4")),
        ];
        let agg = aggregate(raw, &LineSchema::default(), 0.7).unwrap();

        let stored: usize = agg.per_url.values().map(Vec::len).sum();
        assert_eq!(agg.valid_lines, stored);
        assert_eq!(agg.total_lines, 4);
    }

    #[test]
    fn test_quality_gate_rejects_mostly_malformed_input() {
        let raw = lines(&["junk one", "junk two", "junk three"]);
        let result = aggregate(raw, &LineSchema::default(), 0.7);

        match result {
            Err(Error::DataQuality { valid, total, threshold }) => {
                assert_eq!(valid, 0);
                assert_eq!(total, 3);
                assert_eq!(threshold, 0.7);
            }
            other => panic!("expected DataQuality, got {other:?}"),
        }
    }

    #[test]
    fn test_quality_gate_boundary() {
        // 7 of 10 lines parse: exactly at the default threshold, accepted
        let mut raw: Vec<io::Result<String>> =
            (0..7).map(|_| Ok(line("/a", "0.1"))).collect();
        raw.extend(lines(&["junk", "junk", "junk"]));

        assert!(aggregate(raw, &LineSchema::default(), 0.7).is_ok());
    }

    #[test]
    fn test_empty_input_fails_gate() {
        let result = aggregate(Vec::new(), &LineSchema::default(), 0.7);
        assert!(matches!(result, Err(Error::DataQuality { total: 0, .. })));
    }

    #[test]
    fn test_read_error_propagates() {
        let raw: Vec<io::Result<String>> = vec![
            Ok(line("/a", "0.1")),
            Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt gzip member")),
        ];
        let result = aggregate(raw, &LineSchema::default(), 0.7);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
