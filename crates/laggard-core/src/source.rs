use crate::Result;
use flate2::bufread::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, finite, forward-only stream of decoded text lines
pub type LineSource = Box<dyn Iterator<Item = std::io::Result<String>>>;

/// Open a log file as a line iterator
///
/// Decompression is transparent and chosen by suffix: `.gz` files are
/// gunzipped on the fly, everything else is read as plain text. The file is
/// read lazily; an unreadable or truncated stream surfaces as an `Err` item
/// mid-iteration.
pub fn open_lines(path: &Path) -> Result<LineSource> {
    tracing::debug!("Opening log source: {}", path.display());

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(reader)).lines()))
    } else {
        Ok(Box::new(reader.lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn test_plain_text_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access.log-20170630.txt");
        std::fs::write(&path, "first line\nsecond line\n").unwrap();

        let lines: Vec<String> = open_lines(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn test_gzip_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access.log-20170630.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"first line\nsecond line\n").unwrap();
        encoder.finish().unwrap();

        let lines: Vec<String> = open_lines(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_lines(&dir.path().join("absent.log")).is_err());
    }
}
