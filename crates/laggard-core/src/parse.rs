/// One observed response-time sample attributed to a URL
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub url: String,
    pub time: f64,
}

/// Positional layout of a whitespace-tokenized access-log line
///
/// The nginx `ui_short` format puts `$request` in the 7th field and
/// `$request_time` in the last one. The URL position is named here rather
/// than hardcoded at the call sites so other layouts can override it; the
/// response time is always the final token.
#[derive(Debug, Clone, Copy)]
pub struct LineSchema {
    pub url_index: usize,
}

impl Default for LineSchema {
    fn default() -> Self {
        Self { url_index: 6 }
    }
}

impl LineSchema {
    /// Parse one raw line into a sample
    ///
    /// Returns `None` for any malformed line: too few tokens, or a final
    /// token that is not a floating-point number of seconds. Never panics;
    /// every line yields exactly one outcome.
    pub fn parse(&self, line: &str) -> Option<Sample> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let url = *tokens.get(self.url_index)?;
        let time: f64 = tokens.last()?.parse().ok()?;
        Some(Sample {
            url: url.to_string(),
            time,
        })
    }
}
