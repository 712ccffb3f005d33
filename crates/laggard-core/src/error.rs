use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log source: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Too many malformed log lines: {valid} of {total} parsed, threshold is {threshold}"
    )]
    DataQuality {
        valid: usize,
        total: usize,
        threshold: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
