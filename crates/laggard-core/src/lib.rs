pub mod aggregate;
pub mod analyze;
pub mod error;
pub mod parse;
pub mod select;
pub mod source;
pub mod stats;

pub use error::{Error, Result};
