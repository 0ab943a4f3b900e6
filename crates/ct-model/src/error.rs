use thiserror::Error;

use crate::standard::Standard;

/// Input named no known terminology standard.
#[derive(Debug, Clone, Error)]
#[error("unknown standard `{input}`; valid standards are: {valid}", valid = Standard::valid_names())]
pub struct ParseStandardError {
    /// The rejected input, as supplied.
    pub input: String,
}

/// Input was not a `YYYY-MM-DD` package version.
#[derive(Debug, Clone, Error)]
#[error("invalid terminology version `{input}` (expected YYYY-MM-DD)")]
pub struct ParseVersionError {
    /// The rejected input, as supplied.
    pub input: String,
}
