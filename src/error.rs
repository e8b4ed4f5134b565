// src/error.rs
// =============================================================================
// Errors that abort a run.
//
// A failed link probe is NOT in here: it is recovered on the spot into the
// "Broken Link" outcome (see checker::http). Everything below is fatal for the
// run and bubbles up to main, which prints it and exits with code 2.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    /// A markdown document could not be opened or read.
    #[error("failed to read file `{}`: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read files from directory `{}`: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("an error occurred while making directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client itself could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("GitHub rejected the contents listing for `{path}`: HTTP {status}")]
    GitHub { path: String, status: u16 },

    #[error("request to `{url}` failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_error_names_the_file() {
        let err = CheckError::ReadFile {
            path: PathBuf::from("docs/owner/repo/missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("docs/owner/repo/missing.md"));
        assert!(message.contains("not found"));
    }
}
