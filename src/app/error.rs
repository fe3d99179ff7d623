use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run. Per-file problems never surface here; they are
/// logged and the file is dropped.
#[derive(Debug, Error)]
pub enum CatError {
    #[error("Cannot read root directory '{path}': {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No files found with extensions: {0}")]
    NoFilesFound(String),

    #[error(
        "No file extensions specified. Use -e/--ext to specify extensions or -e none to match all files"
    )]
    NoExtensions,

    #[error("Failed to write output file '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
