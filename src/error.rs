use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad command line. `show_usage` is decided where the error is built.
    #[error("{message}")]
    Usage { message: String, show_usage: bool },

    #[error("{} does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("{} is {}", path.display(), mismatch_hint(*expected_directory))]
    ModeMismatch {
        path: PathBuf,
        expected_directory: bool,
    },

    #[error("{} is not a markdown file", path.display())]
    NotMarkdown { path: PathBuf },

    #[error("{} already exists (use --overwrite to replace it)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{} would be written by more than one source: {}", path.display(), join_paths(sources))]
    OutputCollision { path: PathBuf, sources: Vec<PathBuf> },

    #[error("destination {} is not a directory", path.display())]
    DestinationNotDirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to enumerate {}: {source}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn mismatch_hint(expected_directory: bool) -> &'static str {
    if expected_directory {
        "not a directory (--directory is set)"
    } else {
        "a directory (pass --directory to convert it)"
    }
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Error::Usage {
            message: message.into(),
            show_usage: true,
        }
    }

    pub fn show_usage(&self) -> bool {
        matches!(
            self,
            Error::Usage {
                show_usage: true,
                ..
            }
        )
    }
}
