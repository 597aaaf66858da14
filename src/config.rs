use std::path::PathBuf;

use crate::error::{Error, Result};

/// Run configuration, built once from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Mirror output into this directory instead of writing next to the source.
    pub destination: Option<PathBuf>,
    /// Treat every input path as a directory to scan.
    pub directory: bool,
    pub overwrite: bool,
    /// Scan directories fully instead of their top level only.
    pub recursive: bool,
    pub verbose: bool,
    pub paths: Vec<PathBuf>,
}

impl Config {
    /// Checks that must pass before any input is touched.
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(Error::usage("at least one path is required"));
        }
        if let Some(destination) = &self.destination {
            if !destination.exists() {
                return Err(Error::PathNotFound {
                    path: destination.clone(),
                });
            }
            if !destination.is_dir() {
                return Err(Error::DestinationNotDirectory {
                    path: destination.clone(),
                });
            }
        }
        Ok(())
    }
}
