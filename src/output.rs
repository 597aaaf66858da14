use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::discover::MarkdownFile;
use crate::error::{Error, Result};

/// Where the HTML for `file` goes. Only the last extension is swapped, so
/// `a.b.md` becomes `a.b.html`.
pub fn html_path(file: &MarkdownFile, destination: Option<&Path>) -> PathBuf {
    let root = destination.unwrap_or(file.base.as_path());
    root.join(&file.relative).with_extension("html")
}

/// Like [`html_path`], but also creates the mirrored directories under
/// `destination`.
pub fn prepare_output(file: &MarkdownFile, destination: Option<&Path>) -> Result<PathBuf> {
    let target = html_path(file, destination);
    if destination.is_some()
        && let Some(parent) = target.parent()
    {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(target)
}

/// Fail if two discovered files would produce the same HTML file.
pub fn check_collisions(files: &[MarkdownFile], destination: Option<&Path>) -> Result<()> {
    let by_target: HashMap<PathBuf, Vec<PathBuf>> = files
        .iter()
        .map(|file| (html_path(file, destination), file.source()))
        .into_group_map();

    // Report the first clash in discovery order
    for file in files {
        let path = html_path(file, destination);
        if let Some(sources) = by_target.get(&path)
            && sources.len() > 1
        {
            return Err(Error::OutputCollision {
                path,
                sources: sources.clone(),
            });
        }
    }
    Ok(())
}
