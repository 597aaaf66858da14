use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::discover::{MarkdownFile, discover};
use crate::error::{Error, Result};
use crate::output::{check_collisions, prepare_output};
use crate::render::Render;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub converted: usize,
}

pub struct Converter<'a, R> {
    config: &'a Config,
    renderer: R,
}

impl<'a, R: Render> Converter<'a, R> {
    pub fn new(config: &'a Config, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Convert one file and return the path written.
    pub fn convert(&self, file: &MarkdownFile) -> Result<PathBuf> {
        let target = prepare_output(file, self.config.destination.as_deref())?;

        // Never clobber without --overwrite, and don't bother reading first
        if !self.config.overwrite && target.exists() {
            return Err(Error::AlreadyExists { path: target });
        }

        let source = file.source();
        let markdown = fs::read_to_string(&source).map_err(|e| Error::Read {
            path: source.clone(),
            source: e,
        })?;

        let html = self.renderer.render(&markdown);

        fs::write(&target, html).map_err(|e| Error::Write {
            path: target.clone(),
            source: e,
        })?;
        tracing::info!("{} -> {}", source.display(), target.display());

        Ok(target)
    }
}

/// Validate, discover and convert, stopping at the first error.
pub fn run<R: Render>(config: &Config, renderer: R) -> Result<Summary> {
    config.validate()?;

    let files = discover(config)?;
    tracing::debug!("found {} markdown file(s)", files.len());
    check_collisions(&files, config.destination.as_deref())?;

    let converter = Converter::new(config, renderer);
    let mut summary = Summary::default();
    for file in &files {
        converter.convert(file)?;
        summary.converted += 1;
    }
    Ok(summary)
}
