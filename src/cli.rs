use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::config::Config;
use crate::error::{Error, Result};

/// Convert one or more Markdown files to HTML
#[derive(Parser, Debug)]
#[command(name = "mdhtml", author, version, about, long_about = None)]
pub struct Args {
    /// Write output to <DIR>, duplicating the source hierarchy
    #[arg(short, long, value_name = "DIR")]
    destination: Option<PathBuf>,

    /// Treat argument(s) as directories, converting the Markdown files within
    #[arg(short = 'D', long)]
    directory: bool,

    /// Overwrite existing HTML files
    #[arg(short, long)]
    overwrite: bool,

    /// In --directory mode, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Report each converted file
    #[arg(short, long)]
    verbose: bool,

    /// Markdown files, or directories with --directory
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config {
            destination: self.destination,
            directory: self.directory,
            overwrite: self.overwrite,
            recursive: self.recursive,
            verbose: self.verbose,
            paths: self.paths,
        }
    }
}

/// Parse a command line into a [`Config`].
///
/// `--help` and `--version` print and exit straight away. Any other clap
/// failure comes back as a usage error.
pub fn parse_args<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args.into_config()),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(Error::usage(usage_message(&e))),
    }
}

/// One-line description of a clap failure, without clap's usage block.
fn usage_message(e: &clap::Error) -> String {
    let summary = e.kind().as_str().unwrap_or("invalid arguments");
    match e.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => format!("{summary}: {arg}"),
        Some(ContextValue::Strings(args)) => format!("{summary}: {}", args.join(", ")),
        _ => summary.to_string(),
    }
}

pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
