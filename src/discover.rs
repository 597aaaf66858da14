use std::path::{Path, PathBuf};

use itertools::Itertools;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};

/// File extensions recognised as Markdown source.
pub const MARKDOWN_EXTENSIONS: [&str; 8] = [
    "markdown", "mdown", "mkdn", "md", "mkd", "mdwn", "mdtxt", "mdtext",
];

/// A discovered Markdown file, split into the directory it was found from
/// and its path below that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkdownFile {
    pub base: PathBuf,
    pub relative: PathBuf,
}

impl MarkdownFile {
    pub fn source(&self) -> PathBuf {
        self.base.join(&self.relative)
    }
}

/// Extension check, ignoring ASCII case (`README.MD` counts).
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Lazily walk `root`, yielding the Markdown files below it.
///
/// Without `recursive` only the immediate children of `root` are looked at.
pub fn scan(root: &Path, recursive: bool) -> impl Iterator<Item = Result<MarkdownFile>> + '_ {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker.into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source.path().unwrap_or(root).to_path_buf();
                return Some(Err(Error::Enumeration { path, source }));
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_markdown(path) {
            tracing::debug!("skipping {}", path.display());
            return None;
        }
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
        Some(Ok(MarkdownFile {
            base: root.to_path_buf(),
            relative,
        }))
    })
}

/// Check a single input path against the mode, before anything is read.
fn check_input(path: &Path, directory: bool) -> Result<()> {
    if !path.exists() {
        return Err(Error::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() != directory {
        return Err(Error::ModeMismatch {
            path: path.to_path_buf(),
            expected_directory: directory,
        });
    }
    if !directory && !is_markdown(path) {
        return Err(Error::NotMarkdown {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn single_file(path: &Path) -> MarkdownFile {
    let base = path.parent().unwrap_or(Path::new("")).to_path_buf();
    let relative = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| path.to_path_buf());
    MarkdownFile { base, relative }
}

/// Turn the configured input paths into the list of files to convert.
pub fn discover(config: &Config) -> Result<Vec<MarkdownFile>> {
    for path in &config.paths {
        check_input(path, config.directory)?;
    }

    let mut files = Vec::new();
    for path in &config.paths {
        if config.directory {
            for file in scan(path, config.recursive) {
                files.push(file?);
            }
        } else {
            files.push(single_file(path));
        }
    }

    Ok(files.into_iter().unique_by(MarkdownFile::source).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Title\n").unwrap();
    }

    fn directory_config(root: &Path, recursive: bool) -> Config {
        Config {
            directory: true,
            recursive,
            paths: vec![root.to_path_buf()],
            ..Default::default()
        }
    }

    #[test]
    fn test_is_markdown() {
        for ext in MARKDOWN_EXTENSIONS {
            assert!(is_markdown(Path::new(&format!("notes.{ext}"))), "{ext}");
        }
        assert!(is_markdown(Path::new("README.MD")));
        assert!(!is_markdown(Path::new("notes.txt")));
        assert!(!is_markdown(Path::new("md")));
        assert!(!is_markdown(Path::new("archive.md.bak")));
    }

    #[test]
    fn test_directory_counts_only_markdown() {
        let temp = TempDir::new().unwrap();
        for name in ["a.md", "b.markdown", "c.mdown", "sub/d.mkd"] {
            touch(temp.path(), name);
        }
        for name in ["e.txt", "f.html", "sub/g.rs"] {
            touch(temp.path(), name);
        }

        let files = discover(&directory_config(temp.path(), true)).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|f| f.base == temp.path()));
        assert!(files.contains(&MarkdownFile {
            base: temp.path().to_path_buf(),
            relative: PathBuf::from("sub/d.mkd"),
        }));
    }

    #[test]
    fn test_shallow_scan_without_recursive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "top.md");
        touch(temp.path(), "nested/deep/inner.md");

        let shallow = discover(&directory_config(temp.path(), false)).unwrap();
        assert_eq!(shallow.len(), 1);
        assert_eq!(shallow[0].relative, PathBuf::from("top.md"));

        let deep = discover(&directory_config(temp.path(), true)).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_directory_skips_markdown_named_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("folder.md")).unwrap();
        touch(temp.path(), "real.md");

        let files = discover(&directory_config(temp.path(), true)).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_traversal_failure_names_the_path() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        fs::create_dir(&gone).unwrap();
        let mut files = scan(&gone, true);
        fs::remove_dir(&gone).unwrap();

        match files.next() {
            Some(Err(Error::Enumeration { path, .. })) => assert_eq!(path, gone),
            other => panic!("expected an enumeration error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_mode_uses_parent_as_base() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "doc.md");
        let config = Config {
            paths: vec![temp.path().join("doc.md")],
            ..Default::default()
        };

        let files = discover(&config).unwrap();
        assert_eq!(
            files,
            vec![MarkdownFile {
                base: temp.path().to_path_buf(),
                relative: PathBuf::from("doc.md"),
            }]
        );
    }

    #[test]
    fn test_duplicate_inputs_collapse() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "doc.md");
        let doc = temp.path().join("doc.md");
        let config = Config {
            paths: vec![doc.clone(), doc],
            ..Default::default()
        };
        assert_eq!(discover(&config).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            paths: vec![temp.path().join("nope.md")],
            ..Default::default()
        };
        assert!(matches!(discover(&config), Err(Error::PathNotFound { .. })));
    }

    #[test]
    fn test_directory_without_directory_mode() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            paths: vec![temp.path().to_path_buf()],
            ..Default::default()
        };
        assert!(matches!(
            discover(&config),
            Err(Error::ModeMismatch {
                expected_directory: false,
                ..
            })
        ));
    }

    #[test]
    fn test_file_in_directory_mode() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "doc.md");
        let config = directory_config(&temp.path().join("doc.md"), true);
        assert!(matches!(
            discover(&config),
            Err(Error::ModeMismatch {
                expected_directory: true,
                ..
            })
        ));
    }

    #[test]
    fn test_not_markdown() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "notes.txt");
        let config = Config {
            paths: vec![temp.path().join("notes.txt")],
            ..Default::default()
        };
        assert!(matches!(discover(&config), Err(Error::NotMarkdown { .. })));
    }

    #[test]
    fn test_invalid_later_input_fails_before_scanning() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "docs/a.md");
        let config = Config {
            directory: true,
            paths: vec![temp.path().join("docs"), temp.path().join("missing")],
            ..Default::default()
        };
        assert!(matches!(discover(&config), Err(Error::PathNotFound { .. })));
    }
}
