// src/analysis/mod.rs
//! Measurement feed: walks a project, parses every selected source file and
//! records line, method and attribute counts per file and per type.

pub mod go;
pub mod rust;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::{Node, Parser};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CityError, Result};
use crate::identifier::Identifier;
use crate::lang::Lang;
use crate::types::{MeasurementFeed, MetricsRecord};

pub struct Analyzer {
    root: PathBuf,
    ignore: Vec<String>,
    languages: Vec<Lang>,
}

impl Analyzer {
    /// Creates an analyzer for Go sources under `root` with nothing ignored.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: Vec::new(),
            languages: vec![Lang::Go],
        }
    }

    #[must_use]
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(root)
            .with_ignore_list(config.ignore.iter().cloned())
            .with_languages(&config.languages)
    }

    /// Skips every path containing one of `items` as a substring.
    #[must_use]
    pub fn with_ignore_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: &[Lang]) -> Self {
        self.languages = languages.to_vec();
        self
    }

    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore.iter().any(|pattern| path.contains(pattern.as_str()))
    }

    /// Measures every selected file under the root.
    ///
    /// Files that fail to read or parse are skipped with a warning.
    ///
    /// # Errors
    /// Returns error if the directory walk fails.
    pub fn analyze(&self) -> Result<MeasurementFeed> {
        let files = self.collect_files()?;
        log::info!("Measuring {} source files", files.len());

        let results: Vec<(PathBuf, Result<MeasurementFeed>)> = files
            .par_iter()
            .map(|path| (path.clone(), self.measure_file(path)))
            .collect();

        let mut feed = MeasurementFeed::new();
        let mut skipped = 0;
        for (path, result) in results {
            match result {
                Ok(records) => merge_feed(&mut feed, records),
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("{skipped} files could not be measured");
        }
        log::debug!("Collected {} symbol records", feed.len());
        Ok(feed)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(lang) = Lang::from_path(path) else {
                continue;
            };
            if !self.languages.contains(&lang) {
                continue;
            }
            if self.is_ignored(&normalize_path(path)) {
                log::debug!("Ignoring {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }
        Ok(files)
    }

    fn measure_file(&self, path: &Path) -> Result<MeasurementFeed> {
        let Some(lang) = Lang::from_path(path) else {
            return Ok(MeasurementFeed::new());
        };
        let source = fs::read_to_string(path).map_err(|e| CityError::io(e, path))?;
        measure_source(lang, &self.identifier_path(path), &source)
    }

    /// Path relative to the root with `/` separators.
    fn identifier_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => normalize_path(rel),
            Err(_) => {
                log::warn!("Could not relativize {}", path.display());
                normalize_path(path)
            }
        }
    }
}

/// Parses `source` and measures it as the file `file_path`.
///
/// # Errors
/// Returns [`CityError::Parse`] if the grammar fails to load or the syntax
/// tree contains errors.
pub fn measure_source(lang: Lang, file_path: &str, source: &str) -> Result<MeasurementFeed> {
    let parse_error = |reason: String| CityError::Parse {
        path: PathBuf::from(file_path),
        reason,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&lang.grammar())
        .map_err(|e| parse_error(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| parse_error("parser returned no tree".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        let line = first_error(root).map_or(0, |n| n.start_position().row + 1);
        return Err(parse_error(format!("syntax error near line {line}")));
    }

    let mut feed = MeasurementFeed::new();
    let bytes = source.as_bytes();
    match lang {
        Lang::Go => go::measure(root, bytes, file_path, &mut feed),
        Lang::Rust => rust::measure(root, bytes, file_path, &mut feed),
    }
    Ok(feed)
}

/// Adds every record of `other` into `feed`.
pub fn merge_feed(feed: &mut MeasurementFeed, other: MeasurementFeed) {
    for (id, record) in other {
        feed.entry(id).or_default().merge(&record);
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(Node::has_error)
        .find_map(first_error)
}

/// Record for `path` or `path.(type_name)`, created empty on first use.
pub(crate) fn record<'f>(
    feed: &'f mut MeasurementFeed,
    path: &str,
    type_name: Option<&str>,
) -> &'f mut MetricsRecord {
    feed.entry(Identifier::compose(path, type_name)).or_default()
}

/// Number of source lines a node spans, counting both ends.
pub(crate) fn span_lines(node: Node) -> usize {
    node.end_position().row - node.start_position().row + 1
}

pub(crate) fn decl_line(node: Node) -> usize {
    node.start_position().row + 1
}

pub(crate) fn text<'s>(node: Node, source: &'s [u8]) -> Option<&'s str> {
    node.utf8_text(source).ok()
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
