// src/identifier.rs
//! Symbol identifiers: `dir/sub/file.go` for file-level symbols and
//! `dir/sub/file.go.(TypeName)` for symbols that belong to a type.

use regex::Regex;
use std::sync::LazyLock;

const SEPARATOR: char = '/';

static TYPE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<file>.+?)\.\((?P<ty>[^()]+)\)$")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// An identifier split into its containment path, file and optional type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub path_segments: Vec<String>,
    pub file_name: String,
    pub type_name: Option<String>,
}

impl Identifier {
    /// Splits `raw` into path segments, file name and type name.
    ///
    /// Empty segments are dropped, so `/a//b/c.go` yields `["a", "b"]`.
    /// An identifier without a file component is kept whole as the file name
    /// so that its metrics still land somewhere in the tree.
    #[must_use]
    pub fn decompose(raw: &str) -> Self {
        let (dirs, last) = match raw.rsplit_once(SEPARATOR) {
            Some((dirs, last)) => (dirs, last),
            None => ("", raw),
        };

        if last.is_empty() {
            return Self::whole(raw);
        }

        let (file_name, type_name) = split_type_suffix(last);
        let path_segments = dirs
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            path_segments,
            file_name,
            type_name,
        }
    }

    /// Builds the identifier string for a file path and optional type name.
    #[must_use]
    pub fn compose(path: &str, type_name: Option<&str>) -> String {
        match type_name {
            Some(name) if !name.is_empty() => format!("{path}.({name})"),
            _ => path.to_string(),
        }
    }

    fn whole(raw: &str) -> Self {
        Self {
            path_segments: Vec::new(),
            file_name: raw.to_string(),
            type_name: None,
        }
    }
}

fn split_type_suffix(component: &str) -> (String, Option<String>) {
    match TYPE_SUFFIX_RE.captures(component) {
        Some(caps) => (caps["file"].to_string(), Some(caps["ty"].to_string())),
        None => (component.to_string(), None),
    }
}
