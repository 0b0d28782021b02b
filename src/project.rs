// src/project.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::error::{CityError, Result};
use crate::lang::Lang;
use crate::model::CityModel;

/// Name used when the project directory has no base name (filesystem root).
const FALLBACK_NAME: &str = "project";

/// A validated project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub name: String,
}

impl Project {
    /// Resolves `path` to a canonical directory and names the project after it.
    ///
    /// # Errors
    /// Returns error if the path does not exist or is not a directory.
    pub fn open(path: &Path) -> Result<Self> {
        let root = fs::canonicalize(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CityError::PathNotFound(path.to_path_buf()),
            _ => CityError::io(e, path),
        })?;
        if !root.is_dir() {
            return Err(CityError::NotADirectory(root));
        }
        let name = project_name(&root);
        Ok(Self { root, name })
    }

    /// Guesses the project language from its build manifest.
    #[must_use]
    pub fn detect_lang(&self) -> Option<Lang> {
        if self.root.join("go.mod").exists() {
            return Some(Lang::Go);
        }
        if self.root.join("Cargo.toml").exists() {
            return Some(Lang::Rust);
        }
        None
    }

    /// Measures the project and builds its laid-out model.
    ///
    /// # Errors
    /// Returns error if the directory walk fails.
    pub fn build_model(&self, config: &Config) -> Result<CityModel> {
        let feed = Analyzer::from_config(&self.root, config).analyze()?;
        log::info!("Generating city model...");
        Ok(CityModel::new(&feed, &self.name))
    }

    /// Default output file name, `<project>.out` or `<project>.json`.
    #[must_use]
    pub fn default_output(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}.{extension}", self.name))
    }
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .map_or_else(|| FALLBACK_NAME.to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_root_falls_back_to_fixed_name() {
        assert_eq!(project_name(Path::new("/")), FALLBACK_NAME);
        assert_eq!(project_name(Path::new("/work/city")), "city");
    }
}
