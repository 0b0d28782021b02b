// src/config/mod.rs
pub mod types;

pub use self::types::{AnalysisConfig, CityToml, Config, OutputConfig, OutputFormat};

use std::fs;
use std::path::Path;

use crate::error::{CityError, Result};

pub const CONFIG_FILE: &str = "codecity.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::from_toml(CityToml::default())
    }

    /// Loads `codecity.toml` from `project_dir`, falling back to defaults
    /// when the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| CityError::io(e, &path))?;
        let config = Self::parse_toml(&content).map_err(|reason| CityError::Config {
            path: path.clone(),
            reason,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses the contents of a `codecity.toml`.
    ///
    /// # Errors
    /// Returns the parser's message if the TOML is malformed.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str::<CityToml>(content)
            .map(Self::from_toml)
            .map_err(|e| e.to_string())
    }

    fn from_toml(file: CityToml) -> Self {
        Self {
            ignore: file.analysis.ignore,
            languages: file.analysis.languages,
            format: file.output.format,
        }
    }

    /// Adds ignore substrings on top of the configured ones.
    pub fn extend_ignore<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        for item in extra {
            if !self.ignore.contains(&item) {
                self.ignore.push(item);
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
