use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::lang::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Extension used for the default output file name.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Table => "out",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<Lang>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore(),
            languages: default_languages(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// On-disk shape of `codecity.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityToml {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_ignore() -> Vec<String> {
    vec!["/vendor/".into()]
}

fn default_languages() -> Vec<Lang> {
    vec![Lang::Go]
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ignore: Vec<String>,
    pub languages: Vec<Lang>,
    pub format: OutputFormat,
}
