//! Report rendering and delivery.
//!
//! The report goes either to stdout or to a file; diagnostics never do,
//! they go through `log` to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::error::{CityError, Result};
use crate::model::{export, flatten, CityModel};

/// Argument value that selects streaming to standard output.
pub const STDOUT_TOKEN: &str = "STDOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Interprets the optional output argument; `default` is used when absent.
    #[must_use]
    pub fn from_arg(arg: Option<&str>, default: PathBuf) -> Self {
        match arg {
            Some(STDOUT_TOKEN) => Self::Stdout,
            Some(name) => Self::File(PathBuf::from(name)),
            None => Self::File(default),
        }
    }

    /// Writes `content` to the destination.
    ///
    /// # Errors
    /// Returns error if the file or stdout cannot be written.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(content.as_bytes())
                    .and_then(|()| out.flush())
                    .map_err(|source| CityError::Output {
                        source,
                        path: PathBuf::from("<stdout>"),
                    })?;
            }
            Self::File(path) => {
                fs::write(path, content).map_err(|source| CityError::Output {
                    source,
                    path: path.clone(),
                })?;
            }
        }
        Ok(())
    }
}

/// Renders the model in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(model: &CityModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(flatten::render_table(model)),
        OutputFormat::Json => export::render_json(model),
    }
}
