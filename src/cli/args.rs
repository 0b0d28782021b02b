use clap::Parser;
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::lang::Lang;

#[derive(Parser, Debug)]
#[command(
    name = "codecity",
    version,
    about = "Measure a source tree and lay it out as a code city"
)]
pub struct Cli {
    /// Project directory to analyze
    pub project: PathBuf,

    /// Output file name, or STDOUT to stream the report [default: <project>.out]
    pub output: Option<String>,

    /// Report format (overrides codecity.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip paths containing this substring (repeatable, adds to codecity.toml)
    #[arg(long, value_name = "SUBSTR")]
    pub ignore: Vec<String>,

    /// Languages to measure (repeatable, replaces codecity.toml): go, rust
    #[arg(long = "lang", value_name = "LANG")]
    pub languages: Vec<Lang>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
