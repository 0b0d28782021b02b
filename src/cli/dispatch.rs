// src/cli/dispatch.rs
//! Runs the analyzer for parsed command-line arguments.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::project::Project;
use crate::reporting::{self, Destination};

use super::args::Cli;

/// Opens the project, builds its model and writes the report.
///
/// # Errors
/// Returns error on an invalid project path, a malformed config, a failed
/// walk, or an unwritable destination.
pub fn execute(cli: &Cli) -> Result<()> {
    let project = Project::open(&cli.project).context("cannot open project")?;
    let config = resolve_config(cli, &project).context("cannot load configuration")?;

    log::info!("Analyzing project: {}", project.name);
    log::info!("Input path: {}", project.root.display());
    if let Some(lang) = project.detect_lang() {
        if !config.languages.contains(&lang) {
            log::warn!("Project looks like {lang} but only {:?} is measured", config.languages);
        }
    }

    let model = project
        .build_model(&config)
        .context("source analysis failed")?;

    log::info!("Rendering report...");
    let report = reporting::render(&model, config.format)?;
    let destination = Destination::from_arg(
        cli.output.as_deref(),
        project.default_output(config.format.extension()),
    );
    destination.write(&report)?;

    if let Destination::File(path) = &destination {
        log::info!("Analysis complete. Report written to {}", path.display());
    }
    Ok(())
}

/// Project `codecity.toml` with command-line overrides applied.
///
/// # Errors
/// Returns error if the config file is malformed.
pub fn resolve_config(cli: &Cli, project: &Project) -> crate::error::Result<Config> {
    let mut config = Config::load(&project.root)?;
    config.extend_ignore(cli.ignore.iter().cloned());
    if !cli.languages.is_empty() {
        config.languages.clone_from(&cli.languages);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    Ok(config)
}
