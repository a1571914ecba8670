//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_descriptor::{Severity, ValidationIssue, ValidationReport, check_documents, validate};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    src_dir: Option<PathBuf>,

    /// Also check that every link has a markdown document.
    #[arg(long)]
    content: bool,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            src_dir: self.src_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let descriptor = config.descriptor();

        let mut issues = validate(descriptor);
        if self.content {
            output.info(&format!(
                "Content: {}",
                config.src_dir_resolved.display()
            ));
            issues.extend(check_documents(descriptor, &config.src_dir_resolved));
        }

        for issue in &issues {
            output.issue(issue);
        }

        let summary = outcome(&issues, self.strict)?;
        output.success(&format!(
            "Checked {} nav entries and {} sidebar sections{summary}",
            descriptor.nav.len(),
            descriptor.sidebar.len()
        ));
        Ok(())
    }
}

/// Decide whether the findings fail the check.
///
/// Returns a summary suffix for the success line.
fn outcome(issues: &[ValidationIssue], strict: bool) -> Result<String, CliError> {
    let errors = issues.count(Severity::Error);
    let warnings = issues.count(Severity::Warning);

    if errors > 0 || (strict && warnings > 0) {
        return Err(CliError::Validation(format!(
            "Navigation check failed: {errors} error(s), {warnings} warning(s)"
        )));
    }

    if warnings > 0 {
        Ok(format!(" ({warnings} warning(s))"))
    } else {
        Ok(String::new())
    }
}
